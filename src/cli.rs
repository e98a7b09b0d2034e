//! CLI definitions.
//!
//! The clap structures live here, separated from main.rs, so completion
//! generation can access them through `CommandFactory`.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

/// Version string; dev builds carry the git commit from the build script.
pub fn version() -> &'static str {
    let base = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) => Box::leak(format!("{} ({})", base, sha).into_boxed_str()),
        None => base,
    }
}

#[derive(Parser)]
#[command(name = "fmghist")]
#[command(styles = build_cli_styles())]
#[command(about = "Collect FortiGate script execution history from FortiManager")]
#[command(
    long_about = "FortiManager Script-History Collector.

Logs into a FortiManager controller, enumerates the FortiGate devices of one
ADOM matching a platform filter, pulls each device's script execution history
and extracts the hostname plus the rtc_time/rtc_date values the script
printed. The result lands in a timestamped CSV report.

Every input can come from a flag, an FMG_* environment variable, the config
file, or an interactive prompt - in that order.

QUICK START:
    fmghist run --fmg 10.0.0.1 --adom root --platform FortiGate-60F --script backup
    fmghist config show            Inspect the config file
    fmghist completions zsh        Generate shell completions"
)]
#[command(version = version())]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a collection pass against the controller
    #[command(long_about = "Run one collection pass against the controller.

Authenticates (API login plus web-UI login), lists the devices of the ADOM
whose platform string matches, fetches each device's script history and
writes one CSV row per device where the script ran. Missing inputs are
prompted for; the password prompt never echoes.

EXAMPLES:
    fmghist run --fmg 10.0.0.1 --user admin --adom prod \\
        --platform FortiGate-VM64 --script backup
    FMG_IP=10.0.0.1 FMG_ADOM=prod fmghist run --script backup
    fmghist run --insecure --script backup     Lab controller, self-signed cert")]
    Run(RunArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(long_about = "Generate a completion script for the given shell.

EXAMPLE:
    fmghist completions zsh > ~/.zfunc/_fmghist")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

/// Inputs of one collection run; anything left unset falls back to the
/// environment, the config file, then a prompt.
#[derive(Args)]
pub struct RunArgs {
    /// FortiManager IP/FQDN
    #[arg(long)]
    pub fmg: Option<String>,

    /// FortiManager username
    #[arg(long)]
    pub user: Option<String>,

    /// FortiManager password (prefer FMG_PASS or the prompt over this flag)
    #[arg(long)]
    pub password: Option<String>,

    /// ADOM holding the devices
    #[arg(long)]
    pub adom: Option<String>,

    /// Platform filter (e.g. FortiGate-VM64, FortiGate-60F, FortiGate-100F)
    #[arg(long)]
    pub platform: Option<String>,

    /// Script name whose execution history to collect
    #[arg(long)]
    pub script: Option<String>,

    /// Directory the CSV report is written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept invalid TLS certificates (self-signed controllers)
    #[arg(long)]
    pub insecure: bool,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Open configuration in editor
    Edit,
}
