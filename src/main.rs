//! FortiManager Script-History Collector - CLI entry point

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::warn;

use fmghist::cli::{Cli, Commands, ConfigCommands, RunArgs};
use fmghist::config::{self, env_keys};
use fmghist::fmg::{Transport, TransportOptions};
use fmghist::{Collector, Config, FmgClient, RunParams};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => cmd_run(args),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cmd_config_show(),
            ConfigCommands::Edit => cmd_config_edit(),
        },
        Commands::Completions { shell } => cmd_completions(shell),
    }
}

/// Initialize the log subscriber. `-v` selects debug level; `RUST_LOG`
/// overrides both. Logs go to stderr so stdout stays clean for output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn cmd_run(args: RunArgs) -> Result<()> {
    let config = Config::load()?;

    let host = resolve_or_prompt(
        args.fmg,
        env_keys::HOST,
        config.controller.host.as_deref(),
        "FortiManager IP/FQDN",
    )?;
    let username = resolve_or_prompt(
        args.user,
        env_keys::USERNAME,
        config.controller.username.as_deref(),
        "FortiManager username",
    )?;
    // The password is never read from the config file
    let password = match config::resolve_input(
        args.password,
        config::env_value(env_keys::PASSWORD),
        None,
    ) {
        Some(value) => value,
        None => prompt_password("FortiManager password")?,
    };
    let adom = resolve_or_prompt(
        args.adom,
        env_keys::ADOM,
        config.controller.adom.as_deref(),
        "ADOM",
    )?;
    let platform = resolve_or_prompt(
        args.platform,
        env_keys::PLATFORM,
        config.controller.platform.as_deref(),
        "Platform (e.g. FortiGate-VM64, FortiGate-60F, FortiGate-100F)",
    )?;
    let script = resolve_or_prompt(
        args.script,
        env_keys::SCRIPT,
        config.controller.script.as_deref(),
        "Script name",
    )?;

    let options = TransportOptions {
        timeout_secs: args.timeout.unwrap_or(config.controller.timeout_secs),
        allow_invalid_certs: args.insecure || config.controller.allow_invalid_certs,
    };
    if options.allow_invalid_certs {
        warn!("TLS certificate verification is disabled for this run");
    }

    let output_dir = args
        .output_dir
        .unwrap_or_else(|| PathBuf::from(&config.report.output_dir));

    let transport = Transport::new(&host, &options)?;
    let client = FmgClient::new(transport);
    let collector = Collector::new(RunParams {
        adom,
        platform,
        script,
        output_dir,
    });

    let path = collector.run_and_export(client, &username, &password)?;
    println!("Data has been saved to {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

/// Open the config file in $EDITOR (defaults to 'vi'), creating it first.
fn cmd_config_edit() -> Result<()> {
    let config_path = Config::config_path()?;

    if !config_path.exists() {
        Config::default().save()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    std::process::Command::new(&editor)
        .arg(&config_path)
        .status()
        .with_context(|| format!("Failed to open editor: {}", editor))?;

    Ok(())
}

fn cmd_completions(shell: clap_complete::Shell) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "fmghist", &mut io::stdout());
    Ok(())
}

/// Flag, environment, config file - in that order - else ask the user.
fn resolve_or_prompt(
    flag: Option<String>,
    env_name: &str,
    file_value: Option<&str>,
    label: &str,
) -> Result<String> {
    match config::resolve_input(flag, config::env_value(env_name), file_value) {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    let value = input.trim().to_string();

    if value.is_empty() {
        bail!("{} is required", label);
    }
    Ok(value)
}

fn prompt_password(label: &str) -> Result<String> {
    let value = rpassword::prompt_password(format!("{}: ", label))
        .context("Failed to read password")?;

    if value.is_empty() {
        bail!("{} is required", label);
    }
    Ok(value)
}
