//! Blocking HTTPS transport to the controller.
//!
//! One request in flight at a time; the controller's session and cookie
//! state is not proven safe for concurrent use, so nothing here is shared
//! across threads.

use std::time::Duration;

use tracing::debug;

use crate::error::FmgError;

/// JSON-RPC endpoint (login, device enumeration).
pub const JSONRPC_PATH: &str = "/jsonrpc";
/// Web-UI login endpoint (sets the session cookies).
pub const FLATUI_AUTH_PATH: &str = "/cgi-bin/module/flatui_auth";
/// Web-UI proxy endpoint (task/script history).
pub const FLATUI_PROXY_PATH: &str = "/cgi-bin/module/flatui_proxy";

/// Transport tuning knobs, resolved from flags and the config file.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Accept invalid or self-signed TLS certificates. Off unless the user
    /// opts in with `--insecure` or `allow_invalid_certs = true`.
    pub allow_invalid_certs: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            allow_invalid_certs: false,
        }
    }
}

/// HTTP client bound to one controller host.
///
/// The cookie store doubles as the run's cookie jar: the web-UI login
/// response fills it, the history fetches send it back.
pub struct Transport {
    client: reqwest::blocking::Client,
    base: String,
}

impl Transport {
    /// Build a transport for the given controller host.
    ///
    /// `host` is an IP or FQDN; a scheme prefix is accepted and normalized.
    pub fn new(host: &str, options: &TransportOptions) -> Result<Self, FmgError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(options.timeout_secs))
            .danger_accept_invalid_certs(options.allow_invalid_certs)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            client,
            base: base_url(host),
        })
    }

    /// POST a JSON body to one of the controller endpoints.
    ///
    /// Returns the raw response; the caller decides how strictly to decode.
    /// Bodies are not logged - they carry credentials.
    pub fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::blocking::Response, FmgError> {
        let url = format!("{}{}", self.base, path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send()?;
        debug!("{} <- {}", response.status(), url);
        Ok(response)
    }

    /// Base URL of the controller (`https://{host}`).
    pub fn base(&self) -> &str {
        &self.base
    }
}

fn base_url(host: &str) -> String {
    let trimmed = host.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
