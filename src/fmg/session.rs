//! Two-stage authentication against the controller.
//!
//! Stage 1 logs into the JSON-RPC API and yields the opaque session token.
//! Stage 2 logs into the web-UI layer and fills the transport's cookie jar;
//! the history endpoint is only reachable with those cookies. Both stages
//! run back to back - a session is never half-authenticated.

use reqwest::StatusCode;
use tracing::debug;

use crate::error::{FmgError, LoginStage};
use crate::fmg::protocol::{
    FlatuiRequest, LoginData, LoginParams, RpcRequest, RpcResponse, WebLoginParams,
};
use crate::fmg::transport::{Transport, FLATUI_AUTH_PATH, JSONRPC_PATH};

/// Unauthenticated client for one controller host.
pub struct FmgClient {
    transport: Transport,
}

/// Authenticated session: the transport (with its cookie jar) plus the API
/// session token. Immutable after login; there is no logout.
pub struct FmgSession {
    pub(crate) transport: Transport,
    pub(crate) token: String,
}

impl FmgClient {
    /// Wrap an already-built transport.
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    /// Run both login stages and return the authenticated session.
    ///
    /// Fails with [`FmgError::AuthRejected`] when either stage refuses the
    /// credentials; nothing is retried.
    pub fn login(self, username: &str, password: &str) -> Result<FmgSession, FmgError> {
        let token = self.login_api(username, password)?;
        self.login_web_ui(username, password)?;
        debug!("authenticated against {}", self.transport.base());

        Ok(FmgSession {
            transport: self.transport,
            token,
        })
    }

    /// Stage 1: `exec sys/login/user` on the JSON-RPC endpoint.
    fn login_api(&self, username: &str, password: &str) -> Result<String, FmgError> {
        let request = RpcRequest {
            id: 1,
            method: "exec",
            params: vec![LoginParams {
                data: vec![LoginData {
                    passwd: password.to_string(),
                    user: username.to_string(),
                }],
                url: "sys/login/user",
            }],
            session: None,
            verbose: Some(1),
        };

        let response = self.transport.post_json(JSONRPC_PATH, &request)?;
        let envelope: RpcResponse<serde_json::Value> =
            response.json().map_err(|_| FmgError::MalformedResponse {
                context: "decoding the login response",
            })?;

        let status = envelope
            .result
            .first()
            .and_then(|r| r.status.as_ref())
            .ok_or(FmgError::MalformedResponse {
                context: "reading the login status",
            })?;

        if status.code != 0 {
            return Err(FmgError::AuthRejected {
                stage: LoginStage::Api,
                code: status.code,
                message: status.message.clone(),
            });
        }

        envelope.session.ok_or(FmgError::MalformedResponse {
            context: "reading the session token",
        })
    }

    /// Stage 2: `login` on the web-UI auth endpoint. Success is HTTP 200;
    /// the cookie jar picks up the `Set-Cookie` headers.
    fn login_web_ui(&self, username: &str, password: &str) -> Result<(), FmgError> {
        let request = FlatuiRequest {
            url: "/gui/userauth",
            method: "login",
            params: WebLoginParams {
                username: username.to_string(),
                secretkey: password.to_string(),
                logintype: 0,
            },
        };

        let response = self.transport.post_json(FLATUI_AUTH_PATH, &request)?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FmgError::AuthRejected {
                stage: LoginStage::WebUi,
                code: i64::from(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        Ok(())
    }
}

impl FmgSession {
    /// The opaque API session token obtained at login.
    pub fn token(&self) -> &str {
        &self.token
    }
}
