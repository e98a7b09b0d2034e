//! Controller interaction errors.

use std::fmt;

/// Which login stage rejected the credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStage {
    /// JSON-RPC `sys/login/user` exec call.
    Api,
    /// `flatui_auth` web-UI login.
    WebUi,
}

impl fmt::Display for LoginStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginStage::Api => write!(f, "API"),
            LoginStage::WebUi => write!(f, "web UI"),
        }
    }
}

/// Errors raised while talking to the controller.
///
/// Extraction misses are not errors; they are `None` results from
/// [`crate::extract::extract_script_run`] and only skip a device.
#[derive(Debug, thiserror::Error)]
pub enum FmgError {
    /// The controller rejected one of the two login stages.
    #[error("{stage} login rejected by the controller (code {code}: {message})")]
    AuthRejected {
        stage: LoginStage,
        code: i64,
        message: String,
    },

    /// A response decoded, but not into the shape the call requires.
    #[error("unexpected response shape from the controller while {context}")]
    MalformedResponse { context: &'static str },

    /// Network or HTTP-level failure on any call.
    #[error("request to the controller failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FmgError {
    /// True when the run failed because the controller refused the credentials.
    pub fn is_auth(&self) -> bool {
        matches!(self, FmgError::AuthRejected { .. })
    }
}
