//! Wire types for the two controller subsystems.
//!
//! The controller exposes a programmatic JSON-RPC API (`/jsonrpc`) and a
//! separate web-UI layer (`/cgi-bin/module/flatui_*`). Login and device
//! enumeration go through the former; the script-history endpoint is only
//! reachable through the latter, with the cookies obtained from its login.

use serde::{Deserialize, Serialize};

/// Envelope for `/jsonrpc` calls.
///
/// `session` is serialized even when `None` - the login call sends an
/// explicit `"session": null`.
#[derive(Debug, Serialize)]
pub struct RpcRequest<P> {
    pub id: u32,
    pub method: &'static str,
    pub params: Vec<P>,
    pub session: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<u8>,
}

/// Parameters of the `sys/login/user` exec call.
#[derive(Debug, Serialize)]
pub struct LoginParams {
    pub data: Vec<LoginData>,
    pub url: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LoginData {
    pub passwd: String,
    pub user: String,
}

/// Parameters of the per-ADOM device collection query.
#[derive(Debug, Serialize)]
pub struct DeviceQueryParams {
    pub loadsub: u8,
    pub url: String,
    pub fields: Vec<&'static str>,
    pub filter: Vec<[String; 3]>,
}

/// Response envelope of `/jsonrpc` calls.
#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default)]
    pub result: Vec<RpcResult<T>>,
    #[serde(default)]
    pub session: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RpcResult<T> {
    #[serde(default)]
    pub status: Option<RpcStatus>,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct RpcStatus {
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

/// One managed device, reduced to the fields the report needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeviceRef {
    #[serde(default)]
    pub hostname: String,
    #[serde(rename = "sn", default)]
    pub serial: String,
}

/// Envelope for `/cgi-bin/module/flatui_*` calls.
#[derive(Debug, Serialize)]
pub struct FlatuiRequest<P> {
    pub url: &'static str,
    pub method: &'static str,
    pub params: P,
}

/// Parameters of the web-UI login.
#[derive(Debug, Serialize)]
pub struct WebLoginParams {
    pub username: String,
    pub secretkey: String,
    pub logintype: u8,
}

/// Parameters of the per-device task history query.
///
/// The ADOM here is fixed to `"root"` regardless of the ADOM used for device
/// enumeration; the upstream endpoint behaves this way (see DESIGN.md).
#[derive(Debug, Serialize)]
pub struct TaskQueryParams {
    #[serde(rename = "deviceName")]
    pub device_name: String,
    #[serde(rename = "adomName")]
    pub adom_name: &'static str,
}

/// Task/script history of one device, decoded permissively.
///
/// The web-UI layer does not document this envelope; every field defaults so
/// that a malformed or empty body reads as "no history" instead of an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskHistory {
    #[serde(default)]
    pub result: Vec<TaskResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskResult {
    #[serde(default)]
    pub data: Vec<TaskEntry>,
}

/// One logged script execution, with its free-form console output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskEntry {
    #[serde(default)]
    pub script_name: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl TaskHistory {
    /// Entries of the first result block; the controller never sends more.
    pub fn entries(&self) -> &[TaskEntry] {
        self.result.first().map(|r| r.data.as_slice()).unwrap_or(&[])
    }
}
