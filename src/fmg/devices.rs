//! Device enumeration for one ADOM.

use tracing::debug;

use crate::error::FmgError;
use crate::fmg::protocol::{DeviceQueryParams, DeviceRef, RpcRequest, RpcResponse};
use crate::fmg::session::FmgSession;
use crate::fmg::transport::JSONRPC_PATH;

impl FmgSession {
    /// List the devices of `adom` whose platform string equals `platform`.
    ///
    /// Requests only the `sn` and `hostname` fields with `loadsub: 0` to
    /// keep the payload minimal. Controller ordering is preserved. An empty
    /// list is a valid answer; a response without the `result[0].data`
    /// envelope is not.
    pub fn list_devices(&self, adom: &str, platform: &str) -> Result<Vec<DeviceRef>, FmgError> {
        let request = RpcRequest {
            id: 1,
            method: "get",
            params: vec![DeviceQueryParams {
                loadsub: 0,
                url: format!("/dvmdb/adom/{}/device", adom),
                fields: vec!["sn", "hostname"],
                filter: vec![[
                    "platform_str".to_string(),
                    "==".to_string(),
                    platform.to_string(),
                ]],
            }],
            session: Some(self.token.clone()),
            verbose: None,
        };

        let response = self.transport.post_json(JSONRPC_PATH, &request)?;
        let envelope: RpcResponse<Vec<DeviceRef>> =
            response.json().map_err(|_| FmgError::MalformedResponse {
                context: "decoding the device list",
            })?;

        let devices = envelope
            .result
            .into_iter()
            .next()
            .and_then(|r| r.data)
            .ok_or(FmgError::MalformedResponse {
                context: "reading the device list",
            })?;

        debug!("{} devices match platform {}", devices.len(), platform);
        Ok(devices)
    }
}
