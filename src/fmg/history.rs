//! Per-device task/script history retrieval.

use tracing::debug;

use crate::error::FmgError;
use crate::fmg::protocol::{FlatuiRequest, TaskHistory, TaskQueryParams};
use crate::fmg::session::FmgSession;
use crate::fmg::transport::FLATUI_PROXY_PATH;

impl FmgSession {
    /// Fetch the task/script history of one device through the web-UI proxy.
    ///
    /// The request rides on the cookies from the web-UI login. The ADOM is
    /// fixed to `"root"` here regardless of the enumeration ADOM - upstream
    /// asymmetry, kept as-is (DESIGN.md). Shape validation happens
    /// downstream in the extractor: an undecodable body reads as an empty
    /// history, only transport errors propagate.
    pub fn fetch_history(&self, hostname: &str) -> Result<TaskHistory, FmgError> {
        let request = FlatuiRequest {
            url: "/gui/adom/dvm/task",
            method: "get",
            params: TaskQueryParams {
                device_name: hostname.to_string(),
                adom_name: "root",
            },
        };

        let response = self.transport.post_json(FLATUI_PROXY_PATH, &request)?;
        match response.json::<TaskHistory>() {
            Ok(history) => Ok(history),
            Err(err) => {
                debug!("undecodable task history for {}: {}", hostname, err);
                Ok(TaskHistory::default())
            }
        }
    }
}
