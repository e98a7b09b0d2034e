//! Controller API: transport, wire types, authentication and queries.
//!
//! The trait pair below is the seam between the run orchestrator and the
//! network: [`ControllerClient`] is the unauthenticated side (login turns it
//! into a session), [`Controller`] is the authenticated query surface. Tests
//! drive the orchestrator through mock implementations instead of a live
//! controller.

mod devices;
mod history;
mod protocol;
mod session;
mod transport;

pub use protocol::{DeviceRef, TaskEntry, TaskHistory, TaskResult};
pub use session::{FmgClient, FmgSession};
pub use transport::{Transport, TransportOptions};

use crate::error::FmgError;

/// Unauthenticated controller client.
pub trait ControllerClient {
    type Session: Controller;

    /// Run the full authentication handshake, consuming the client.
    fn login(self, username: &str, password: &str) -> Result<Self::Session, FmgError>;
}

/// Authenticated controller query surface.
pub trait Controller {
    /// Devices of `adom` matching the platform filter, controller order.
    fn list_devices(&self, adom: &str, platform: &str) -> Result<Vec<DeviceRef>, FmgError>;

    /// Task/script history of one device.
    fn fetch_history(&self, hostname: &str) -> Result<TaskHistory, FmgError>;
}

impl ControllerClient for FmgClient {
    type Session = FmgSession;

    fn login(self, username: &str, password: &str) -> Result<FmgSession, FmgError> {
        FmgClient::login(self, username, password)
    }
}

impl Controller for FmgSession {
    fn list_devices(&self, adom: &str, platform: &str) -> Result<Vec<DeviceRef>, FmgError> {
        FmgSession::list_devices(self, adom, platform)
    }

    fn fetch_history(&self, hostname: &str) -> Result<TaskHistory, FmgError> {
        FmgSession::fetch_history(self, hostname)
    }
}
