//! Test doubles for driving the collector without a live controller.
//!
//! `MockClient`/`MockController` implement the controller trait pair with
//! canned data and shared call counters, so tests can assert both what a
//! run produced and which queries it made along the way.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fmghist::error::{FmgError, LoginStage};
use fmghist::fmg::{Controller, ControllerClient, DeviceRef, TaskEntry, TaskHistory, TaskResult};

/// Unauthenticated side: either rejects the login or hands out the session.
pub struct MockClient {
    pub reject_login: bool,
    pub session: MockController,
}

impl MockClient {
    pub fn accepting(session: MockController) -> Self {
        Self {
            reject_login: false,
            session,
        }
    }

    pub fn rejecting(session: MockController) -> Self {
        Self {
            reject_login: true,
            session,
        }
    }
}

impl ControllerClient for MockClient {
    type Session = MockController;

    fn login(self, _username: &str, _password: &str) -> Result<MockController, FmgError> {
        if self.reject_login {
            return Err(FmgError::AuthRejected {
                stage: LoginStage::Api,
                code: -22,
                message: "Login fail".to_string(),
            });
        }
        Ok(self.session)
    }
}

/// Authenticated side: canned devices and per-hostname histories.
#[derive(Default)]
pub struct MockController {
    pub devices: Vec<DeviceRef>,
    pub histories: HashMap<String, TaskHistory>,
    /// Hostname whose history fetch fails, if any.
    pub fail_history_for: Option<String>,
    pub device_queries: Arc<AtomicUsize>,
    pub history_queries: Arc<AtomicUsize>,
}

impl MockController {
    pub fn with_devices(devices: Vec<DeviceRef>) -> Self {
        Self {
            devices,
            ..Self::default()
        }
    }

    pub fn add_history(&mut self, hostname: &str, history: TaskHistory) {
        self.histories.insert(hostname.to_string(), history);
    }
}

impl Controller for MockController {
    fn list_devices(&self, _adom: &str, _platform: &str) -> Result<Vec<DeviceRef>, FmgError> {
        self.device_queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.devices.clone())
    }

    fn fetch_history(&self, hostname: &str) -> Result<TaskHistory, FmgError> {
        self.history_queries.fetch_add(1, Ordering::SeqCst);

        if self.fail_history_for.as_deref() == Some(hostname) {
            return Err(FmgError::MalformedResponse {
                context: "reading the task history",
            });
        }

        Ok(self.histories.get(hostname).cloned().unwrap_or_default())
    }
}

pub fn device(hostname: &str, serial: &str) -> DeviceRef {
    DeviceRef {
        hostname: hostname.to_string(),
        serial: serial.to_string(),
    }
}

pub fn history_with_entry(script_name: &str, content: &str) -> TaskHistory {
    TaskHistory {
        result: vec![TaskResult {
            data: vec![TaskEntry {
                script_name: Some(script_name.to_string()),
                content: Some(content.to_string()),
            }],
        }],
    }
}
