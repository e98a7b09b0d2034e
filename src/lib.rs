//! FortiManager Script-History Collector Library
//!
//! A Rust library for collecting FortiGate script execution history from a
//! FortiManager controller and exporting the extracted timing fields.

pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fmg;

pub use collector::{Collector, RunParams};
pub use config::Config;
pub use error::{FmgError, LoginStage};
pub use export::ScriptHistoryRecord;
pub use extract::{extract_script_run, ScriptRunFields};
pub use fmg::{Controller, ControllerClient, DeviceRef, FmgClient, FmgSession, TaskHistory};
