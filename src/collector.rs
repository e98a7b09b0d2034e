//! Run orchestration: authenticate, enumerate, fetch, extract, export.
//!
//! Strictly sequential, single pass, no retries. Authentication or
//! enumeration failures abort the whole run before anything is written; a
//! device whose history has no matching script run is skipped with a notice.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::FmgError;
use crate::export::{self, ScriptHistoryRecord};
use crate::extract::extract_script_run;
use crate::fmg::{Controller, ControllerClient};

/// Inputs of one collection run, resolved before any network traffic.
#[derive(Debug, Clone)]
pub struct RunParams {
    /// ADOM whose devices are enumerated.
    pub adom: String,
    /// Platform filter, e.g. `FortiGate-60F`.
    pub platform: String,
    /// Script whose run history is collected (exact name).
    pub script: String,
    /// Directory the report is written to.
    pub output_dir: PathBuf,
}

/// Sequential collection run over one controller.
pub struct Collector {
    params: RunParams,
}

impl Collector {
    pub fn new(params: RunParams) -> Self {
        Self { params }
    }

    /// Authenticate and collect, one device at a time.
    ///
    /// Both login stages run before the first device query; a rejected
    /// login never reaches enumeration.
    pub fn run<C: ControllerClient>(
        &self,
        client: C,
        username: &str,
        password: &str,
    ) -> Result<Vec<ScriptHistoryRecord>, FmgError> {
        let session = client.login(username, password)?;
        self.collect(&session)
    }

    /// Collect records from an already-authenticated controller.
    ///
    /// Records accumulate in enumeration order. A fetch failure aborts the
    /// run (the controller is answering other calls, so something is wrong
    /// beyond one device); an extraction miss only skips the device.
    pub fn collect<C: Controller>(&self, controller: &C) -> Result<Vec<ScriptHistoryRecord>, FmgError> {
        let devices = controller.list_devices(&self.params.adom, &self.params.platform)?;
        info!(
            "{} devices in {} match {}",
            devices.len(),
            self.params.adom,
            self.params.platform
        );

        let mut records = Vec::new();
        for device in devices {
            let history = controller.fetch_history(&device.hostname)?;
            match extract_script_run(&history, &self.params.script) {
                Some(fields) => records.push(ScriptHistoryRecord {
                    hostname: fields.hostname,
                    serial: device.serial,
                    rtc_time: fields.rtc_time,
                    rtc_date: fields.rtc_date,
                }),
                None => info!(
                    "no {} history for {}, skipping",
                    self.params.script, device.hostname
                ),
            }
        }

        Ok(records)
    }

    /// Full run: authenticate, collect and write the report.
    pub fn run_and_export<C: ControllerClient>(
        &self,
        client: C,
        username: &str,
        password: &str,
    ) -> Result<PathBuf> {
        let records = self
            .run(client, username, password)
            .context("Collection run failed")?;

        info!("collected {} records", records.len());
        export::write_report(&records, &self.params.output_dir)
    }
}
