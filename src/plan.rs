//! Load plan rendering for the external generator.
//!
//! The plan is a fixed-shape YAML document; only the target address, the
//! ramp schedule, and the console/telegraf switches vary, so it is rendered
//! from a template rather than through a serializer.
use std::path::Path;
use std::time::Duration;

use crate::error::{PlanError, PlanResult};

/// Linear requests-per-second ramp: `line(start, end, duration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRamp {
    pub start_rps: u64,
    pub end_rps: u64,
    pub duration: Duration,
}

impl LineRamp {
    /// # Errors
    ///
    /// Returns `PlanError::ZeroRate` when either endpoint is zero and
    /// `PlanError::ZeroDuration` for an empty ramp window.
    pub const fn new(start_rps: u64, end_rps: u64, duration: Duration) -> PlanResult<Self> {
        if start_rps == 0 || end_rps == 0 {
            return Err(PlanError::ZeroRate);
        }
        if duration.as_secs() == 0 {
            return Err(PlanError::ZeroDuration);
        }
        Ok(Self {
            start_rps,
            end_rps,
            duration,
        })
    }
}

/// Target address and traffic shape handed to the load generator.
#[derive(Debug, Clone)]
pub struct LoadPlan {
    pub address: String,
    pub port: u16,
    pub ramp: LineRamp,
    pub console: bool,
    pub telegraf: bool,
}

impl LoadPlan {
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "phantom:\n  address: {address}:{port}\n  load_profile:\n    load_type: rps\n    schedule: line({start}, {end}, {secs}s)\nconsole:\n  enabled: {console}\ntelegraf:\n  enabled: {telegraf}\n",
            address = self.address,
            port = self.port,
            start = self.ramp.start_rps,
            end = self.ramp.end_rps,
            secs = self.ramp.duration.as_secs(),
            console = self.console,
            telegraf = self.telegraf,
        )
    }

    /// Writes the rendered plan to `path`.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::WriteFailure` on I/O failure.
    pub fn write(&self, path: &Path) -> PlanResult<()> {
        std::fs::write(path, self.render()).map_err(|err| PlanError::WriteFailure {
            path: path.to_path_buf(),
            source: err,
        })
    }
}
