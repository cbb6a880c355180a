//! Boundary to the external load generator.
use std::path::PathBuf;
use std::process::Command;

use tracing::info;

use crate::error::{ProcessError, ProcessResult};

pub const DEFAULT_TANK_BIN: &str = "yandex-tank";

/// One generator invocation: the plan and ammo artifacts plus the working
/// directory that receives the run logs.
#[derive(Debug, Clone)]
pub struct TankInvocation {
    pub plan_path: PathBuf,
    pub ammo_path: PathBuf,
    pub workdir: PathBuf,
}

/// Capability to run the generator to completion. Injected so tests can
/// substitute canned outcomes without a real binary.
pub trait ProcessRunner {
    /// Runs the generator to completion. Nonzero exit is a run failure;
    /// there is no partial-success signaling.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::Spawn` when the program cannot be launched
    /// and `ProcessError::NonZeroExit`/`ProcessError::Terminated` when it
    /// does not exit cleanly.
    fn run(&self, invocation: &TankInvocation) -> ProcessResult<()>;
}

/// Blocking subprocess runner. No timeout is imposed here; bounding or
/// cancelling the generator is the caller's concern.
#[derive(Debug, Clone)]
pub struct TankProcessRunner {
    program: String,
}

impl TankProcessRunner {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for TankProcessRunner {
    fn default() -> Self {
        Self::new(DEFAULT_TANK_BIN)
    }
}

impl ProcessRunner for TankProcessRunner {
    fn run(&self, invocation: &TankInvocation) -> ProcessResult<()> {
        info!(
            program = %self.program,
            plan = %invocation.plan_path.display(),
            ammo = %invocation.ammo_path.display(),
            "starting load generator"
        );
        let status = Command::new(&self.program)
            .arg("-q")
            .arg("-c")
            .arg(&invocation.plan_path)
            .arg(&invocation.ammo_path)
            .current_dir(&invocation.workdir)
            .status()
            .map_err(|err| ProcessError::Spawn {
                program: self.program.clone(),
                source: err,
            })?;
        if status.success() {
            return Ok(());
        }
        match status.code() {
            Some(code) => Err(ProcessError::NonZeroExit {
                program: self.program.clone(),
                code,
            }),
            None => Err(ProcessError::Terminated {
                program: self.program.clone(),
            }),
        }
    }
}
