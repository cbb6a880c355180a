//! Run orchestration: one context, one pass, first failure aborts.
use std::path::PathBuf;

use tracing::info;

use crate::ammo::{Request, write_ammo};
use crate::error::{AmmoResult, AppResult};
use crate::plan::LoadPlan;
use crate::process::{ProcessRunner, TankInvocation};
use crate::report::write_report;
use crate::results::{discover_result_log, read_result_log};
use crate::stats::{QuantileReport, reduce};

const AMMO_FILENAME: &str = "ammo.txt";
const PLAN_FILENAME: &str = "load.yaml";
const REPORT_FILENAME: &str = "tank-results.json";

/// Filesystem layout of one run. Constructed once and passed explicitly;
/// the working directory is exclusively owned by the run.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub workdir: PathBuf,
    pub ammo_path: PathBuf,
    pub plan_path: PathBuf,
    pub report_path: PathBuf,
}

impl RunContext {
    /// Creates the working directory if absent and derives artifact paths.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be created.
    pub fn create(workdir: impl Into<PathBuf>) -> AppResult<Self> {
        let workdir = workdir.into();
        std::fs::create_dir_all(&workdir)?;
        Ok(Self {
            ammo_path: workdir.join(AMMO_FILENAME),
            plan_path: workdir.join(PLAN_FILENAME),
            report_path: workdir.join(REPORT_FILENAME),
            workdir,
        })
    }
}

/// Runs the whole pipeline: encode ammo, write the plan, drive the
/// generator, parse its result log, reduce quantiles, persist the report.
///
/// Stages run strictly in order and the first failure aborts the run; in
/// particular no report artifact is written once the generator has failed.
///
/// # Errors
///
/// Propagates the failing stage's error unchanged.
pub fn execute<R, I>(
    context: &RunContext,
    requests: I,
    plan: &LoadPlan,
    runner: &R,
    fractions: &[f64],
) -> AppResult<QuantileReport>
where
    R: ProcessRunner,
    I: IntoIterator<Item = AmmoResult<Request>>,
{
    let records = write_ammo(&context.ammo_path, requests)?;
    info!(records, path = %context.ammo_path.display(), "ammo artifact written");

    plan.write(&context.plan_path)?;
    info!(path = %context.plan_path.display(), "load plan written");

    runner.run(&TankInvocation {
        plan_path: context.plan_path.clone(),
        ammo_path: context.ammo_path.clone(),
        workdir: context.workdir.clone(),
    })?;
    info!("load generator finished");

    let log_path = discover_result_log(&context.workdir)?;
    info!(path = %log_path.display(), "result log discovered");

    let samples = read_result_log(&log_path)?;
    info!(
        tags = samples.tag_count(),
        samples = samples.sample_count(),
        "result log parsed"
    );

    let report = reduce(&samples, fractions)?;
    write_report(&context.report_path, &report)?;
    info!(path = %context.report_path.display(), "quantile report written");

    Ok(report)
}
