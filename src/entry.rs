//! Binary entry point: parse arguments, resolve settings, run the harness.
use clap::Parser;
use tracing::info;

use crate::args::HarnessArgs;
use crate::config;
use crate::error::AppResult;
use crate::probe::Prober;
use crate::process::TankProcessRunner;
use crate::run::{RunContext, execute};
use crate::synth::RequestSynthesizer;

/// Payload token submitted by the pre-run shorten probe.
const PROBE_TOKEN: &str = "SMOKECHECK";

/// # Errors
///
/// Returns the first failing stage's error; every failure is terminal for
/// the run.
pub fn run() -> AppResult<()> {
    let args = HarnessArgs::try_parse()?;
    crate::logger::init_logging(args.verbose, args.no_color);

    let file = config::load_config(args.config.as_deref())?;
    let settings = config::resolve(&args, file.as_ref())?;
    let base = settings.base_url().map_err(crate::error::AppError::config)?;
    info!(url = %base, workdir = %settings.workdir.display(), "run configured");

    if settings.skip_probe {
        info!("smoke probes skipped");
    } else {
        let prober = Prober::new(base.clone())?;
        prober.ping()?;
        info!("ping probe passed");
        prober.shorten_roundtrip(&format!("{}{}", settings.payload_prefix, PROBE_TOKEN))?;
        info!("shorten probe passed");
    }

    let context = RunContext::create(&settings.workdir)?;
    let synthesizer =
        RequestSynthesizer::new(&base, settings.rounds, settings.payload_prefix.clone());
    let plan = settings.load_plan();
    let runner = TankProcessRunner::new(settings.tank_bin.clone());

    let report = execute(
        &context,
        synthesizer.requests(),
        &plan,
        &runner,
        &settings.quantiles,
    )?;

    for (tag, entries) in &report.0 {
        for (label, value) in entries {
            info!(tag = %tag, label = %label, value = *value, "quantile");
        }
    }
    Ok(())
}
