use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::args::HarnessArgs;
use crate::error::{AppResult, ConfigError, ConfigResult};
use crate::plan::{LineRamp, LoadPlan};
use crate::process::DEFAULT_TANK_BIN;

use super::parse_duration_value;
use super::types::ConfigFile;

pub const DEFAULT_CLUSTER_PORT: u16 = 30030;
pub const DEFAULT_ROUNDS: u64 = 10_000;
pub const DEFAULT_QUANTILES: [f64; 2] = [0.5, 0.9];
pub const DEFAULT_PAYLOAD_PREFIX: &str = "http://example.com/";
pub const DEFAULT_WORKDIR: &str = "tank-run";

const DEFAULT_RAMP_START: u64 = 1;
const DEFAULT_RAMP_END: u64 = 10;
const DEFAULT_RAMP_DURATION: Duration = Duration::from_secs(600);

/// Fully resolved run settings: CLI flags take precedence over the config
/// file, which takes precedence over defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub cluster_ip: String,
    pub cluster_port: u16,
    pub workdir: PathBuf,
    pub rounds: u64,
    pub quantiles: Vec<f64>,
    pub tank_bin: String,
    pub payload_prefix: String,
    pub skip_probe: bool,
    pub ramp: LineRamp,
    pub console: bool,
    pub telegraf: bool,
}

impl Settings {
    /// Base URL of the target service.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTargetAddress` when host and port do
    /// not form a parseable URL.
    pub fn base_url(&self) -> ConfigResult<Url> {
        let value = format!("http://{}:{}/", self.cluster_ip, self.cluster_port);
        Url::parse(&value).map_err(|err| ConfigError::InvalidTargetAddress { value, source: err })
    }

    #[must_use]
    pub fn load_plan(&self) -> LoadPlan {
        LoadPlan {
            address: self.cluster_ip.clone(),
            port: self.cluster_port,
            ramp: self.ramp,
            console: self.console,
            telegraf: self.telegraf,
        }
    }
}

/// Merges CLI arguments with an optional config file.
///
/// # Errors
///
/// Returns `ConfigError::MissingClusterIp` when no target host is given
/// anywhere, duration errors for malformed ramp durations, and plan errors
/// for degenerate ramps.
pub fn resolve(args: &HarnessArgs, config: Option<&ConfigFile>) -> AppResult<Settings> {
    let cluster_ip = args
        .cluster_ip
        .clone()
        .or_else(|| config.and_then(|file| file.cluster_ip.clone()))
        .ok_or(ConfigError::MissingClusterIp)?;
    let cluster_port = args
        .cluster_port
        .or_else(|| config.and_then(|file| file.cluster_port))
        .unwrap_or(DEFAULT_CLUSTER_PORT);
    let workdir = args
        .workdir
        .clone()
        .or_else(|| config.and_then(|file| file.workdir.clone()))
        .unwrap_or_else(|| DEFAULT_WORKDIR.to_owned());
    let rounds = args
        .rounds
        .or_else(|| config.and_then(|file| file.rounds))
        .unwrap_or(DEFAULT_ROUNDS);
    let quantiles = if args.quantiles.is_empty() {
        config
            .and_then(|file| file.quantiles.clone())
            .unwrap_or_else(|| DEFAULT_QUANTILES.to_vec())
    } else {
        args.quantiles.clone()
    };
    let tank_bin = args
        .tank_bin
        .clone()
        .or_else(|| config.and_then(|file| file.tank_bin.clone()))
        .unwrap_or_else(|| DEFAULT_TANK_BIN.to_owned());
    let payload_prefix = args
        .payload_prefix
        .clone()
        .or_else(|| config.and_then(|file| file.payload_prefix.clone()))
        .unwrap_or_else(|| DEFAULT_PAYLOAD_PREFIX.to_owned());
    let skip_probe = args.skip_probe
        || config
            .and_then(|file| file.skip_probe)
            .unwrap_or(false);
    let console = args.console
        || config
            .and_then(|file| file.console)
            .unwrap_or(false);
    let telegraf = args.telegraf
        || config
            .and_then(|file| file.telegraf)
            .unwrap_or(false);

    let load = config.and_then(|file| file.load.as_ref());
    let ramp_start = args
        .ramp_start
        .or_else(|| load.and_then(|section| section.start_rate))
        .unwrap_or(DEFAULT_RAMP_START);
    let ramp_end = args
        .ramp_end
        .or_else(|| load.and_then(|section| section.end_rate))
        .unwrap_or(DEFAULT_RAMP_END);
    let ramp_duration = match (&args.ramp_duration, load.and_then(|section| section.duration.as_ref())) {
        (Some(text), _) => parse_duration_value(text)?,
        (None, Some(value)) => value.to_duration()?,
        (None, None) => DEFAULT_RAMP_DURATION,
    };
    let ramp = LineRamp::new(ramp_start, ramp_end, ramp_duration)?;

    Ok(Settings {
        cluster_ip,
        cluster_port,
        workdir: PathBuf::from(workdir),
        rounds,
        quantiles,
        tank_bin,
        payload_prefix,
        skip_probe,
        ramp,
        console,
        telegraf,
    })
}
