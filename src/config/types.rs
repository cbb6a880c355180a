use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigResult;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub cluster_ip: Option<String>,
    pub cluster_port: Option<u16>,
    pub workdir: Option<String>,
    pub rounds: Option<u64>,
    pub quantiles: Option<Vec<f64>>,
    pub tank_bin: Option<String>,
    pub payload_prefix: Option<String>,
    pub skip_probe: Option<bool>,
    pub console: Option<bool>,
    pub telegraf: Option<bool>,
    pub load: Option<LoadConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoadConfig {
    pub start_rate: Option<u64>,
    pub end_rate: Option<u64>,
    pub duration: Option<DurationValue>,
}

/// A duration either as bare seconds (`600`) or as text with a unit
/// (`"10m"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    /// # Errors
    ///
    /// Returns a `ConfigError` duration variant for zero, malformed, or
    /// overflowing values.
    pub fn to_duration(&self) -> ConfigResult<Duration> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(crate::error::ConfigError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => super::parse_duration_value(text),
        }
    }
}
