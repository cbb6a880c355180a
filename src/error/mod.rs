mod ammo;
mod app;
mod config;
mod plan;
mod probe;
mod process;
mod report;
mod results;
mod stats;

pub use ammo::{AmmoError, AmmoResult};
pub use app::{AppError, AppResult};
pub use config::{ConfigError, ConfigResult};
pub use plan::{PlanError, PlanResult};
pub use probe::{ProbeError, ProbeResult};
pub use process::{ProcessError, ProcessResult};
pub use report::{ReportError, ReportResult};
pub use results::{ResultsError, ResultsResult};
pub use stats::{StatsError, StatsResult};
