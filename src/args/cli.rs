use clap::Parser;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Synchronous load-test harness for Yandex Tank - ammo synthesis, rate-ramp load plans, blocking tank runs, and per-tag latency quantile reports."
)]
pub struct HarnessArgs {
    /// Target service host or IP
    #[arg(long = "cluster-ip", env = "TANKRIG_CLUSTER_IP")]
    pub cluster_ip: Option<String>,

    /// Target service port
    #[arg(long = "cluster-port")]
    pub cluster_port: Option<u16>,

    /// Working directory owned by this run (created if absent)
    #[arg(long, short = 'w')]
    pub workdir: Option<String>,

    /// Synthesis rounds; each round emits one request per traffic pattern
    #[arg(long)]
    pub rounds: Option<u64>,

    /// Quantile fraction to report (repeatable, in [0, 1])
    #[arg(long = "quantile", value_name = "FRACTION")]
    pub quantiles: Vec<f64>,

    /// Load generator binary
    #[arg(long = "tank-bin")]
    pub tank_bin: Option<String>,

    /// Ramp start rate in requests per second
    #[arg(long = "ramp-start")]
    pub ramp_start: Option<u64>,

    /// Ramp end rate in requests per second
    #[arg(long = "ramp-end")]
    pub ramp_end: Option<u64>,

    /// Ramp duration (supports ms/s/m/h)
    #[arg(long = "ramp-duration")]
    pub ramp_duration: Option<String>,

    /// Prefix for synthesized shorten payload URLs
    #[arg(long = "payload-prefix")]
    pub payload_prefix: Option<String>,

    /// Skip the pre-run smoke probes
    #[arg(long = "skip-probe")]
    pub skip_probe: bool,

    /// Enable the generator's console reporter section
    #[arg(long)]
    pub console: bool,

    /// Enable the generator's telegraf section
    #[arg(long)]
    pub telegraf: bool,

    /// Config file path (.toml or .json)
    #[arg(long, short)]
    pub config: Option<String>,

    /// Verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable ANSI colors in logs
    #[arg(long = "no-color")]
    pub no_color: bool,
}
