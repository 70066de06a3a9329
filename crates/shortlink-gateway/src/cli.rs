use clap::{Parser, ValueEnum};
use shortlink_shortener::config::{DEFAULT_MAX_GEN_ATTEMPTS, DEFAULT_MIN_SHORT_CODE_LEN};
use shortlink_shortener::ServiceConfig;
use shortlink_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::time::Duration;

pub const LISTEN_ADDR_ENV: &str = "SHORTLINK_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "SHORTLINK_BASE_URL";
pub const GENERATOR_ENV: &str = "SHORTLINK_GENERATOR";
pub const GENERATOR_PREFIX_ENV: &str = "SHORTLINK_GENERATOR_PREFIX";
pub const MAX_GEN_ATTEMPTS_ENV: &str = "SHORTLINK_MAX_GEN_ATTEMPTS";
pub const MIN_SHORT_CODE_LEN_ENV: &str = "SHORTLINK_MIN_SHORT_CODE_LEN";
pub const LOG_FORMAT_ENV: &str = "SHORTLINK_LOG_FORMAT";
pub const SHUTDOWN_TIMEOUT_ENV: &str = "SHORTLINK_SHUTDOWN_TIMEOUT_SECS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_GENERATOR_PREFIX: &str = "sl";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    /// Hash of the URL, the time and a random value.
    #[value(name = "digest")]
    Digest,
    /// Prefix plus a counter. Predictable, for local runs.
    #[value(name = "sequential")]
    Sequential,
}

impl Display for GeneratorArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorArg::Digest => write!(f, "digest"),
            GeneratorArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "shortlink-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public URL that short codes are appended to in responses.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(
        long,
        env = GENERATOR_ENV,
        value_enum,
        default_value_t = GeneratorArg::Digest
    )]
    pub generator: GeneratorArg,

    #[arg(long, env = GENERATOR_PREFIX_ENV, default_value = DEFAULT_GENERATOR_PREFIX)]
    pub generator_prefix: String,

    /// Candidate codes tried per create request; 0 means the default.
    #[arg(long, env = MAX_GEN_ATTEMPTS_ENV, default_value_t = DEFAULT_MAX_GEN_ATTEMPTS)]
    pub max_gen_attempts: usize,

    /// Shortest accepted code; 0 means the default.
    #[arg(long, env = MIN_SHORT_CODE_LEN_ENV, default_value_t = DEFAULT_MIN_SHORT_CODE_LEN)]
    pub min_short_code_len: usize,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,

    /// Upper bound for each shutdown step, in seconds.
    #[arg(long, env = SHUTDOWN_TIMEOUT_ENV, default_value_t = 10)]
    pub shutdown_timeout_secs: u64,
}

impl Cli {
    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig::builder()
            .max_gen_attempts(self.max_gen_attempts)
            .min_short_code_len(self.min_short_code_len)
            .build()
            .normalized()
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
