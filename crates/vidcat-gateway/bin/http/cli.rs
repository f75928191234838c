use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use vidcat_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "VIDCAT_GATEWAY_LISTEN_ADDR";
pub const BASE_PATH_ENV: &str = "VIDCAT_GATEWAY_BASE_PATH";
pub const ID_STRATEGY_ENV: &str = "VIDCAT_GATEWAY_ID_STRATEGY";
pub const LOG_FORMAT_ENV: &str = "VIDCAT_GATEWAY_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IdStrategyArg {
    /// Milliseconds since the Unix epoch, bumped on collision.
    #[value(name = "timestamp")]
    Timestamp,
    /// 1, 2, 3, ...
    #[value(name = "sequential")]
    Sequential,
}

impl Display for IdStrategyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IdStrategyArg::Timestamp => write!(f, "timestamp"),
            IdStrategyArg::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vidcat-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Prefix the catalog routes are mounted under, e.g. `/api`.
    #[arg(long, env = BASE_PATH_ENV, default_value = "")]
    pub base_path: String,

    #[arg(
        long,
        env = ID_STRATEGY_ENV,
        value_enum,
        default_value_t = IdStrategyArg::Timestamp
    )]
    pub id_strategy: IdStrategyArg,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}
