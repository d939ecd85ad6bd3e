// Server configuration
//
// Command-line flags with environment fallbacks. Log level is read from
// RUST_LOG by the logging setup, not from here.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "skill-tracker-server",
    version,
    about = "HTTP service tracking people and the skills they hold"
)]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "SKILL_TRACKER_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log output format
    #[arg(long, env = "SKILL_TRACKER_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_flags() {
        let config = ServerConfig::try_parse_from([
            "skill-tracker-server",
            "--bind",
            "127.0.0.1:3000",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.bind, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_bind_is_rejected() {
        let result = ServerConfig::try_parse_from(["skill-tracker-server", "--bind", "not-an-addr"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_log_format_is_rejected() {
        let result = ServerConfig::try_parse_from(["skill-tracker-server", "--log-format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_bind_parses() {
        assert!(DEFAULT_BIND.parse::<SocketAddr>().is_ok());
    }
}
