//! Command-line configuration.

use clap::Parser;

use shelflife_inventory::BackendKind;
use shelflife_observability::{LogConfig, LogFormat};

#[derive(Debug, Parser)]
#[command(name = "shelflife")]
#[command(version, about = "Track perishable stock for restaurants and the people they serve")]
pub struct Cli {
    /// Inventory index backend (`tree`, `list`, `linked`)
    #[arg(long, default_value = "tree")]
    pub backend: BackendKind,

    /// Log line format (`json`, `pretty`)
    #[arg(long, default_value = "json")]
    pub log_format: LogFormat,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub backend: BackendKind,
    pub log: LogConfig,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            backend: cli.backend,
            log: LogConfig {
                format: cli.log_format,
                default_filter: cli.log_level,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::from(Cli::try_parse_from(["shelflife"]).unwrap());
        assert_eq!(config.backend, BackendKind::Tree);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "shelflife",
            "--backend",
            "linked",
            "--log-format",
            "pretty",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = AppConfig::from(cli);
        assert_eq!(config.backend, BackendKind::Linked);
        assert_eq!(config.log.format, LogFormat::Pretty);
        assert_eq!(config.log.default_filter, "debug");
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Cli::try_parse_from(["shelflife", "--backend", "btree"]).is_err());
    }
}
