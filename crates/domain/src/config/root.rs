use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use crate::dns_record::RecordType;
use std::net::IpAddr;
use std::time::Duration;

/// Main configuration structure for stubdns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Upstream server and query settings
    pub resolver: ResolverConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Builds the configuration from defaults plus command-line overrides.
    ///
    /// There is no configuration file; the command line is the only source.
    pub fn load(cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_cli_overrides(cli_overrides)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) -> Result<(), ConfigError> {
        if let Some(server) = overrides.server {
            self.resolver.server = server
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidServer(server.clone()))?;
        }
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.resolver.timeout = Duration::from_secs(secs);
        }
        if let Some(rtype) = overrides.record_type {
            self.resolver.record_type = rtype
                .parse::<RecordType>()
                .map_err(|_| ConfigError::InvalidRecordType(rtype.clone()))?;
        }
        if let Some(recursion) = overrides.recursion_desired {
            self.resolver.recursion_desired = recursion;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.port == 0 {
            return Err(ConfigError::Validation(
                "Upstream port cannot be 0".to_string(),
            ));
        }

        if self.resolver.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "Query timeout must be at least one second".to_string(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation("Log level cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub record_type: Option<String>,
    pub recursion_desired: Option<bool>,
    pub log_level: Option<String>,
}
