mod errors;
mod logging;
mod resolver;
mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, DEFAULT_SERVER, DEFAULT_TIMEOUT, DNS_PORT};
pub use root::{CliOverrides, Config};
