#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid upstream server address: {0}")]
    InvalidServer(String),

    #[error("Unknown record type: {0}")]
    InvalidRecordType(String),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
