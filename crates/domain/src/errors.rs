use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid DNS message: {0}")]
    InvalidMessage(String),

    #[error("Cannot encode DNS message: {0}")]
    Encoding(String),

    #[error("DNS message too large: {size} bytes exceeds the {max}-byte limit")]
    MessageTooLarge { size: usize, max: usize },

    #[error("DNS response id mismatch: expected {expected:#06x}, received {received:#06x}")]
    IdMismatch { expected: u16, received: u16 },

    #[error("Transport timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        DomainError::InvalidMessage(what.into())
    }

    pub(crate) fn encoding(what: impl Into<String>) -> Self {
        DomainError::Encoding(what.into())
    }

    /// True for errors caused by bytes received off the wire.
    pub fn is_malformed(&self) -> bool {
        matches!(self, DomainError::InvalidMessage(_))
    }

    /// True for timeouts and socket failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. } | DomainError::IoError(_)
        )
    }
}
