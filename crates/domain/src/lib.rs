//! stubdns Domain Layer
//!
//! RFC 1035 wire codec for the subset of DNS a stub resolver needs:
//! uncompressed names, the fixed header, questions and opaque resource
//! records.
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod header;
pub mod message;
pub mod question;
pub mod resource_record;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_record::{RecordClass, RecordType};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use header::{Header, Opcode, ResponseCode, HEADER_SIZE};
pub use message::{Message, QueryOptions, MESSAGE_MAX_SIZE};
pub use question::Question;
pub use resource_record::ResourceRecord;
