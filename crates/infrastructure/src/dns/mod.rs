pub mod resolver;
pub mod transport;

pub use resolver::{validate_response_id, Resolver};
pub use transport::{DnsTransport, TransportResponse, UdpTransport};
