pub mod udp;

use std::net::SocketAddr;
use std::time::Duration;
use stubdns_domain::DomainError;

pub use udp::UdpTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    /// Address the datagram actually came from.
    pub source: SocketAddr,

    pub protocol_used: &'static str,
}

/// One blocking request/response exchange with an upstream server.
pub trait DnsTransport: Send {
    fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
