//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing) and limited to 512 bytes.
//! The socket is bound once and reused for every exchange; it is closed
//! when the transport is dropped.

use super::{DnsTransport, TransportResponse};
use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, UdpSocket};
use std::time::Duration;
use stubdns_domain::{DomainError, MESSAGE_MAX_SIZE};
use tracing::{debug, warn};

/// DNS over UDP transport
#[derive(Debug)]
pub struct UdpTransport {
    socket: UdpSocket,
}

impl UdpTransport {
    /// Binds an ephemeral port in the same address family as `server`.
    pub fn bind_for(server: IpAddr) -> Result<Self, DomainError> {
        let bind_addr = match server {
            IpAddr::V4(_) => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
            IpAddr::V6(_) => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
        };
        Self::bind(bind_addr)
    }

    pub fn bind(local: SocketAddr) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(local).map_err(|e| {
            DomainError::IoError(format!("Failed to bind UDP socket on {}: {}", local, e))
        })?;
        debug!(local = %local, "UDP socket bound");
        Ok(Self { socket })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::IoError(format!("Failed to read local address: {}", e)))
    }
}

impl DnsTransport for UdpTransport {
    fn send(
        &self,
        message_bytes: &[u8],
        server: SocketAddr,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let local = self.local_addr()?;
        if local.is_ipv4() != server.is_ipv4() {
            return Err(DomainError::IoError(format!(
                "Cannot reach {} from a socket bound to {}: address families differ",
                server, local
            )));
        }

        let bytes_sent = self.socket.send_to(message_bytes, server).map_err(|e| {
            DomainError::IoError(format!("Failed to send UDP query to {}: {}", server, e))
        })?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        self.socket.set_read_timeout(Some(timeout)).map_err(|e| {
            DomainError::IoError(format!("Failed to arm receive timeout {:?}: {}", timeout, e))
        })?;

        // Anything past the unextended limit is cut off by the kernel.
        let mut recv_buf = vec![0u8; MESSAGE_MAX_SIZE];

        let (bytes_received, from_addr) = self
            .socket
            .recv_from(&mut recv_buf)
            .map_err(|e| map_recv_error(e, server))?;

        if from_addr != server {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);

        debug!(
            server = %server,
            bytes_received = bytes_received,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            source: from_addr,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

fn map_recv_error(err: io::Error, server: SocketAddr) -> DomainError {
    match err.kind() {
        // Unix reports an expired SO_RCVTIMEO as WouldBlock, Windows as TimedOut.
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => DomainError::TransportTimeout {
            server: server.to_string(),
        },
        _ => DomainError::IoError(format!(
            "Failed to receive UDP response from {}: {}",
            server, err
        )),
    }
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
