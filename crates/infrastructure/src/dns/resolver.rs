//! Stub resolver: one query, one UDP datagram back, no retries.
//!
//! Each call builds a fresh [`Message`], sends it over the transport the
//! resolver owns, waits for a single response within the configured timeout
//! and decodes it. A response whose id does not match the request is an
//! error; the resolver does not keep listening for a later datagram.

use super::transport::{DnsTransport, UdpTransport};
use std::net::{IpAddr, SocketAddr};
use stubdns_domain::{DomainError, Message, QueryOptions, ResolverConfig};
use tracing::{debug, trace, warn};

pub struct Resolver<T = UdpTransport> {
    transport: T,
    config: ResolverConfig,
    rng: fastrand::Rng,
}

impl Resolver<UdpTransport> {
    /// Binds the UDP socket this resolver will use for its whole lifetime.
    pub fn new(config: ResolverConfig) -> Result<Self, DomainError> {
        let transport = UdpTransport::bind_for(config.server)?;
        Ok(Self::with_transport(transport, config, fastrand::Rng::new()))
    }
}

impl<T: DnsTransport> Resolver<T> {
    /// Builds a resolver around any transport, drawing ids from `rng`.
    pub fn with_transport(transport: T, config: ResolverConfig, rng: fastrand::Rng) -> Self {
        Self {
            transport,
            config,
            rng,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Queries the configured upstream server.
    pub fn query<I, S>(&mut self, names: I) -> Result<Message, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let server = self.config.server;
        self.query_server(names, server)
    }

    /// Queries `server` on the configured port (53 unless overridden).
    ///
    /// The socket is bound for the address family of the configured server;
    /// an override from the other family fails with [`DomainError::IoError`]
    /// before anything is sent.
    pub fn query_server<I, S>(&mut self, names: I, server: IpAddr) -> Result<Message, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options = QueryOptions {
            record_type: self.config.record_type,
            recursion_desired: self.config.recursion_desired,
        };
        let request = Message::query_with_rng(names, options, &mut self.rng)?;
        let request_bytes = request.pack()?;
        let destination = SocketAddr::new(server, self.config.port);

        debug!(
            id = request.id(),
            server = %destination,
            questions = request.questions.len(),
            protocol = self.transport.protocol_name(),
            "Sending DNS query"
        );

        let response = self
            .transport
            .send(&request_bytes, destination, self.config.timeout)?;
        trace!(bytes = ?response.bytes, "Raw DNS response");

        let decoded = Message::unpack(&response.bytes)?;
        validate_response_id(&request, &decoded)?;

        debug!(
            id = decoded.id(),
            server = %response.source,
            answers = decoded.header.answer_count,
            rcode = decoded.header.response_code().as_str(),
            "DNS response decoded"
        );

        Ok(decoded)
    }
}

/// Checks that `response` answers `request`.
pub fn validate_response_id(request: &Message, response: &Message) -> Result<(), DomainError> {
    if request.id() != response.id() {
        warn!(
            expected = request.id(),
            received = response.id(),
            "DNS response id mismatch"
        );
        return Err(DomainError::IdMismatch {
            expected: request.id(),
            received: response.id(),
        });
    }
    Ok(())
}
