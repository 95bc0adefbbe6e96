use crate::dns_record::RecordType;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

pub const DNS_PORT: u16 = 53;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);
pub const DEFAULT_SERVER: IpAddr = IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8));

/// Settings for one resolver instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub server: IpAddr,
    pub port: u16,
    /// Receive timeout for the single response datagram.
    pub timeout: Duration,
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            server: DEFAULT_SERVER,
            port: DNS_PORT,
            timeout: DEFAULT_TIMEOUT,
            record_type: RecordType::A,
            recursion_desired: true,
        }
    }
}
