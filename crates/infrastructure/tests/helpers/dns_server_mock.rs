#![allow(dead_code)]
use std::net::{SocketAddr, UdpSocket};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How the mock upstream answers the one query it receives.
#[derive(Debug, Clone, Copy)]
pub enum MockBehavior {
    /// Echo the question section back with QR/RA set and one A answer.
    Answer,
    /// Same as `Answer` but with the transaction id flipped.
    WrongId,
    /// Reply with bytes that are not a DNS message.
    Garbage,
    /// Read the query and never reply.
    Silent,
}

type Exchange = (Vec<u8>, SocketAddr);

/// A loopback UDP upstream that serves a fixed number of queries on its own
/// thread, then exits.
pub struct MockDnsServer {
    addr: SocketAddr,
    handle: JoinHandle<Vec<Exchange>>,
}

impl MockDnsServer {
    pub fn start(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        Self::serve(behavior, 1)
    }

    pub fn serve(behavior: MockBehavior, queries: usize) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0")?;
        socket.set_read_timeout(Some(Duration::from_secs(5)))?;
        let addr = socket.local_addr()?;

        let handle = thread::spawn(move || {
            let mut seen = Vec::with_capacity(queries);
            let mut buf = [0u8; 512];

            for _ in 0..queries {
                let Ok((len, peer)) = socket.recv_from(&mut buf) else {
                    break;
                };
                let query = buf[..len].to_vec();

                let response = match behavior {
                    MockBehavior::Answer => Some(Self::build_mock_response(&query)),
                    MockBehavior::WrongId => {
                        let mut response = Self::build_mock_response(&query);
                        response[0] ^= 0xFF;
                        Some(response)
                    }
                    MockBehavior::Garbage => Some(vec![0xFF; 4]),
                    MockBehavior::Silent => None,
                };
                if let Some(response) = response {
                    let _ = socket.send_to(&response, peer);
                }
                seen.push((query, peer));
            }
            seen
        });

        Ok(Self { addr, handle })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Waits for the server thread and returns every query with its sender.
    pub fn exchanges(self) -> Vec<Exchange> {
        self.handle.join().unwrap_or_default()
    }

    /// Waits for the server thread and returns the first query it received.
    pub fn received(self) -> Option<Vec<u8>> {
        self.exchanges().into_iter().next().map(|(query, _)| query)
    }

    fn build_mock_response(query: &[u8]) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        response.extend_from_slice(&query[0..2]); // ID
        response.push(0x81); // QR + RD
        response.push(0x80); // RA
        response.extend_from_slice(&query[4..6]); // QDCOUNT
        response.extend_from_slice(&[0x00, 0x01]); // ANCOUNT
        response.extend_from_slice(&[0x00, 0x00]); // NSCOUNT
        response.extend_from_slice(&[0x00, 0x00]); // ARCOUNT
        response.extend_from_slice(&query[12..]);

        // Answers are never decoded, so a compression pointer is fine here.
        response.extend_from_slice(&[
            0xc0, 0x0c, // name -> offset 12
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // TTL 60
            0x00, 0x04, // RDLENGTH
            0x5d, 0xb8, 0xd8, 0x22, // 93.184.216.34
        ]);

        response
    }
}
