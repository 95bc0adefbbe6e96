#![allow(dead_code)]

/// Assembles raw wire buffers by hand so decoding tests do not depend on
/// the encoder under test.
pub struct WireBuilder {
    id: u16,
    flags: u16,
    counts: [u16; 4],
    body: Vec<u8>,
}

impl WireBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: 0x0100,
            counts: [0; 4],
            body: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Overrides QDCOUNT, which `question` otherwise keeps in step.
    pub fn question_count(mut self, count: u16) -> Self {
        self.counts[0] = count;
        self
    }

    pub fn answer_count(mut self, count: u16) -> Self {
        self.counts[1] = count;
        self
    }

    pub fn question(mut self, domain: &str, qtype: u16, qclass: u16) -> Self {
        push_name(&mut self.body, domain);
        self.body.extend_from_slice(&qtype.to_be_bytes());
        self.body.extend_from_slice(&qclass.to_be_bytes());
        self.counts[0] += 1;
        self
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(12 + self.body.len());
        buf.extend_from_slice(&self.id.to_be_bytes());
        buf.extend_from_slice(&self.flags.to_be_bytes());
        for count in self.counts {
            buf.extend_from_slice(&count.to_be_bytes());
        }
        buf.extend_from_slice(&self.body);
        buf
    }
}

impl Default for WireBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn push_name(buf: &mut Vec<u8>, domain: &str) {
    for label in domain.split('.') {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0x00); // root label
}
