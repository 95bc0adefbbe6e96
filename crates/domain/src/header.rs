use crate::errors::DomainError;
use std::fmt;

/// Six big-endian 16-bit fields.
pub const HEADER_SIZE: usize = 12;

/// Bit values of the header flags word (RFC 1035 §4.1.1).
pub mod flags {
    pub const QUERY: u16 = 0x0000;
    pub const REPLY: u16 = 0x8000;

    pub const OPCODE_MASK: u16 = 0x7800;
    pub const OPCODE_QUERY: u16 = 0x0000;
    pub const OPCODE_IQUERY: u16 = 0x0800;
    pub const OPCODE_STATUS: u16 = 0x1000;

    pub const AUTHORITATIVE_ANSWER: u16 = 0x0400;
    pub const TRUNCATED: u16 = 0x0200;
    pub const RECURSION_DESIRED: u16 = 0x0100;
    pub const RECURSION_AVAILABLE: u16 = 0x0080;

    pub const RESPONSE_MASK: u16 = 0x000F;
    pub const RESPONSE_SUCCESS: u16 = 0x0000;
    pub const RESPONSE_FORMAT_ERROR: u16 = 0x0001;
    pub const RESPONSE_SERVER_ERROR: u16 = 0x0002;
    pub const RESPONSE_NAME_ERROR: u16 = 0x0003;
    pub const RESPONSE_NOT_IMPLEMENTED: u16 = 0x0004;
    pub const RESPONSE_REFUSED: u16 = 0x0005;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Query,
    InverseQuery,
    Status,
    Unknown(u8),
}

impl Opcode {
    fn from_flags(value: u16) -> Self {
        match value & flags::OPCODE_MASK {
            flags::OPCODE_QUERY => Opcode::Query,
            flags::OPCODE_IQUERY => Opcode::InverseQuery,
            flags::OPCODE_STATUS => Opcode::Status,
            other => Opcode::Unknown((other >> 11) as u8),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Opcode::Query => "OPCODE_QUERY",
            Opcode::InverseQuery => "OPCODE_IQUERY",
            Opcode::Status => "OPCODE_STATUS",
            Opcode::Unknown(_) => "OPCODE_UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    Success,
    FormatError,
    ServerError,
    NameError,
    NotImplemented,
    Refused,
    Unknown(u8),
}

impl ResponseCode {
    fn from_flags(value: u16) -> Self {
        match value & flags::RESPONSE_MASK {
            flags::RESPONSE_SUCCESS => ResponseCode::Success,
            flags::RESPONSE_FORMAT_ERROR => ResponseCode::FormatError,
            flags::RESPONSE_SERVER_ERROR => ResponseCode::ServerError,
            flags::RESPONSE_NAME_ERROR => ResponseCode::NameError,
            flags::RESPONSE_NOT_IMPLEMENTED => ResponseCode::NotImplemented,
            flags::RESPONSE_REFUSED => ResponseCode::Refused,
            other => ResponseCode::Unknown(other as u8),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::Success => "RESPONSE_SUCCESS",
            ResponseCode::FormatError => "RESPONSE_FORMAT_ERROR",
            ResponseCode::ServerError => "RESPONSE_SERVER_ERROR",
            ResponseCode::NameError => "RESPONSE_NAME_ERROR",
            ResponseCode::NotImplemented => "RESPONSE_NOT_IMPLEMENTED",
            ResponseCode::Refused => "RESPONSE_REFUSED",
            ResponseCode::Unknown(_) => "RESPONSE_UNKNOWN",
        }
    }

    pub fn is_error(&self) -> bool {
        !matches!(self, ResponseCode::Success)
    }
}

/// The fixed 12-byte DNS message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    /// QDCOUNT
    pub question_count: u16,
    /// ANCOUNT
    pub answer_count: u16,
    /// NSCOUNT
    pub nameserver_count: u16,
    /// ARCOUNT
    pub additional_count: u16,
}

impl Header {
    /// A recursive query header with the given id and question count.
    pub fn new(id: u16, question_count: u16) -> Self {
        Self::with_flags(id, flags::RECURSION_DESIRED, question_count)
    }

    pub fn with_flags(id: u16, flags: u16, question_count: u16) -> Self {
        Self {
            id,
            flags,
            question_count,
            answer_count: 0,
            nameserver_count: 0,
            additional_count: 0,
        }
    }

    /// Draws the id from `rng`.
    pub fn random(rng: &mut fastrand::Rng, flags: u16, question_count: u16) -> Self {
        Self::with_flags(rng.u16(..), flags, question_count)
    }

    pub fn pack(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        let fields = [
            self.id,
            self.flags,
            self.question_count,
            self.answer_count,
            self.nameserver_count,
            self.additional_count,
        ];
        for (chunk, field) in buf.chunks_exact_mut(2).zip(fields) {
            chunk.copy_from_slice(&field.to_be_bytes());
        }
        buf
    }

    pub fn unpack(bytes: &[u8]) -> Result<(Self, &[u8]), DomainError> {
        if bytes.len() < HEADER_SIZE {
            return Err(DomainError::invalid(format!(
                "Header needs {} bytes, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let (head, remainder) = bytes.split_at(HEADER_SIZE);
        let field = |i: usize| u16::from_be_bytes([head[2 * i], head[2 * i + 1]]);

        let header = Self {
            id: field(0),
            flags: field(1),
            question_count: field(2),
            answer_count: field(3),
            nameserver_count: field(4),
            additional_count: field(5),
        };
        Ok((header, remainder))
    }

    pub fn is_response(&self) -> bool {
        self.flags & flags::REPLY != 0
    }

    pub fn opcode(&self) -> Opcode {
        Opcode::from_flags(self.flags)
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & flags::AUTHORITATIVE_ANSWER != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & flags::TRUNCATED != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & flags::RECURSION_DESIRED != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & flags::RECURSION_AVAILABLE != 0
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_flags(self.flags)
    }

    /// Symbolic names for the flags word, e.g.
    /// `["MESSAGE_QUERY", "OPCODE_QUERY", "RECURSION_DESIRED", "RESPONSE_SUCCESS"]`.
    pub fn flag_names(&self) -> Vec<&'static str> {
        const BITS: [(u16, &str); 4] = [
            (flags::AUTHORITATIVE_ANSWER, "AUTHORITATIVE"),
            (flags::TRUNCATED, "TRUNCATED"),
            (flags::RECURSION_DESIRED, "RECURSION_DESIRED"),
            (flags::RECURSION_AVAILABLE, "RECURSION_AVAILABLE"),
        ];

        let mut names = Vec::with_capacity(7);
        names.push(if self.is_response() {
            "MESSAGE_REPLY"
        } else {
            "MESSAGE_QUERY"
        });
        names.push(self.opcode().as_str());
        names.extend(
            BITS.iter()
                .filter(|(bit, _)| self.flags & bit != 0)
                .map(|(_, name)| *name),
        );
        names.push(self.response_code().as_str());
        names
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header:")?;
        writeln!(f, "  id:          {:#06x}", self.id)?;
        writeln!(
            f,
            "  flags:       {:#06x} ({})",
            self.flags,
            self.flag_names().join(", ")
        )?;
        writeln!(f, "  questions:   {}", self.question_count)?;
        writeln!(f, "  answers:     {}", self.answer_count)?;
        writeln!(f, "  nameservers: {}", self.nameserver_count)?;
        write!(f, "  additional:  {}", self.additional_count)
    }
}
