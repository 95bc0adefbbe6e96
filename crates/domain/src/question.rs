use crate::dns_record::{RecordClass, RecordType};
use crate::domain_name::DomainName;
use crate::errors::DomainError;
use std::fmt;

/// QTYPE + QCLASS
const QUESTION_FIXED_LEN: usize = 4;

/// One entry of the question section: a name, a type and a class.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Question {
    pub name: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    /// An `A`/`IN` question for `name`.
    pub fn new(name: DomainName) -> Self {
        Self::with_type(name, RecordType::A)
    }

    pub fn with_type(name: DomainName, record_type: RecordType) -> Self {
        Self {
            name,
            qtype: record_type.to_u16(),
            qclass: RecordClass::IN.to_u16(),
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.qclass)
    }

    pub fn packed_len(&self) -> usize {
        self.name.packed_len() + QUESTION_FIXED_LEN
    }

    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.packed_len());
        self.pack_into(&mut buf);
        buf
    }

    pub(crate) fn pack_into(&self, buf: &mut Vec<u8>) {
        self.name.pack_into(buf);
        buf.extend_from_slice(&self.qtype.to_be_bytes());
        buf.extend_from_slice(&self.qclass.to_be_bytes());
    }

    pub fn unpack(bytes: &[u8]) -> Result<(Self, &[u8]), DomainError> {
        let (name, remainder) = DomainName::unpack(bytes)?;

        if remainder.len() < QUESTION_FIXED_LEN {
            return Err(DomainError::invalid(format!(
                "Question for {} is truncated: {} of {} type/class bytes",
                name,
                remainder.len(),
                QUESTION_FIXED_LEN
            )));
        }
        let (fixed, remainder) = remainder.split_at(QUESTION_FIXED_LEN);

        let question = Self {
            name,
            qtype: u16::from_be_bytes([fixed[0], fixed[1]]),
            qclass: u16::from_be_bytes([fixed[2], fixed[3]]),
        };
        Ok((question, remainder))
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Question:")?;
        writeln!(f, "  name:        {}", self.name)?;
        writeln!(f, "  type:        {}", describe_type(self.qtype))?;
        write!(f, "  class:       {}", describe_class(self.qclass))
    }
}

pub(crate) fn describe_type(value: u16) -> String {
    match RecordType::from_u16(value) {
        Some(record_type) => format!("{:#04x} ({})", value, record_type),
        None => format!("{:#04x} (Unknown)", value),
    }
}

pub(crate) fn describe_class(value: u16) -> String {
    match RecordClass::from_u16(value) {
        Some(class) => format!("{:#04x} ({})", value, class),
        None => format!("{:#04x} (Unknown)", value),
    }
}
