use crate::dns_record::{RecordClass, RecordType};
use crate::domain_name::DomainName;
use crate::errors::DomainError;
use crate::question::{describe_class, describe_type};
use std::fmt;

/// TYPE + CLASS + TTL + RDLENGTH
const RR_FIXED_LEN: usize = 2 + 2 + 4 + 2;

/// A generic resource record whose data is kept as opaque bytes.
///
/// The TTL is held unsigned. RFC 1035 calls it a signed 32-bit field but
/// RFC 2181 §8 restricts it to `0..=2^31-1`, and both readings share the
/// same bytes for every legal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRecord {
    pub name: DomainName,
    pub rtype: u16,
    pub rclass: u16,
    pub ttl: u32,
    pub resource: Vec<u8>,
}

impl ResourceRecord {
    /// An `A`/`IN` record with a zero TTL and no data.
    pub fn new(name: DomainName) -> Self {
        Self {
            name,
            rtype: RecordType::A.to_u16(),
            rclass: RecordClass::IN.to_u16(),
            ttl: 0,
            resource: Vec::new(),
        }
    }

    pub fn with_type(mut self, record_type: RecordType) -> Self {
        self.rtype = record_type.to_u16();
        self
    }

    pub fn with_class(mut self, class: RecordClass) -> Self {
        self.rclass = class.to_u16();
        self
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_resource(mut self, resource: impl Into<Vec<u8>>) -> Self {
        self.resource = resource.into();
        self
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    pub fn record_class(&self) -> Option<RecordClass> {
        RecordClass::from_u16(self.rclass)
    }

    pub fn packed_len(&self) -> usize {
        self.name.packed_len() + RR_FIXED_LEN + self.resource.len()
    }

    pub fn pack(&self) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(self.packed_len());
        self.pack_into(&mut buf)?;
        Ok(buf)
    }

    pub(crate) fn pack_into(&self, buf: &mut Vec<u8>) -> Result<(), DomainError> {
        let rdlength = u16::try_from(self.resource.len()).map_err(|_| {
            DomainError::encoding(format!(
                "Resource data for {} is {} bytes, limit is {}",
                self.name,
                self.resource.len(),
                u16::MAX
            ))
        })?;

        self.name.pack_into(buf);
        buf.extend_from_slice(&self.rtype.to_be_bytes());
        buf.extend_from_slice(&self.rclass.to_be_bytes());
        buf.extend_from_slice(&self.ttl.to_be_bytes());
        buf.extend_from_slice(&rdlength.to_be_bytes());
        buf.extend_from_slice(&self.resource);
        Ok(())
    }

    pub fn unpack(bytes: &[u8]) -> Result<(Self, &[u8]), DomainError> {
        let (name, remainder) = DomainName::unpack(bytes)?;

        if remainder.len() < RR_FIXED_LEN {
            return Err(DomainError::invalid(format!(
                "Resource record for {} is truncated: {} of {} fixed bytes",
                name,
                remainder.len(),
                RR_FIXED_LEN
            )));
        }
        let (fixed, remainder) = remainder.split_at(RR_FIXED_LEN);

        let rtype = u16::from_be_bytes([fixed[0], fixed[1]]);
        let rclass = u16::from_be_bytes([fixed[2], fixed[3]]);
        let ttl = u32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]);
        let rdlength = u16::from_be_bytes([fixed[8], fixed[9]]) as usize;

        if remainder.len() < rdlength {
            return Err(DomainError::invalid(format!(
                "Resource data for {} claims {} bytes, {} remain",
                name,
                rdlength,
                remainder.len()
            )));
        }
        let (resource, remainder) = remainder.split_at(rdlength);

        let record = Self {
            name,
            rtype,
            rclass,
            ttl,
            resource: resource.to_vec(),
        };
        Ok((record, remainder))
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resource:")?;
        writeln!(f, "  name:        {}", self.name)?;
        writeln!(f, "  type:        {}", describe_type(self.rtype))?;
        writeln!(f, "  class:       {}", describe_class(self.rclass))?;
        writeln!(f, "  TTL:         {} seconds", self.ttl)?;
        write!(f, "  data:        {} bytes", self.resource.len())
    }
}
