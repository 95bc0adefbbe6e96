use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Longest label allowed by RFC 1035 §2.3.4.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, length bytes and root label included.
pub const MAX_NAME_LEN: usize = 255;

/// High bits of a length byte are reserved for compression pointers and
/// extended label types, neither of which is understood here.
const LABEL_TYPE_MASK: u8 = 0xC0;

/// A fully spelled-out domain name, stored in dotted form without a
/// trailing dot (e.g. `"www.amazon.com"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DomainName {
    name: String,
}

impl DomainName {
    /// Builds a name after checking that every label can be encoded.
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate(&name)?;
        Ok(Self { name })
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.name.split('.')
    }

    /// Wire size: one length byte per label, the label bytes, and the root label.
    pub fn packed_len(&self) -> usize {
        self.labels().map(|label| label.len() + 1).sum::<usize>() + 1
    }

    /// Encodes the name as length-prefixed labels ending in a zero-length label.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.packed_len());
        self.pack_into(&mut buf);
        buf
    }

    // Every constructor validates, so labels here are 1..=63 ASCII bytes.
    pub(crate) fn pack_into(&self, buf: &mut Vec<u8>) {
        for label in self.labels() {
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
        buf.push(0);
    }

    /// Decodes one name from the front of `bytes`.
    ///
    /// Returns the name and the bytes following its terminating zero-length
    /// label. Compression pointers are rejected.
    pub fn unpack(bytes: &[u8]) -> Result<(Self, &[u8]), DomainError> {
        let mut labels: Vec<&str> = Vec::new();
        let mut remainder = bytes;

        loop {
            let (&len, rest) = remainder
                .split_first()
                .ok_or_else(|| DomainError::invalid("Unterminated domain name"))?;

            if len == 0 {
                remainder = rest;
                break;
            }
            if len & LABEL_TYPE_MASK != 0 {
                return Err(DomainError::invalid(format!(
                    "Unsupported label type {:#04x}",
                    len
                )));
            }

            let len = len as usize;
            if len > rest.len() {
                return Err(DomainError::invalid(format!(
                    "Label length {} exceeds the {} remaining bytes",
                    len,
                    rest.len()
                )));
            }

            let (label, rest) = rest.split_at(len);
            let label = std::str::from_utf8(label)
                .ok()
                .filter(|label| label.is_ascii())
                .ok_or_else(|| DomainError::invalid("Label is not ASCII"))?;
            if label.contains(|c: char| c == '.' || c == '\0') {
                return Err(DomainError::invalid(format!(
                    "Label {:?} contains a dot or NUL byte",
                    label
                )));
            }
            labels.push(label);
            remainder = rest;
        }

        if labels.is_empty() {
            return Err(DomainError::invalid("Domain name has no labels"));
        }
        let consumed = bytes.len() - remainder.len();
        if consumed > MAX_NAME_LEN {
            return Err(DomainError::invalid(format!(
                "Domain name spans {} bytes, limit is {}",
                consumed, MAX_NAME_LEN
            )));
        }

        Ok((
            Self {
                name: labels.join("."),
            },
            remainder,
        ))
    }
}

fn validate(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::encoding("Domain name is empty"));
    }
    if name.contains('\0') {
        return Err(DomainError::encoding(format!(
            "Domain name {:?} contains a NUL byte",
            name
        )));
    }
    if !name.is_ascii() {
        return Err(DomainError::encoding(format!(
            "Domain name {:?} is not ASCII",
            name
        )));
    }

    for label in name.split('.') {
        if label.is_empty() {
            return Err(DomainError::encoding(format!(
                "Domain name {:?} has an empty label",
                name
            )));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(DomainError::encoding(format!(
                "Label {:?} is {} bytes, limit is {}",
                label,
                label.len(),
                MAX_LABEL_LEN
            )));
        }
    }

    let packed_len = name.len() + 2;
    if packed_len > MAX_NAME_LEN {
        return Err(DomainError::encoding(format!(
            "Domain name {:?} encodes to {} bytes, limit is {}",
            name, packed_len, MAX_NAME_LEN
        )));
    }
    Ok(())
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for DomainName {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_len_counts_root_label() {
        let name = DomainName::new("www.amazon.com").unwrap();
        assert_eq!(name.packed_len(), 16);
        assert_eq!(name.pack().len(), name.packed_len());
    }

    #[test]
    fn test_single_label_name() {
        let name = DomainName::new("localhost").unwrap();
        assert_eq!(name.pack(), b"\x09localhost\x00");
    }

    #[test]
    fn test_label_at_limit_is_accepted() {
        let label = "a".repeat(MAX_LABEL_LEN);
        assert!(DomainName::new(format!("{}.com", label)).is_ok());
    }

    #[test]
    fn test_unpack_rejects_dot_inside_label() {
        let result = DomainName::unpack(b"\x03a.b\x00");
        assert!(matches!(result, Err(DomainError::InvalidMessage(_))));
    }

    #[test]
    fn test_unpack_rejects_compression_pointer() {
        let result = DomainName::unpack(b"\xC0\x0C");
        assert!(matches!(result, Err(DomainError::InvalidMessage(_))));
    }
}
