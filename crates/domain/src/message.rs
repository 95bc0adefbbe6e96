use crate::dns_record::RecordType;
use crate::domain_name::DomainName;
use crate::errors::DomainError;
use crate::header::{flags, Header, HEADER_SIZE};
use crate::question::Question;
use std::fmt;

/// Largest message carried over UDP without EDNS (RFC 1035 §4.2.1).
pub const MESSAGE_MAX_SIZE: usize = 512;

/// One-byte label, root label, QTYPE and QCLASS.
const MIN_QUESTION_LEN: usize = 7;

/// Per-query knobs applied to every question of a new message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub record_type: RecordType,
    pub recursion_desired: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            record_type: RecordType::A,
            recursion_desired: true,
        }
    }
}

impl QueryOptions {
    fn header_flags(&self) -> u16 {
        let mut value = flags::QUERY | flags::OPCODE_QUERY;
        if self.recursion_desired {
            value |= flags::RECURSION_DESIRED;
        }
        value
    }
}

/// A DNS message: header plus question section.
///
/// Answer, authority and additional sections are never decoded; only their
/// counts survive in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
}

impl Message {
    /// Pairs a header with its questions, checking that QDCOUNT agrees.
    pub fn new(header: Header, questions: Vec<Question>) -> Result<Self, DomainError> {
        check_question_count(&header, &questions)?;
        Ok(Self { header, questions })
    }

    /// A recursive `A` query for `name` with a random id.
    pub fn for_name(name: &str) -> Result<Self, DomainError> {
        Self::query([name])
    }

    /// A recursive `A` query with one question per name, in order.
    pub fn query<I, S>(names: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::query_with_rng(names, QueryOptions::default(), &mut fastrand::Rng::new())
    }

    /// Like [`Message::query`], drawing the transaction id from `rng`.
    pub fn query_with_rng<I, S>(
        names: I,
        options: QueryOptions,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let questions = names
            .into_iter()
            .map(|name| {
                DomainName::new(name.as_ref())
                    .map(|name| Question::with_type(name, options.record_type))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if questions.is_empty() {
            return Err(DomainError::encoding("A query needs at least one name"));
        }
        let question_count = u16::try_from(questions.len()).map_err(|_| {
            DomainError::encoding(format!("Too many questions: {}", questions.len()))
        })?;

        let header = Header::random(rng, options.header_flags(), question_count);
        Ok(Self { header, questions })
    }

    pub fn id(&self) -> u16 {
        self.header.id
    }

    pub fn packed_len(&self) -> usize {
        HEADER_SIZE
            + self
                .questions
                .iter()
                .map(Question::packed_len)
                .sum::<usize>()
    }

    /// Encodes header and questions. Fails rather than truncating when the
    /// result would not fit in [`MESSAGE_MAX_SIZE`].
    pub fn pack(&self) -> Result<Vec<u8>, DomainError> {
        check_question_count(&self.header, &self.questions)?;

        let size = self.packed_len();
        if size > MESSAGE_MAX_SIZE {
            return Err(DomainError::MessageTooLarge {
                size,
                max: MESSAGE_MAX_SIZE,
            });
        }

        let mut buf = Vec::with_capacity(size);
        buf.extend_from_slice(&self.header.pack());
        for question in &self.questions {
            question.pack_into(&mut buf);
        }
        Ok(buf)
    }

    /// Decodes the header and exactly QDCOUNT questions. Bytes belonging to
    /// later sections are left unread.
    pub fn unpack(bytes: &[u8]) -> Result<Self, DomainError> {
        if bytes.is_empty() {
            return Err(DomainError::invalid("Empty message"));
        }
        if bytes.len() > MESSAGE_MAX_SIZE {
            return Err(DomainError::invalid(format!(
                "Message is {} bytes, limit is {}",
                bytes.len(),
                MESSAGE_MAX_SIZE
            )));
        }

        let (header, mut remainder) = Header::unpack(bytes)?;

        let mut questions =
            Vec::with_capacity(question_capacity(header.question_count, remainder.len()));
        for _ in 0..header.question_count {
            let (question, rest) = Question::unpack(remainder)?;
            questions.push(question);
            remainder = rest;
        }

        Ok(Self { header, questions })
    }
}

/// Upper bound on the questions `remaining` bytes can hold. QDCOUNT comes
/// off the wire and is not trusted for allocation.
fn question_capacity(question_count: u16, remaining: usize) -> usize {
    (question_count as usize).min(remaining / MIN_QUESTION_LEN)
}

fn check_question_count(header: &Header, questions: &[Question]) -> Result<(), DomainError> {
    if header.question_count as usize != questions.len() {
        return Err(DomainError::encoding(format!(
            "Header declares {} questions but {} are present",
            header.question_count,
            questions.len()
        )));
    }
    Ok(())
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for question in &self.questions {
            write!(f, "\n{}", question)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_capacity_is_bounded_by_remaining_bytes() {
        assert_eq!(question_capacity(u16::MAX, 0), 0);
        assert_eq!(question_capacity(u16::MAX, 20), 2);
        assert_eq!(question_capacity(1, 500), 1);
    }

    #[test]
    fn test_huge_question_count_in_short_datagram_is_invalid() {
        let bytes = b"\x00\x01\x01\x00\xFF\xFF\x00\x00\x00\x00\x00\x00\x01a\x00\x00\x01\x00\x01";
        assert!(matches!(
            Message::unpack(bytes),
            Err(DomainError::InvalidMessage(_))
        ));
    }
}
