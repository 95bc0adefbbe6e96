use stubdns_domain::{DomainError, DomainName, Question, RecordClass, RecordType};

fn name(domain: &str) -> DomainName {
    DomainName::new(domain).unwrap()
}

#[test]
fn test_question_packing() {
    let question = Question::new(name("www.google.com"));
    assert_eq!(
        question.pack(),
        b"\x03www\x06google\x03com\x00\x00\x01\x00\x01"
    );
}

#[test]
fn test_question_unpacking() {
    let (question, remainder) =
        Question::unpack(b"\x03www\x06google\x03com\x00\x00\x01\x00\x01\xFF\xFF").unwrap();
    assert_eq!(remainder.len(), 2);
    assert_eq!(question.name.as_str(), "www.google.com");
    assert_eq!(question.record_type(), Some(RecordType::A));
    assert_eq!(question.record_class(), Some(RecordClass::IN));
}

#[test]
fn test_question_round_trip_with_unknown_type() {
    let mut question = Question::with_type(name("example.org"), RecordType::MX);
    question.qclass = 0x00FE;
    question.qtype = 0xABCD;

    let packed = question.pack();
    let (decoded, remainder) = Question::unpack(&packed).unwrap();
    assert_eq!(decoded, question);
    assert!(remainder.is_empty());
    assert_eq!(decoded.record_type(), None);
    assert_eq!(decoded.record_class(), None);
}

#[test]
fn test_question_has_no_ttl_or_length() {
    let question = Question::with_type(name("example.org"), RecordType::AAAA);
    // name (13) + type + class, nothing else
    assert_eq!(question.pack().len(), 13 + 4);
    assert_eq!(question.packed_len(), 17);
}

#[test]
fn test_truncated_type_class_is_invalid() {
    let result = Question::unpack(b"\x03www\x06google\x03com\x00\x00\x01\x00");
    assert!(matches!(result, Err(DomainError::InvalidMessage(_))));
}

#[test]
fn test_bad_name_is_invalid() {
    let result = Question::unpack(b"\x09www");
    assert!(matches!(result, Err(DomainError::InvalidMessage(_))));
}
