use stubdns_domain::{DomainError, DomainName, RecordClass, RecordType, ResourceRecord};

const PACKED: &[u8] =
    b"\x03www\x06google\x03com\x00\x00\x01\x00\x01\x00\x00\x00\x11\x00\x04\xAA\xBB\xCC\xDD";

fn google() -> ResourceRecord {
    ResourceRecord::new(DomainName::new("www.google.com").unwrap())
        .with_ttl(0x11)
        .with_resource(b"\xAA\xBB\xCC\xDD".to_vec())
}

#[test]
fn test_resource_packing() {
    assert_eq!(google().pack().unwrap(), PACKED);
}

#[test]
fn test_resource_unpacking() {
    let mut bytes = PACKED.to_vec();
    bytes.extend_from_slice(b"\xFF\xFF");

    let (record, remainder) = ResourceRecord::unpack(&bytes).unwrap();
    assert_eq!(remainder, b"\xFF\xFF");
    assert_eq!(record.name.as_str(), "www.google.com");
    assert_eq!(record.ttl, 0x11);
    assert_eq!(record.resource.len(), 4);
    assert_eq!(record, google());
}

#[test]
fn test_resource_round_trip() {
    let record = ResourceRecord::new(DomainName::new("mail.example.net").unwrap())
        .with_type(RecordType::TXT)
        .with_class(RecordClass::CH)
        .with_ttl(86_400)
        .with_resource(b"v=spf1 -all".to_vec());

    let packed = record.pack().unwrap();
    assert_eq!(packed.len(), record.packed_len());

    let (decoded, remainder) = ResourceRecord::unpack(&packed).unwrap();
    assert_eq!(decoded, record);
    assert!(remainder.is_empty());
    assert_eq!(decoded.record_type(), Some(RecordType::TXT));
    assert_eq!(decoded.record_class(), Some(RecordClass::CH));
}

#[test]
fn test_empty_resource_round_trip() {
    let record = ResourceRecord::new(DomainName::new("example.com").unwrap());
    let packed = record.pack().unwrap();
    assert_eq!(&packed[packed.len() - 2..], &[0x00, 0x00]);

    let (decoded, _) = ResourceRecord::unpack(&packed).unwrap();
    assert!(decoded.resource.is_empty());
}

#[test]
fn test_truncated_fixed_fields_are_invalid() {
    // name, type, class, then only two TTL bytes
    let result = ResourceRecord::unpack(&PACKED[..22]);
    assert!(matches!(result, Err(DomainError::InvalidMessage(_))));
}

#[test]
fn test_rdlength_overrun_is_invalid() {
    let result = ResourceRecord::unpack(&PACKED[..PACKED.len() - 1]);
    assert!(matches!(result, Err(DomainError::InvalidMessage(_))));
}

#[test]
fn test_rdlength_larger_than_message_is_invalid() {
    let mut bytes = PACKED.to_vec();
    bytes[24] = 0xFF; // rdlength high byte
    let result = ResourceRecord::unpack(&bytes);
    assert!(matches!(result, Err(DomainError::InvalidMessage(_))));
}
