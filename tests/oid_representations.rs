use oidrs::prelude::*;

const SEQUENCES: &[&[u32]] = &[
    &[0, 0],
    &[0, 39],
    &[1, 0],
    &[1, 2],
    &[1, 39],
    &[2, 0],
    &[2, 39],
    &[2, 40],
    &[2, 100, 3],
    &[2, u32::MAX],
    &[1, 2, 840, 10045, 3, 1, 7],
    &[1, 2, 840, 113549, 1, 1, 11],
    &[1, 3, 6, 1, 5, 5, 7, 48, 1],
    &[0, 4, 0, 127, 0, 7, 2, 2, 4, 2, 2],
    &[2, 16, 840, 1, 101, 3, 4, 2, 1],
    &[1, 2, u32::MAX, 0, u32::MAX],
];

#[test]
fn test_octet_round_trip() {
    for components in SEQUENCES {
        let octets = components_to_octets(components).unwrap();
        assert_eq!(components, &&octets_to_components(&octets).unwrap()[..]);
        let hex = components_to_hex(components).unwrap();
        assert_eq!(components, &&hex_to_components(&hex).unwrap()[..]);
    }
}

#[test]
fn test_asn1_round_trip() {
    for components in SEQUENCES {
        let notation = components_to_asn1(components);
        assert_eq!(components, &&asn1_to_components(&notation).unwrap()[..]);
    }
}

#[test]
fn test_point_round_trip() {
    for components in SEQUENCES {
        let notation = components_to_point(components);
        assert_eq!(components, &&point_to_components(&notation).unwrap()[..]);
    }
}

#[test]
fn test_constructing_from_own_representations_yields_equal_values() {
    for components in SEQUENCES {
        let oid = Oid::new(components.to_vec()).unwrap();
        assert_eq!(oid, Oid::from_hex(oid.octet_string()).unwrap());
        assert_eq!(oid, Oid::from_asn1(oid.asn1()).unwrap());
        assert_eq!(oid, Oid::from_point(oid.point()).unwrap());
        assert_eq!(oid, Oid::from_bytes(oid.to_bytes()).unwrap());
    }
}

#[test]
fn test_equality_contract() {
    let a = Oid::new(vec![1, 2, 840, 10045, 3, 1, 7]).unwrap();
    let b = Oid::from_point("1.2.840.10045.3.1.7").unwrap();
    let c = Oid::from_asn1("{1 2 840 10045 3 1 7}").unwrap();
    let other = Oid::new(vec![1, 2, 840, 10045, 3, 1, 1]).unwrap();

    // reflexive, symmetric, transitive
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_eq!(b, c);
    assert_eq!(a, c);
    assert_ne!(a, other);

    // equality and the canonical octet string agree
    assert_eq!(a == b, a.octet_string() == b.octet_string());
    assert_eq!(a == other, a.octet_string() == other.octet_string());
}

#[test]
fn test_third_arc_disambiguation() {
    // the folded first subidentifier of the third arc exceeds 79, which is
    // the only way to tell it apart from the capped first two arcs
    for second in &[0_u32, 1, 39, 40, 79, 80, 100, 999_999, u32::MAX] {
        let oid = Oid::new(vec![2, *second]).unwrap();
        let decoded = Oid::from_hex(oid.octet_string()).unwrap();
        assert_eq!(&[2, *second], decoded.components());
    }
}

#[test]
fn test_known_encodings() {
    assert_eq!(
        "2a8648ce3d030107",
        Oid::new(vec![1, 2, 840, 10045, 3, 1, 7])
            .unwrap()
            .octet_string()
    );
    assert_eq!("813403", Oid::new(vec![2, 100, 3]).unwrap().octet_string());
}

#[test]
fn test_truncated_octet_strings_never_yield_partial_values() {
    for truncated in &["", "ff", "2a80"] {
        let error = Oid::from_hex(truncated).unwrap_err();
        assert!(
            matches!(error.kind(), ErrorKind::UnexpectedEndOfStream(_)),
            "expected truncation for {:?} but got {:?}",
            truncated,
            error.kind()
        );
    }
}

#[test]
fn test_too_few_components_are_rejected() {
    assert!(matches!(
        Oid::new(vec![]).unwrap_err().kind(),
        ErrorKind::TooFewComponents(0)
    ));
    assert!(matches!(
        Oid::new(vec![5]).unwrap_err().kind(),
        ErrorKind::TooFewComponents(1)
    ));
}

#[test]
fn test_asn1_notation_requires_both_braces() {
    assert_eq!(vec![1, 2], asn1_to_components("{1 2}").unwrap());
    assert!(matches!(
        asn1_to_components(" 1 2}").unwrap_err().kind(),
        ErrorKind::MissingOpeningBrace
    ));
    assert!(matches!(
        asn1_to_components("{1 2").unwrap_err().kind(),
        ErrorKind::MissingClosingBrace
    ));
}

#[test]
fn test_unregistered_values_fall_back_to_point_notation() {
    let manufactured = Oid::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    assert_eq!(manufactured.point(), manufactured.name());
    assert_eq!(manufactured.point(), manufactured.to_string());
}

#[test]
fn test_serde_round_trip_through_the_point_form() {
    use serde::de::value::{BorrowedStrDeserializer, Error as ValueError};
    use serde::Deserialize;

    let deserializer: BorrowedStrDeserializer<ValueError> =
        BorrowedStrDeserializer::new("1.2.840.10045.4.3.2");
    let oid = Oid::deserialize(deserializer).unwrap();
    assert_eq!("ecdsa-with-SHA256", oid.name());

    let deserializer: BorrowedStrDeserializer<ValueError> = BorrowedStrDeserializer::new("not-.an.oid");
    assert!(Oid::deserialize(deserializer).is_err());
}
