//! The two textual representations of an object identifier: the ASN.1
//! curly notation `{1 2 840 10045 3 1 7}` and the dot notation
//! `1.2.840.10045.3.1.7`. Both decode through the same delimiter parser.

use crate::oid::codec::COMPONENT_MAX;
use crate::oid::err::Error;
use std::num::IntErrorKind;

const ASN1_OPENING: char = '{';
const ASN1_CLOSING: char = '}';
const ASN1_DELIMITER: char = ' ';
const POINT_DELIMITER: char = '.';

/// Formats the component sequence in ASN.1 curly notation.
pub fn components_to_asn1(components: &[u32]) -> String {
    let mut notation = String::with_capacity(components.len() * 4 + 2);
    notation.push(ASN1_OPENING);
    notation.push_str(&join(components, ASN1_DELIMITER));
    notation.push(ASN1_CLOSING);
    notation
}

/// Parses the ASN.1 curly notation. Both braces must be present, the
/// interior is a space-delimited component list.
pub fn asn1_to_components(notation: &str) -> Result<Vec<u32>, Error> {
    let interior = notation
        .strip_prefix(ASN1_OPENING)
        .ok_or_else(Error::missing_opening_brace)?;
    let interior = interior
        .strip_suffix(ASN1_CLOSING)
        .ok_or_else(Error::missing_closing_brace)?;
    split_components(interior, ASN1_DELIMITER)
}

/// Formats the component sequence in dot notation.
pub fn components_to_point(components: &[u32]) -> String {
    join(components, POINT_DELIMITER)
}

/// Parses the dot notation.
pub fn point_to_components(notation: &str) -> Result<Vec<u32>, Error> {
    split_components(notation, POINT_DELIMITER)
}

fn join(components: &[u32], delimiter: char) -> String {
    components
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}

/// Splits on the delimiter and parses every token as one base-10 component.
/// Consecutive, leading or trailing delimiters produce empty tokens, which
/// are invalid literals like any other non-numeric token.
pub(crate) fn split_components(value: &str, delimiter: char) -> Result<Vec<u32>, Error> {
    let mut components = Vec::new();
    for token in value.split(delimiter) {
        components.push(parse_component(components.len(), token)?);
    }
    Ok(components)
}

fn parse_component(index: usize, token: &str) -> Result<u32, Error> {
    match token.parse::<u64>() {
        Ok(value) if value > u64::from(COMPONENT_MAX) => {
            Err(Error::component_literal_exceeds_max_value(index, token))
        }
        Ok(value) => Ok(value as u32),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(Error::component_literal_exceeds_max_value(index, token))
        }
        Err(_) if is_negative_literal(token) => Err(Error::negative_component(index, token)),
        Err(_) => Err(Error::invalid_component_literal(token)),
    }
}

fn is_negative_literal(token: &str) -> bool {
    match token.strip_prefix('-') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::oid::err::ErrorKind;

    #[test]
    pub fn test_asn1_formatting() {
        assert_eq!("{1 2}", components_to_asn1(&[1, 2]));
        assert_eq!(
            "{1 2 840 10045 3 1 7}",
            components_to_asn1(&[1, 2, 840, 10045, 3, 1, 7])
        );
    }

    #[test]
    pub fn test_asn1_parsing() {
        assert_eq!(vec![1, 2], asn1_to_components("{1 2}").unwrap());
        assert_eq!(
            vec![1, 2, 840, 10045, 3, 1, 7],
            asn1_to_components("{1 2 840 10045 3 1 7}").unwrap()
        );
    }

    #[test]
    pub fn test_asn1_delimiters_are_mandatory() {
        assert!(matches!(
            asn1_to_components(" 1 2}").unwrap_err().kind(),
            ErrorKind::MissingOpeningBrace
        ));
        assert!(matches!(
            asn1_to_components("{1 2").unwrap_err().kind(),
            ErrorKind::MissingClosingBrace
        ));
        assert!(matches!(
            asn1_to_components("").unwrap_err().kind(),
            ErrorKind::MissingOpeningBrace
        ));
    }

    #[test]
    pub fn test_point_round_trip() {
        assert_eq!("1.2.840.10045.3.1.7", components_to_point(&[1, 2, 840, 10045, 3, 1, 7]));
        assert_eq!(
            vec![1, 2, 840, 10045, 3, 1, 7],
            point_to_components("1.2.840.10045.3.1.7").unwrap()
        );
    }

    #[test]
    pub fn test_empty_tokens_are_invalid() {
        for notation in &["", ".", "1..2", ".1.2", "1.2.", "1. 2"] {
            assert!(
                matches!(
                    point_to_components(notation).unwrap_err().kind(),
                    ErrorKind::InvalidComponentLiteral(_)
                ),
                "expected invalid literal for {:?}",
                notation
            );
        }
        assert!(matches!(
            asn1_to_components("{1  2}").unwrap_err().kind(),
            ErrorKind::InvalidComponentLiteral(_)
        ));
    }

    #[test]
    pub fn test_negative_components_are_detected() {
        match point_to_components("1.-2.3").unwrap_err().kind() {
            ErrorKind::NegativeComponent { index: 1, literal } => assert_eq!("-2", literal),
            kind => panic!("unexpected kind: {:?}", kind),
        }
        // a negative literal beyond i64 still counts as negative, not garbage
        match point_to_components("1.-99999999999999999999.3")
            .unwrap_err()
            .kind()
        {
            ErrorKind::NegativeComponent { index: 1, .. } => {}
            kind => panic!("unexpected kind: {:?}", kind),
        }
    }

    #[test]
    pub fn test_component_literal_overflow() {
        let beyond_cap = (u64::from(u32::MAX) + 1).to_string();
        match point_to_components(&format!("1.2.{}", beyond_cap))
            .unwrap_err()
            .kind()
        {
            ErrorKind::ComponentLiteralExceedsMaxValue { index: 2, literal } => {
                assert_eq!(&beyond_cap, literal)
            }
            kind => panic!("unexpected kind: {:?}", kind),
        }
        // beyond even the parse width
        assert!(matches!(
            point_to_components("1.2.99999999999999999999999999")
                .unwrap_err()
                .kind(),
            ErrorKind::ComponentLiteralExceedsMaxValue { index: 2, .. }
        ));
    }

    #[test]
    pub fn test_parser_accepts_any_structurally_valid_sequence() {
        // structural invariants (arc ranges, minimum length) are enforced
        // by the octet encoder, not the textual parser
        assert_eq!(vec![9], point_to_components("9").unwrap());
        assert_eq!(vec![3, 99], point_to_components("3.99").unwrap());
    }
}
