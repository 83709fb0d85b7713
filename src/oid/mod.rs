//! The canonical object identifier value and its interchangeable
//! representations.
//!
//! An [`Oid`] is immutable: it is built once from raw octets, from a
//! component sequence or from one of the textual notations, computes all of
//! its representations eagerly and never re-derives them. Equality rests on
//! the canonical BER octet string alone, since every other representation
//! is derived from it.

pub mod codec;
pub mod err;
pub mod text;

pub use err::{Error, ErrorKind};

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Sentinel for a hash that has not been computed yet.
const HASH_UNSET: u64 = 0;
/// Replacement for a computed hash that collides with the sentinel.
const HASH_SENTINEL_REMAP: u64 = 1 << 63;

/// Builds an [`Oid`] from component literals. Invalid components are a
/// programmer error and panic, use [`Oid::new`] for untrusted input.
#[macro_export]
macro_rules! oid {
    ($($component:expr),+ $(,)?) => {
        $crate::oid::Oid::new(vec![$($component),+])
            .expect("object identifier literal with invalid components")
    };
}

/// An immutable object identifier.
///
/// Carries the component sequence as source of truth plus the three derived
/// representations: the lower-case hex of the BER content octets
/// (`octet_string`), the ASN.1 curly notation (`asn1`) and the dot notation
/// (`point`). The display name is the catalog name when the value matches a
/// [registry](crate::registry) entry, otherwise the dot notation.
pub struct Oid {
    components: Vec<u32>,
    octets: Vec<u8>,
    octet_string: String,
    asn1: String,
    point: String,
    name: String,
    /// Memoized [`Oid::hash_value`]. Racy on purpose: the computation is
    /// deterministic, so redundant stores are harmless.
    hash: AtomicU64,
}

impl Oid {
    /// Creates the identifier from its component sequence, validating the
    /// component invariants and resolving the display name against the
    /// registry.
    pub fn new(components: Vec<u32>) -> Result<Self, Error> {
        let mut oid = Self::assemble(components)?;
        if let Some(name) = crate::registry::resolve_name(&oid.octet_string) {
            oid.name = name.to_string();
        }
        Ok(oid)
    }

    /// Creates the identifier from BER content octets.
    pub fn from_bytes(octets: &[u8]) -> Result<Self, Error> {
        Self::new(codec::octets_to_components(octets)?)
    }

    /// Creates the identifier from the lower-case hex octet-string form.
    pub fn from_hex(octet_string: &str) -> Result<Self, Error> {
        Self::new(codec::hex_to_components(octet_string)?)
    }

    /// Creates the identifier from the ASN.1 curly notation.
    pub fn from_asn1(notation: &str) -> Result<Self, Error> {
        Self::new(text::asn1_to_components(notation)?)
    }

    /// Creates the identifier from the dot notation.
    pub fn from_point(notation: &str) -> Result<Self, Error> {
        Self::new(text::point_to_components(notation)?)
    }

    /// Registry-internal path: the display name is supplied instead of
    /// resolved. The catalog is static data, so a malformed entry is a
    /// defect of this crate and panics at initialization.
    pub(crate) fn well_known(name: &'static str, components: &[u32]) -> Self {
        let mut oid = Self::assemble(components.to_vec())
            .expect("malformed well-known object identifier");
        oid.name = name.to_string();
        oid
    }

    fn assemble(components: Vec<u32>) -> Result<Self, Error> {
        let octets = codec::components_to_octets(&components)?;
        let octet_string = hex::encode(&octets);
        let asn1 = text::components_to_asn1(&components);
        let point = text::components_to_point(&components);
        Ok(Self {
            name: point.clone(),
            components,
            octets,
            octet_string,
            asn1,
            point,
            hash: AtomicU64::new(HASH_UNSET),
        })
    }

    /// The component sequence.
    pub fn components(&self) -> &[u32] {
        &self.components
    }

    /// The BER content octets.
    pub fn to_bytes(&self) -> &[u8] {
        &self.octets
    }

    /// The lower-case hex rendering of the BER content octets. This is the
    /// canonical form: two identifiers are equal iff these strings match.
    pub fn octet_string(&self) -> &str {
        &self.octet_string
    }

    /// The ASN.1 curly notation, e.g. `{1 2 840 10045 3 1 7}`.
    pub fn asn1(&self) -> &str {
        &self.asn1
    }

    /// The dot notation, e.g. `1.2.840.10045.3.1.7`.
    pub fn point(&self) -> &str {
        &self.point
    }

    /// The resolved display name, or the dot notation for identifiers the
    /// registry does not know.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The memoized 64-bit hash of the canonical octet string.
    pub fn hash_value(&self) -> u64 {
        let cached = self.hash.load(AtomicOrdering::Relaxed);
        if cached != HASH_UNSET {
            return cached;
        }
        let mut hasher = DefaultHasher::new();
        self.octet_string.hash(&mut hasher);
        let mut computed = hasher.finish();
        if computed == HASH_UNSET {
            computed = HASH_SENTINEL_REMAP;
        }
        self.hash.store(computed, AtomicOrdering::Relaxed);
        computed
    }
}

impl PartialEq for Oid {
    fn eq(&self, other: &Self) -> bool {
        self.octet_string == other.octet_string
    }
}

impl Eq for Oid {}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components.cmp(&other.components)
    }
}

impl Hash for Oid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.octet_string.hash(state);
    }
}

impl Clone for Oid {
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
            octets: self.octets.clone(),
            octet_string: self.octet_string.clone(),
            asn1: self.asn1.clone(),
            point: self.point.clone(),
            name: self.name.clone(),
            hash: AtomicU64::new(self.hash.load(AtomicOrdering::Relaxed)),
        }
    }
}

impl Display for Oid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl Debug for Oid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Oid({} = {})", self.name, self.point)
    }
}

impl FromStr for Oid {
    type Err = Error;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        Self::from_point(notation)
    }
}

impl Serialize for Oid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.point)
    }
}

impl<'de> Deserialize<'de> for Oid {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let notation = String::deserialize(deserializer)?;
        Self::from_point(&notation).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    pub fn test_all_representations_are_populated_eagerly() {
        let oid = Oid::new(vec![1, 2, 840, 10045, 3, 1, 7]).unwrap();
        assert_eq!(&[1, 2, 840, 10045, 3, 1, 7], oid.components());
        assert_eq!("2a8648ce3d030107", oid.octet_string());
        assert_eq!("{1 2 840 10045 3 1 7}", oid.asn1());
        assert_eq!("1.2.840.10045.3.1.7", oid.point());
        assert_eq!(
            &[0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07],
            oid.to_bytes()
        );
    }

    #[test]
    pub fn test_equality_rests_on_the_octet_string() {
        let a = Oid::new(vec![1, 2, 3]).unwrap();
        let b = Oid::from_hex(a.octet_string()).unwrap();
        let c = Oid::new(vec![1, 2, 4]).unwrap();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
        assert_eq!(a == b, a.octet_string() == b.octet_string());
        assert_eq!(a == c, a.octet_string() == c.octet_string());
    }

    #[test]
    pub fn test_canonical_form_idempotence() {
        let oid = Oid::new(vec![0, 4, 0, 127, 0, 7, 2, 2, 4, 2, 2]).unwrap();
        assert_eq!(oid, Oid::from_hex(oid.octet_string()).unwrap());
        assert_eq!(oid, Oid::from_asn1(oid.asn1()).unwrap());
        assert_eq!(oid, Oid::from_point(oid.point()).unwrap());
        assert_eq!(oid, Oid::from_bytes(oid.to_bytes()).unwrap());
    }

    #[test]
    pub fn test_hash_is_memoized_and_consistent_with_equality() {
        let a = Oid::new(vec![1, 2, 3]).unwrap();
        let b = Oid::from_point("1.2.3").unwrap();
        assert_eq!(a.hash_value(), a.hash_value());
        assert_eq!(a.hash_value(), b.hash_value());
        assert_ne!(HASH_UNSET, a.hash_value());
    }

    #[test]
    pub fn test_unregistered_identifiers_display_the_point_form() {
        let oid = Oid::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!("1.2.3.4.5.6.7.8.9", oid.name());
        assert_eq!("1.2.3.4.5.6.7.8.9", oid.to_string());
    }

    #[test]
    pub fn test_registered_identifiers_display_the_catalog_name() {
        let oid = Oid::from_point("1.2.840.10045.4.3.2").unwrap();
        assert_eq!("ecdsa-with-SHA256", oid.name());
        assert_eq!(*crate::registry::ECDSA_WITH_SHA256, oid);
    }

    #[test]
    pub fn test_third_arc_second_component_is_unrestricted() {
        for second in &[0_u32, 39, 40, 100, u32::MAX] {
            let oid = Oid::new(vec![2, *second]).unwrap();
            assert_eq!(oid, Oid::from_hex(oid.octet_string()).unwrap());
        }
    }

    #[test]
    pub fn test_oid_macro() {
        assert_eq!(
            Oid::new(vec![1, 2, 840, 10045, 3, 1, 7]).unwrap(),
            oid!(1, 2, 840, 10045, 3, 1, 7)
        );
    }

    #[test]
    #[should_panic]
    pub fn test_oid_macro_panics_on_invalid_components() {
        let _ = oid!(3, 2, 1);
    }

    #[test]
    pub fn test_from_str_parses_the_point_form() {
        let oid: Oid = "2.100.3".parse().unwrap();
        assert_eq!("813403", oid.octet_string());
        assert!("2.100.x".parse::<Oid>().is_err());
    }

    #[test]
    pub fn test_ordering_follows_the_component_sequence() {
        let mut oids = vec![
            Oid::new(vec![2, 5]).unwrap(),
            Oid::new(vec![1, 2, 840]).unwrap(),
            Oid::new(vec![1, 2]).unwrap(),
        ];
        oids.sort();
        assert_eq!("1.2", oids[0].point());
        assert_eq!("1.2.840", oids[1].point());
        assert_eq!("2.5", oids[2].point());
    }
}
