pub use crate::oid::codec::{
    components_to_hex, components_to_octets, hex_to_components, octets_to_components, OidRead,
    OidWrite,
};
pub use crate::oid::text::{
    asn1_to_components, components_to_asn1, components_to_point, point_to_components,
};
pub use crate::oid::{Error, ErrorKind, Oid};
pub use crate::registry::all_known;
