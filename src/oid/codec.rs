//! Subidentifier codec and the BER octet-string form of an object identifier.
//!
//! According to ITU-T X.690 | ISO/IEC 8825-1, chapter 8.19, the content
//! octets of an object identifier are a concatenation of subidentifiers,
//! where the first subidentifier folds the first two components into
//! `40 * first + second`.

use crate::oid::err::Error;
use std::io::{Read, Write};

/// The largest value a single component may carry. One documented cap for
/// every conversion path, see also [`SUBIDENTIFIER_MAX`].
pub const COMPONENT_MAX: u32 = u32::MAX;

/// An object identifier consists of at least two components.
pub const MIN_COMPONENTS: usize = 2;

/// The first component selects one of three root arcs.
pub const FIRST_COMPONENT_MAX: u32 = 2;

/// While the first component is 0 or 1, the second component must not
/// exceed this value. The third arc (`first == 2`) is unrestricted.
pub const SECOND_COMPONENT_RESTRICTED_MAX: u32 = 39;

/// The largest value the subidentifier codec accumulates before failing.
/// Wider than [`COMPONENT_MAX`] because the first subidentifier folds two
/// components into one value.
pub const SUBIDENTIFIER_MAX: u64 = i64::MAX as u64;

const CONTINUATION_BIT: u8 = 0b1_0000000;
const PAYLOAD_BITS_MASK: u8 = 0b0_1111111;
const PAYLOAD_BITS: u32 = 7;

/// Number of octets required for the largest encodable value (`u64::MAX`).
const MAX_ENCODED_LEN: usize = 10;

/// According to ITU-T X.690, chapter 8.19.2, each subidentifier is a series
/// of octets carrying 7 payload bits each, where bit 8 of every octet except
/// the last one is set.
pub trait OidRead {
    /// Reads octets until one with a clear bit 8 terminates the
    /// subidentifier, accumulating 7 bits per octet.
    fn read_subidentifier(&mut self) -> Result<u64, Error>;
}

/// According to ITU-T X.690, chapter 8.19.2, each subidentifier is a series
/// of octets carrying 7 payload bits each, where bit 8 of every octet except
/// the last one is set.
pub trait OidWrite {
    /// Writes the value in as few octets as possible (chapter 8.19.2: the
    /// leading octet never carries an all-zero payload unless it is the
    /// only octet).
    fn write_subidentifier(&mut self, value: u64) -> Result<(), Error>;
}

impl<T: Read> OidRead for T {
    fn read_subidentifier(&mut self) -> Result<u64, Error> {
        let mut value = 0_u64;
        loop {
            let mut octet = [0u8; 1];
            self.read_exact(&mut octet[..])
                .map_err(Error::unexpected_end_of_stream)?;
            if value > SUBIDENTIFIER_MAX >> PAYLOAD_BITS {
                return Err(Error::subidentifier_exceeds_max_value());
            }
            value = (value << PAYLOAD_BITS) | u64::from(octet[0] & PAYLOAD_BITS_MASK);
            if octet[0] & CONTINUATION_BIT == 0 {
                return Ok(value);
            }
        }
    }
}

impl<T: Write> OidWrite for T {
    fn write_subidentifier(&mut self, value: u64) -> Result<(), Error> {
        let mut buffer = [0u8; MAX_ENCODED_LEN];
        let mut index = buffer.len() - 1;
        buffer[index] = (value as u8) & PAYLOAD_BITS_MASK;
        let mut remaining = value >> PAYLOAD_BITS;
        while remaining != 0 {
            index -= 1;
            buffer[index] = (remaining as u8) & PAYLOAD_BITS_MASK | CONTINUATION_BIT;
            remaining >>= PAYLOAD_BITS;
        }
        Ok(self.write_all(&buffer[index..])?)
    }
}

/// Encodes the component sequence as BER content octets. Validates the
/// component invariants before encoding anything.
pub fn components_to_octets(components: &[u32]) -> Result<Vec<u8>, Error> {
    if components.len() < MIN_COMPONENTS {
        return Err(Error::too_few_components(components.len()));
    }
    let first = components[0];
    let second = components[1];
    if first > FIRST_COMPONENT_MAX {
        return Err(Error::first_component_not_in_range(first));
    }
    if first < FIRST_COMPONENT_MAX && second > SECOND_COMPONENT_RESTRICTED_MAX {
        return Err(Error::second_component_not_in_range(first, second));
    }
    let mut octets = Vec::with_capacity(components.len() + 4);
    octets.write_subidentifier(u64::from(first) * 40 + u64::from(second))?;
    for &component in &components[MIN_COMPONENTS..] {
        octets.write_subidentifier(u64::from(component))?;
    }
    Ok(octets)
}

/// Decodes BER content octets back into the component sequence.
///
/// The first two components cannot be recovered by plain division: any
/// folded value of 80 or above belongs to the third root arc, whose second
/// component is not capped at 39.
pub fn octets_to_components(octets: &[u8]) -> Result<Vec<u32>, Error> {
    let mut read = octets;
    let folded = read.read_subidentifier()?;
    let first = if folded >= 80 {
        FIRST_COMPONENT_MAX
    } else {
        (folded / 40) as u32
    };
    let second = folded - u64::from(first) * 40;
    if second > u64::from(COMPONENT_MAX) {
        return Err(Error::second_component_exceeds_max_value(second));
    }
    let mut components = vec![first, second as u32];
    while !read.is_empty() {
        let value = read.read_subidentifier()?;
        if value > u64::from(COMPONENT_MAX) {
            return Err(Error::trailing_component_exceeds_max_value(
                components.len(),
                value,
            ));
        }
        components.push(value as u32);
    }
    Ok(components)
}

/// Encodes the component sequence and renders it as lower-case hex.
pub fn components_to_hex(components: &[u32]) -> Result<String, Error> {
    Ok(hex::encode(components_to_octets(components)?))
}

/// Parses the lower-case hex octet-string form and decodes it.
pub fn hex_to_components(octet_string: &str) -> Result<Vec<u32>, Error> {
    let octets = hex::decode(octet_string).map_err(Error::invalid_hex_string)?;
    octets_to_components(&octets)
}
