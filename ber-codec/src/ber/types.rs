//! BER length types

use crate::error::{BerError, BerResult};

/// Largest value the codec can represent (2^32 - 1)
pub const MAX_VALUE: u64 = u32::MAX as u64;

/// Largest total octet count (indicator + 4 value octets)
pub const MAX_OCTETS: usize = 5;

/// Exclusive upper bound of the value held by each total octet count
///
/// Index `n - 1` bounds an `n`-octet encoding. The first entry is the
/// short-form limit, the others are powers of 256.
const BOUNDARIES: [u64; MAX_OCTETS] = [128, 256, 65536, 16777216, 4294967296];

/// BER length of an encoded integer
///
/// - **Short form**: a single octet with bit 7 clear, holding values 0-127
/// - **Long form**: an indicator octet `0x80 | n` followed by `n` (1-4)
///   big-endian value octets
///
/// # Encoding Format
///
/// Short form:
/// ```text
/// Byte: 0 V V V V V V V
/// ```
///
/// Long form:
/// ```text
/// First byte:  1 0 0 0 0 N N N  (N = number of value bytes, 1-4)
/// Following bytes: V V V V V V V V  (big-endian value)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BerLength {
    /// Short form: the octet is the value
    Short,
    /// Long form with the given number of value octets (1-4)
    Long(u8),
}

impl BerLength {
    /// Build a length from a total octet count
    ///
    /// # Error Handling
    /// Returns `OutOfRange` unless `octets` is in [1, 5].
    pub fn from_octets(octets: usize) -> BerResult<Self> {
        match octets {
            1 => Ok(BerLength::Short),
            2..=MAX_OCTETS => Ok(BerLength::Long((octets - 1) as u8)),
            _ => Err(BerError::OutOfRange(format!(
                "Octet count {} outside [1, {}]",
                octets, MAX_OCTETS
            ))),
        }
    }

    /// Classify an encoding by its first octet
    ///
    /// Octets below 0x80 are short form. Long form accepts the indicators
    /// 0x81-0x84 only; 0x80 (indefinite length) and anything from 0x85 up
    /// are rejected.
    pub fn from_first_octet(octet: u8) -> BerResult<Self> {
        if octet < 0x80 {
            return Ok(BerLength::Short);
        }

        let total = octet as usize - 127;
        if (2..=MAX_OCTETS).contains(&total) {
            Ok(BerLength::Long((total - 1) as u8))
        } else {
            Err(BerError::InvalidEncoding(format!(
                "Unsupported leading octet 0x{:02X}",
                octet
            )))
        }
    }

    /// Minimal length for a value
    ///
    /// # Error Handling
    /// Returns `OutOfRange` for values above 2^32 - 1.
    pub fn for_value(value: u64) -> BerResult<Self> {
        let value = u32::try_from(value).map_err(|_| {
            BerError::OutOfRange(format!("Value {} exceeds {}", value, MAX_VALUE))
        })?;
        Ok(Self::for_u32(value))
    }

    /// Minimal length for a value that is known to be representable
    pub fn for_u32(value: u32) -> Self {
        let value = value as u64;
        // The last boundary is 2^32, so a u32 always finds a tier.
        let index = BOUNDARIES
            .iter()
            .position(|&bound| value < bound)
            .unwrap_or(MAX_OCTETS - 1);
        if index == 0 {
            BerLength::Short
        } else {
            BerLength::Long(index as u8)
        }
    }

    /// Total number of octets, indicator included
    pub fn octets(&self) -> usize {
        match self {
            BerLength::Short => 1,
            BerLength::Long(n) => *n as usize + 1,
        }
    }

    /// Number of octets holding the value
    pub fn value_octets(&self) -> usize {
        match self {
            BerLength::Short => 1,
            BerLength::Long(n) => *n as usize,
        }
    }

    /// Indicator octet, `None` for short form
    pub fn indicator(&self) -> Option<u8> {
        match self {
            BerLength::Short => None,
            BerLength::Long(n) => Some(0x80 | *n),
        }
    }

    /// Exclusive upper bound of values this length can hold
    pub fn capacity(&self) -> u64 {
        BOUNDARIES[self.octets() - 1]
    }

    /// Whether `value` fits without spilling into the indicator
    pub fn fits(&self, value: u64) -> bool {
        value < self.capacity()
    }
}
