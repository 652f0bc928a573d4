//! BER integer encoder
//!
//! # Usage Example
//!
//! ```rust
//! use ber_codec::ber::BerEncoder;
//!
//! let encoder = BerEncoder::new();
//! assert_eq!(encoder.encode(1280, None).unwrap(), 0x820500);
//! assert_eq!(encoder.encode(1280, Some(4)).unwrap(), 0x83000500);
//! ```

use crate::ber::hex::format_octets;
use crate::ber::types::{BerLength, MAX_VALUE};
use crate::error::{BerError, BerResult};
use ber_core::OverridePolicy;

/// Encoder for BER integers
///
/// The encoded form is returned as an unsigned integer whose big-endian
/// octets are the wire bytes: indicator octet (long form only) followed by
/// the value octets.
///
/// # Wide Composition
///
/// A 5-octet encoding puts the indicator at bits 32-39, above anything a
/// 32-bit OR can hold together with a 32-bit value. All composition is done
/// on `u64`, which covers every length.
#[derive(Debug, Clone, Copy, Default)]
pub struct BerEncoder {
    policy: OverridePolicy,
}

impl BerEncoder {
    /// Create an encoder with the permissive explicit-length policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the explicit-length policy
    pub fn with_override_policy(mut self, policy: OverridePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Resolve the length used to encode `value`
    ///
    /// # Arguments
    /// * `value` - Value to encode
    /// * `length` - Total octet count, `None` to use the minimal one
    ///
    /// # Error Handling
    /// Returns `OutOfRange` if:
    /// - `value` is above 2^32 - 1
    /// - `length` is outside [1, 5]
    /// - `value` does not fit `length` under [`OverridePolicy::Checked`]
    pub fn length_for(&self, value: u64, length: Option<usize>) -> BerResult<BerLength> {
        let Some(octets) = length else {
            return BerLength::for_value(value).inspect_err(|e| {
                log::debug!("Cannot encode {}: {}", value, e);
            });
        };

        if value > MAX_VALUE {
            log::debug!("Cannot encode {}: above {}", value, MAX_VALUE);
            return Err(BerError::OutOfRange(format!(
                "Value {} exceeds {}",
                value, MAX_VALUE
            )));
        }

        let length = BerLength::from_octets(octets)?;
        if self.policy == OverridePolicy::Checked && !length.fits(value) {
            log::debug!("Value {} does not fit in {} octets", value, octets);
            return Err(BerError::OutOfRange(format!(
                "Value {} needs more than {} octets",
                value, octets
            )));
        }
        Ok(length)
    }

    /// Encode `value` as an integer whose hex digits are the octet stream
    pub fn encode(&self, value: u64, length: Option<usize>) -> BerResult<u64> {
        let length = self.length_for(value, length)?;
        Ok(compose(value, length))
    }

    /// Encode `value` as upper-case hex text, two digits per octet
    pub fn encode_hex(&self, value: u64, length: Option<usize>) -> BerResult<String> {
        let length = self.length_for(value, length)?;
        Ok(format_octets(compose(value, length), length.octets()))
    }

    /// Encode `value` as raw octets
    pub fn encode_bytes(&self, value: u64, length: Option<usize>) -> BerResult<Vec<u8>> {
        let length = self.length_for(value, length)?;
        Ok(to_octets(compose(value, length), length.octets()))
    }
}

/// OR the indicator for `length` into `value`
///
/// | octets | indicator       |
/// |--------|-----------------|
/// | 1      | none            |
/// | 2      | `0x8100`        |
/// | 3      | `0x820000`      |
/// | 4      | `0x83000000`    |
/// | 5      | `0x8400000000`  |
pub fn compose(value: u64, length: BerLength) -> u64 {
    match length.indicator() {
        None => value,
        Some(indicator) => ((indicator as u64) << (8 * length.value_octets())) | value,
    }
}

/// Big-endian octets of an encoded integer, at least `octets` long
///
/// A permissive encoding wider than its length keeps its extra octets.
pub fn to_octets(encoded: u64, octets: usize) -> Vec<u8> {
    let bytes = encoded.to_be_bytes();
    let significant = bytes.len() - (encoded.leading_zeros() as usize / 8);
    let width = significant.max(octets).min(bytes.len());
    bytes[bytes.len() - width..].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasn::types::OctetString;

    #[test]
    fn test_encode_minimal() {
        let encoder = BerEncoder::new();
        assert_eq!(encoder.encode(0, None).unwrap(), 0);
        assert_eq!(encoder.encode(31, None).unwrap(), 0x1F);
        assert_eq!(encoder.encode(250, None).unwrap(), 0x81FA);
        assert_eq!(encoder.encode(1280, None).unwrap(), 0x820500);
        assert_eq!(encoder.encode(65536, None).unwrap(), 0x83010000);
        assert_eq!(encoder.encode(16777216, None).unwrap(), 0x8401000000);
        assert_eq!(encoder.encode(MAX_VALUE, None).unwrap(), 0x84FFFFFFFF);
    }

    #[test]
    fn test_encode_override() {
        let encoder = BerEncoder::new();
        assert_eq!(encoder.encode(1280, Some(4)).unwrap(), 0x83000500);
        assert_eq!(encoder.encode(1280, Some(5)).unwrap(), 0x8400000500);
        assert_eq!(encoder.encode(5, Some(2)).unwrap(), 0x8105);
        assert!(matches!(
            encoder.encode(250, Some(6)),
            Err(BerError::OutOfRange(_))
        ));
        assert!(matches!(
            encoder.encode(250, Some(0)),
            Err(BerError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_encode_rejects_wide_value() {
        let encoder = BerEncoder::new();
        assert!(matches!(
            encoder.encode(4294967296, None),
            Err(BerError::OutOfRange(_))
        ));
        assert!(matches!(
            encoder.encode(4294967296, Some(5)),
            Err(BerError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_permissive_override_ors_value() {
        let encoder = BerEncoder::new();
        // 300 spills into the indicator octet.
        assert_eq!(encoder.encode(300, Some(2)).unwrap(), 0x8100 | 300);
        assert_eq!(encoder.encode(200, Some(1)).unwrap(), 200);
    }

    #[test]
    fn test_checked_override() {
        let encoder = BerEncoder::new().with_override_policy(OverridePolicy::Checked);
        assert!(matches!(
            encoder.encode(300, Some(2)),
            Err(BerError::OutOfRange(_))
        ));
        assert!(matches!(
            encoder.encode(200, Some(1)),
            Err(BerError::OutOfRange(_))
        ));
        assert_eq!(encoder.encode(255, Some(2)).unwrap(), 0x81FF);
        assert_eq!(encoder.encode(127, Some(1)).unwrap(), 0x7F);
        assert_eq!(encoder.encode(1280, Some(4)).unwrap(), 0x83000500);
    }

    #[test]
    fn test_encode_hex() {
        let encoder = BerEncoder::new();
        assert_eq!(encoder.encode_hex(5, None).unwrap(), "05");
        assert_eq!(encoder.encode_hex(0, None).unwrap(), "00");
        assert_eq!(encoder.encode_hex(250, None).unwrap(), "81FA");
        assert_eq!(encoder.encode_hex(1280, Some(4)).unwrap(), "83000500");
        assert_eq!(encoder.encode_hex(16777216, None).unwrap(), "8401000000");
    }

    #[test]
    fn test_encode_bytes() {
        let encoder = BerEncoder::new();
        assert_eq!(encoder.encode_bytes(0, None).unwrap(), vec![0x00]);
        assert_eq!(encoder.encode_bytes(31, None).unwrap(), vec![0x1F]);
        assert_eq!(encoder.encode_bytes(1280, None).unwrap(), vec![0x82, 0x05, 0x00]);
        assert_eq!(
            encoder.encode_bytes(1280, Some(5)).unwrap(),
            vec![0x84, 0x00, 0x00, 0x05, 0x00]
        );
    }

    #[test]
    fn test_to_octets_keeps_spilled_octets() {
        assert_eq!(to_octets(0x19170, 2), vec![0x01, 0x91, 0x70]);
        assert_eq!(to_octets(0, 1), vec![0x00]);
    }

    #[test]
    fn test_matches_rasn_length_octets() {
        // The minimal encoding of n is the BER length field of an n-byte OCTET STRING.
        let encoder = BerEncoder::new();
        for n in [0usize, 1, 100, 127, 128, 255, 256, 1000, 65535, 65536] {
            let encoded = rasn::ber::encode(&OctetString::from(vec![0u8; n])).unwrap();
            let length_octets = &encoded[1..encoded.len() - n];
            assert_eq!(
                encoder.encode_bytes(n as u64, None).unwrap(),
                length_octets,
                "length {}",
                n
            );
        }
    }
}
