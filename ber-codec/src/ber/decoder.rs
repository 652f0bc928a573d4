//! BER integer decoder
//!
//! # Usage Example
//!
//! ```rust
//! use ber_codec::ber::BerDecoder;
//!
//! let decoder = BerDecoder::new("820500");
//! assert_eq!(decoder.decode().unwrap(), 1280);
//! ```

use crate::ber::hex::parse_digits;
use crate::ber::types::BerLength;
use crate::error::{BerError, BerResult};
use ber_core::TrailingPolicy;

/// Decoder for one BER-encoded integer given as hex text
///
/// Only the first octet is needed to classify the encoding; the value is
/// read from the octets that follow it.
///
/// # Error Handling
///
/// Errors can occur due to:
/// - Empty input
/// - Unsupported leading octet (0x80, or 0x85 and above)
/// - Non-hex digits inside the declared octets
/// - Missing value octets, or (strict) trailing text
#[derive(Debug, Clone, Copy)]
pub struct BerDecoder<'a> {
    digits: &'a [u8],
    trailing: TrailingPolicy,
}

impl<'a> BerDecoder<'a> {
    /// Create a lenient decoder over hex text
    pub fn new(hex: &'a str) -> Self {
        Self {
            digits: hex.as_bytes(),
            trailing: TrailingPolicy::default(),
        }
    }

    /// Set the trailing-data policy
    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    /// Classify the encoding from its first 1 or 2 hex digits
    pub fn length(&self) -> BerResult<BerLength> {
        if self.digits.is_empty() {
            return Err(BerError::EmptyInput);
        }

        let lead = &self.digits[..self.digits.len().min(2)];
        let octet = parse_digits(lead)? as u8;
        BerLength::from_first_octet(octet).inspect_err(|e| {
            log::debug!("Rejected BER leading octet: {}", e);
        })
    }

    /// Decode the integer value
    ///
    /// # Decoding Process
    /// 1. Classify the first octet
    /// 2. Short form: the first octet is the value
    /// 3. Long form: skip the indicator, read the value octets big-endian
    pub fn decode(&self) -> BerResult<u32> {
        let length = self.length()?;

        let (start, declared) = match length {
            BerLength::Short => (0, 2),
            BerLength::Long(n) => (2, n as usize * 2),
        };

        // A long form indicator needs two digits, so `start` is in bounds.
        let available = &self.digits[start..];
        let field = match self.trailing {
            TrailingPolicy::Strict => self.strict_field(length, available, declared)?,
            TrailingPolicy::Lenient => &available[..available.len().min(declared)],
        };

        if field.is_empty() {
            log::debug!("BER long form {:?} has no value octets", length);
            return Err(BerError::InvalidEncoding(
                "Long form indicator without value octets".to_string(),
            ));
        }

        parse_digits(field)
    }

    fn strict_field(
        &self,
        length: BerLength,
        available: &'a [u8],
        declared: usize,
    ) -> BerResult<&'a [u8]> {
        // A lone digit is a complete short form octet.
        if length == BerLength::Short && available.len() == 1 {
            return Ok(available);
        }

        if available.len() != declared {
            log::debug!(
                "BER {:?} declares {} hex digits, got {}",
                length,
                declared,
                available.len()
            );
            return Err(BerError::InvalidEncoding(format!(
                "Expected {} value hex digits, got {}",
                declared,
                available.len()
            )));
        }
        Ok(available)
    }
}

/// Decode a BER integer from raw octets
///
/// Same rules as [`BerDecoder`], one array element per octet.
pub fn decode_octets(octets: &[u8], trailing: TrailingPolicy) -> BerResult<u32> {
    let first = *octets.first().ok_or(BerError::EmptyInput)?;
    let length = BerLength::from_first_octet(first)?;

    let (body, declared) = match length {
        BerLength::Short => return check_trailing(first as u32, octets.len(), 1, trailing),
        BerLength::Long(n) => (&octets[1..], n as usize),
    };

    if body.is_empty() {
        return Err(BerError::InvalidEncoding(
            "Long form indicator without value octets".to_string(),
        ));
    }

    let field = &body[..body.len().min(declared)];
    let value = field
        .iter()
        .fold(0u32, |acc, &octet| (acc << 8) | octet as u32);
    check_trailing(value, octets.len(), length.octets(), trailing)
}

fn check_trailing(
    value: u32,
    actual: usize,
    declared: usize,
    trailing: TrailingPolicy,
) -> BerResult<u32> {
    if trailing == TrailingPolicy::Strict && actual != declared {
        log::debug!("BER encoding declares {} octets, got {}", declared, actual);
        return Err(BerError::InvalidEncoding(format!(
            "Expected {} octets, got {}",
            declared, actual
        )));
    }
    Ok(value)
}
