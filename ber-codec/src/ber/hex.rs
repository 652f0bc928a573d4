//! Hexadecimal text helpers

use crate::error::{BerError, BerResult};

/// Value of a single ASCII hex digit (either case)
pub fn hex_digit(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Parse up to 8 hex digits as a big-endian unsigned integer
///
/// # Error Handling
/// Returns `InvalidEncoding` on a non-hex digit or more than 8 digits.
pub fn parse_digits(digits: &[u8]) -> BerResult<u32> {
    if digits.len() > 8 {
        return Err(BerError::InvalidEncoding(format!(
            "{} hex digits do not fit in 32 bits",
            digits.len()
        )));
    }

    let mut value = 0u32;
    for &digit in digits {
        let nibble = hex_digit(digit).ok_or_else(|| {
            BerError::InvalidEncoding(format!("Invalid hex digit {:?}", digit as char))
        })?;
        value = (value << 4) | nibble as u32;
    }
    Ok(value)
}

/// Upper-case hex text of `value`, zero-padded to `octets` octets
///
/// A value wider than `octets` keeps all of its digits.
pub fn format_octets(value: u64, octets: usize) -> String {
    format!("{:0width$X}", value, width = octets * 2)
}
