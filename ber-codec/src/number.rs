use crate::ber::encoder::{compose, to_octets};
use crate::ber::hex::format_octets;
use crate::ber::{BerDecoder, BerLength};
use crate::error::{BerError, BerResult};
use ber_core::TrailingPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A BER-encodable integer together with the octet count it is encoded in
///
/// The octet count is always large enough to hold the value, so a
/// `BerNumber` round-trips exactly, including non-minimal (padded) forms.
/// It serializes as its hex text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct BerNumber {
    value: u32,
    octets: u8,
}

impl BerNumber {
    /// Create a number using the minimal encoding
    pub fn new(value: u32) -> Self {
        Self {
            value,
            octets: BerLength::for_u32(value).octets() as u8,
        }
    }

    /// Create a number with an explicit total octet count
    ///
    /// # Error Handling
    /// Returns `OutOfRange` if `octets` is outside [1, 5] or too small for `value`.
    pub fn with_length(value: u32, octets: usize) -> BerResult<Self> {
        let length = BerLength::from_octets(octets)?;
        if !length.fits(value as u64) {
            return Err(BerError::OutOfRange(format!(
                "Value {} needs more than {} octets",
                value, octets
            )));
        }
        Ok(Self {
            value,
            octets: octets as u8,
        })
    }

    /// Get the value
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Get the total octet count
    pub fn octets(&self) -> usize {
        self.octets as usize
    }

    fn length(&self) -> BerLength {
        // `octets` is validated on construction.
        BerLength::from_octets(self.octets()).unwrap_or(BerLength::Short)
    }

    /// Encoded form as an integer
    pub fn encoded(&self) -> u64 {
        compose(self.value as u64, self.length())
    }

    /// Encoded octets
    pub fn to_bytes(&self) -> Vec<u8> {
        to_octets(self.encoded(), self.octets())
    }
}

impl From<u32> for BerNumber {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<BerNumber> for u32 {
    fn from(number: BerNumber) -> Self {
        number.value
    }
}

impl From<BerNumber> for String {
    fn from(number: BerNumber) -> Self {
        number.to_string()
    }
}

impl TryFrom<String> for BerNumber {
    type Error = BerError;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        hex.parse()
    }
}

impl fmt::Display for BerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_octets(self.encoded(), self.octets()))
    }
}

impl FromStr for BerNumber {
    type Err = BerError;

    /// Parse hex text that is exactly one encoding
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoder = BerDecoder::new(s).with_trailing(TrailingPolicy::Strict);
        let length = decoder.length()?;
        let value = decoder.decode()?;
        Ok(Self {
            value,
            octets: length.octets() as u8,
        })
    }
}
