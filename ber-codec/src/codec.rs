//! Codec front end
//!
//! [`BerCodec`] applies a [`CodecConfig`] to every operation. The free
//! functions use the default (lenient) configuration.

use crate::ber::{decode_octets, BerDecoder, BerEncoder, BerLength};
use crate::error::BerResult;
use ber_core::CodecConfig;

/// BER integer codec with a fixed configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BerCodec {
    config: CodecConfig,
}

impl BerCodec {
    /// Create a codec with the given configuration
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Codec rejecting trailing data and over-wide explicit lengths
    pub fn strict() -> Self {
        Self::new(CodecConfig::strict())
    }

    /// Get the configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    fn decoder<'a>(&self, hex: &'a str) -> BerDecoder<'a> {
        BerDecoder::new(hex).with_trailing(self.config.trailing)
    }

    fn encoder(&self) -> BerEncoder {
        BerEncoder::new().with_override_policy(self.config.override_length)
    }

    /// Total octet count of the encoding starting at `hex`
    ///
    /// Only the first 1-2 hex digits are read.
    pub fn length(&self, hex: &str) -> BerResult<usize> {
        Ok(self.decoder(hex).length()?.octets())
    }

    /// Total octet count of the encoding whose first octet is `octet`
    pub fn length_of_octet(&self, octet: u8) -> BerResult<usize> {
        Ok(BerLength::from_first_octet(octet)?.octets())
    }

    /// Minimal total octet count for `value`
    pub fn calc_length(&self, value: u64) -> BerResult<usize> {
        Ok(BerLength::for_value(value)?.octets())
    }

    /// Decode hex text
    pub fn decode(&self, hex: &str) -> BerResult<u32> {
        let value = self.decoder(hex).decode()?;
        log::trace!("Decoded BER {} -> {}", hex, value);
        Ok(value)
    }

    /// Decode raw octets
    pub fn decode_bytes(&self, octets: &[u8]) -> BerResult<u32> {
        decode_octets(octets, self.config.trailing)
    }

    /// Encode `value`, `length` being an optional total octet count
    pub fn encode(&self, value: u64, length: Option<usize>) -> BerResult<u64> {
        let encoded = self.encoder().encode(value, length)?;
        log::trace!("Encoded {} -> BER 0x{:X}", value, encoded);
        Ok(encoded)
    }

    /// Encode `value` as hex text
    pub fn encode_hex(&self, value: u64, length: Option<usize>) -> BerResult<String> {
        self.encoder().encode_hex(value, length)
    }

    /// Encode `value` as raw octets
    pub fn encode_bytes(&self, value: u64, length: Option<usize>) -> BerResult<Vec<u8>> {
        self.encoder().encode_bytes(value, length)
    }
}

/// Total octet count of the encoding starting at `hex`
///
/// # Example
///
/// ```
/// assert_eq!(ber_codec::length("83000555").unwrap(), 4);
/// assert!(ber_codec::length("86000555").is_err());
/// ```
pub fn length(hex: &str) -> BerResult<usize> {
    BerCodec::default().length(hex)
}

/// Minimal total octet count for `value`
pub fn calc_length(value: u64) -> BerResult<usize> {
    BerCodec::default().calc_length(value)
}

/// Decode hex text, ignoring anything past the declared octets
pub fn decode(hex: &str) -> BerResult<u32> {
    BerCodec::default().decode(hex)
}

/// Encode `value`; `None` picks the minimal length
///
/// # Example
///
/// ```
/// assert_eq!(ber_codec::encode(250, None).unwrap(), 0x81FA);
/// assert_eq!(ber_codec::encode(1280, Some(4)).unwrap(), 0x83000500);
/// ```
pub fn encode(value: u64, length: Option<usize>) -> BerResult<u64> {
    BerCodec::default().encode(value, length)
}

/// Encode `value` as upper-case hex text
pub fn encode_hex(value: u64, length: Option<usize>) -> BerResult<String> {
    BerCodec::default().encode_hex(value, length)
}

/// Encode `value` as raw octets
pub fn encode_bytes(value: u64, length: Option<usize>) -> BerResult<Vec<u8>> {
    BerCodec::default().encode_bytes(value, length)
}

/// Decode raw octets
pub fn decode_bytes(octets: &[u8]) -> BerResult<u32> {
    BerCodec::default().decode_bytes(octets)
}

/// Total octet count of the encoding whose first octet is `octet`
pub fn length_of_octet(octet: u8) -> BerResult<usize> {
    BerCodec::default().length_of_octet(octet)
}
