//! ber-numbers - BER short/long form integer codec
//!
//! Converts unsigned integers (0 to 2^32 - 1) to and from the encoding ASN.1
//! BER uses for definite length fields: one octet for 0-127, otherwise an
//! indicator octet `0x81`-`0x84` followed by 1-4 big-endian value octets.
//!
//! # Architecture
//!
//! - `ber-core`: error type and codec configuration
//! - `ber-codec`: length classification, encoder and decoder
//!
//! # Usage
//!
//! ```
//! use ber_numbers::{calc_length, decode, encode, length};
//!
//! assert_eq!(length("83000555").unwrap(), 4);
//! assert_eq!(calc_length(65536).unwrap(), 4);
//! assert_eq!(decode("820500").unwrap(), 1280);
//! assert_eq!(encode(16777216, None).unwrap(), 0x8401000000);
//! ```

// Re-export core types
pub use ber_core::{BerError, BerResult, CodecConfig, OverridePolicy, TrailingPolicy};

// Re-export codec API
pub use ber_codec::{
    calc_length, decode, decode_bytes, encode, encode_bytes, encode_hex, length,
    length_of_octet, BerCodec, BerLength, BerNumber, MAX_OCTETS, MAX_VALUE,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Inclusive value range of each total octet count
    const TIERS: [(u64, u64); 5] = [
        (0, 127),
        (128, 255),
        (256, 65535),
        (65536, 16777215),
        (16777216, 4294967295),
    ];

    #[test]
    fn test_length() {
        for hex in ["1", "10", "40", "100", "127", "7F"] {
            assert_eq!(length(hex).unwrap(), 1, "{}", hex);
        }
        assert_eq!(length("83000555").unwrap(), 4);
        assert_eq!(length(""), Err(BerError::EmptyInput));
        assert!(matches!(length("80"), Err(BerError::InvalidEncoding(_))));
        assert!(matches!(length("86000555"), Err(BerError::InvalidEncoding(_))));
    }

    #[test]
    fn test_length_is_idempotent() {
        for hex in ["7F", "83000555", "86000555", ""] {
            assert_eq!(length(hex), length(hex));
        }
    }

    #[test]
    fn test_calc_length_boundaries() {
        let cases: [(u64, usize); 12] = [
            (0, 1),
            (1, 1),
            (127, 1),
            (128, 2),
            (255, 2),
            (256, 3),
            (65535, 3),
            (65536, 4),
            (100000, 4),
            (16777215, 4),
            (16777216, 5),
            (4294967295, 5),
        ];
        for (value, octets) in cases {
            assert_eq!(calc_length(value).unwrap(), octets, "value {}", value);
        }
        assert!(matches!(calc_length(4294967296), Err(BerError::OutOfRange(_))));
        assert!(matches!(calc_length(4294967297), Err(BerError::OutOfRange(_))));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(""), Err(BerError::EmptyInput));
        assert_eq!(decode("1F").unwrap(), 31);
        assert_eq!(decode("81FF").unwrap(), 255);
        assert_eq!(decode("820500").unwrap(), 1280);
        assert_eq!(decode("83000500").unwrap(), 1280);
    }

    #[test]
    fn test_decode_zero_is_a_value() {
        assert_eq!(decode("00").unwrap(), 0);
        assert_eq!(decode("8100").unwrap(), 0);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(0, None).unwrap(), 0);
        assert_eq!(encode(31, None).unwrap(), 0x1F);
        assert_eq!(encode(250, None).unwrap(), 0x81FA);
        assert_eq!(encode(1280, None).unwrap(), 0x820500);
        assert_eq!(encode(1280, Some(4)).unwrap(), 0x83000500);
        assert_eq!(encode(65536, None).unwrap(), 0x83010000);
        assert_eq!(encode(16777216, None).unwrap(), 0x8401000000);
    }

    #[test]
    fn test_encode_rejects() {
        assert!(matches!(encode(4294967296, None), Err(BerError::OutOfRange(_))));
        assert!(matches!(encode(250, Some(6)), Err(BerError::OutOfRange(_))));
        assert!(matches!(encode(250, Some(0)), Err(BerError::OutOfRange(_))));
    }

    #[test]
    fn test_indicator_octet() {
        for octets in 2..=MAX_OCTETS {
            let (low, _) = TIERS[octets - 1];
            let bytes = encode_bytes(low, None).unwrap();
            assert_eq!(bytes.len(), octets);
            assert_eq!(bytes[0] as usize, 0x80 + octets - 1);
        }
    }

    #[test]
    fn test_round_trip_tier_edges() {
        for (low, high) in TIERS {
            for value in [low, low + 1, high - 1, high] {
                let encoded = encode_hex(value, None).unwrap();
                assert_eq!(decode(&encoded).unwrap() as u64, value, "{}", encoded);
                assert_eq!(length(&encoded).unwrap(), calc_length(value).unwrap());
            }
        }
    }

    #[test]
    fn test_round_trip_sampled() {
        let mut rng = StdRng::seed_from_u64(0xBE4);
        for (low, high) in TIERS {
            for _ in 0..2000 {
                let value = rng.gen_range(low..=high);
                let octets = calc_length(value).unwrap();
                let encoded = encode(value, None).unwrap();
                let hex = format!("{:0width$X}", encoded, width = octets * 2);
                assert_eq!(hex, encode_hex(value, None).unwrap());
                assert_eq!(decode(&hex).unwrap() as u64, value);
                assert_eq!(length(&hex[..2]).unwrap(), octets);
            }
        }
    }

    #[test]
    fn test_round_trip_with_padding() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let value = rng.gen_range(0..=MAX_VALUE);
            for octets in calc_length(value).unwrap()..=MAX_OCTETS {
                let hex = encode_hex(value, Some(octets)).unwrap();
                assert_eq!(decode(&hex).unwrap() as u64, value);
                assert_eq!(length(&hex).unwrap(), octets);
            }
        }
    }

    #[test]
    fn test_number_round_trip() {
        let number = BerNumber::with_length(1280, 4).unwrap();
        let parsed: BerNumber = number.to_string().parse().unwrap();
        assert_eq!(parsed, number);
        assert_eq!(decode_bytes(&number.to_bytes()).unwrap(), 1280);
    }

    #[test]
    fn test_strict_codec_documents_leniency() {
        // Trailing text after the declared octets
        assert_eq!(decode("81FF00").unwrap(), 255);
        assert!(BerCodec::strict().decode("81FF00").is_err());

        // Explicit length too small for the value
        assert_eq!(encode(70000, Some(2)).unwrap(), 0x8100 | 70000);
        assert!(BerCodec::strict().encode(70000, Some(2)).is_err());
    }
}
