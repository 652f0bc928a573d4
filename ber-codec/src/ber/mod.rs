//! BER short/long form integer encoding
//!
//! An unsigned integer up to 2^32 - 1 is encoded the way ASN.1 BER encodes
//! a definite length field.
//!
//! ## Short Form
//!
//! Values 0-127 take one octet with bit 7 clear. The octet is the value.
//!
//! ## Long Form
//!
//! Larger values take an indicator octet followed by 1-4 big-endian value
//! octets. The indicator has bit 7 set and its low bits count the value
//! octets:
//!
//! | indicator | value octets | range                 |
//! |-----------|--------------|-----------------------|
//! | `0x81`    | 1            | 128 - 255             |
//! | `0x82`    | 2            | 256 - 65535           |
//! | `0x83`    | 3            | 65536 - 16777215      |
//! | `0x84`    | 4            | 16777216 - 4294967295 |
//!
//! `0x80` (indefinite length) and indicators above `0x84` are not supported.
//! Tag octets and nested TLV structures are outside this module.

pub mod decoder;
pub mod encoder;
pub mod hex;
pub mod types;

pub use decoder::{decode_octets, BerDecoder};
pub use encoder::BerEncoder;
pub use types::{BerLength, MAX_OCTETS, MAX_VALUE};
