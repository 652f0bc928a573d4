//! BER integer encoding/decoding
//!
//! This crate converts between unsigned integers (0 to 2^32 - 1) and their
//! BER short/long form encoding, given as hex text, raw octets or an integer
//! whose hex digits are the octets.
//!
//! # Operations
//!
//! - [`length`]: total octet count from the first encoded octet
//! - [`calc_length`]: minimal octet count for a value
//! - [`decode`]: hex text to value
//! - [`encode`]: value to encoded integer, with an optional explicit length
//!
//! Leniency of decoding and of explicit lengths is set through
//! [`CodecConfig`](ber_core::CodecConfig) on a [`BerCodec`].

pub mod ber;
pub mod codec;
pub mod error;
pub mod number;

pub use ber::{BerDecoder, BerEncoder, BerLength, MAX_OCTETS, MAX_VALUE};
pub use codec::{
    calc_length, decode, decode_bytes, encode, encode_bytes, encode_hex, length,
    length_of_octet, BerCodec,
};
pub use error::{BerError, BerResult};
pub use number::BerNumber;
