//! Core types for the BER integer codec
//!
//! This crate provides the error type and the codec configuration shared by
//! the encoding and decoding crates.

pub mod config;
pub mod error;

pub use config::{CodecConfig, OverridePolicy, TrailingPolicy};
pub use error::{BerError, BerResult};
