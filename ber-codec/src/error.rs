//! Error types re-exported from `ber-core`

pub use ber_core::error::{BerError, BerResult};
