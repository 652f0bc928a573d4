use thiserror::Error;

/// Main error type for BER integer codec operations
///
/// Every failure is total for the call that produced it. A decoded `0` is a
/// success, never an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BerError {
    /// No data was given to the length classifier or decoder
    #[error("Empty input: no BER value given")]
    EmptyInput,

    /// Leading octet is not a supported short/long form, or the hex text is malformed
    #[error("Invalid BER encoding: {0}")]
    InvalidEncoding(String),

    /// Value or octet count outside the representable domain
    #[error("Out of range: {0}")]
    OutOfRange(String),
}

/// Result type alias for BER integer codec operations
pub type BerResult<T> = Result<T, BerError>;
