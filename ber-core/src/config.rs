//! Codec configuration
//!
//! The reference behaviour is lenient in two places: decoding ignores text
//! past the declared length, and an explicit encode length is only checked
//! against [1, 5], not against the value. Both are kept as defaults and can
//! be tightened here.

use serde::{Deserialize, Serialize};

/// How the decoder treats hex text beyond the declared octet count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TrailingPolicy {
    /// Read the declared octets and ignore anything after them
    #[default]
    Lenient,
    /// Input must be exactly the declared octets
    Strict,
}

/// How the encoder treats an explicit octet count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OverridePolicy {
    /// Only the [1, 5] range is checked; the value is OR-ed in as given
    #[default]
    Permissive,
    /// The value must also fit in the requested octets
    Checked,
}

/// Codec configuration
///
/// # Example
///
/// ```
/// use ber_core::{CodecConfig, OverridePolicy, TrailingPolicy};
///
/// let config = CodecConfig::strict();
/// assert_eq!(config.trailing, TrailingPolicy::Strict);
/// assert_eq!(config.override_length, OverridePolicy::Checked);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Decoder trailing-data handling
    #[serde(default)]
    pub trailing: TrailingPolicy,
    /// Encoder explicit-length handling
    #[serde(default)]
    pub override_length: OverridePolicy,
}

impl CodecConfig {
    /// Lenient configuration, identical to `CodecConfig::default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration that rejects every input the lenient codec tolerates
    pub fn strict() -> Self {
        Self {
            trailing: TrailingPolicy::Strict,
            override_length: OverridePolicy::Checked,
        }
    }

    /// Set the trailing-data policy
    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    /// Set the explicit-length policy
    pub fn with_override_policy(mut self, policy: OverridePolicy) -> Self {
        self.override_length = policy;
        self
    }
}
