//! Error types for configuration resolution and logger construction

/// Result type for configuration and logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for configuration and logger operations
///
/// Errors are always returned to the caller; nothing is logged, retried,
/// or swallowed internally, and no partial configuration is ever exposed
/// on failure.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A preset option was supplied somewhere other than first position
    #[error("a preset option can only be applied as the first option (found at index {index})")]
    PresetOrdering {
        /// Index at which the offending preset appeared
        index: usize,
    },

    /// The invalid (zero-value) preset was applied or rendered
    #[error("cannot apply or render the invalid preset")]
    InvalidPreset,

    /// Text token did not name a known preset
    #[error("unknown preset '{token}' (expected development, production, or dynamic)")]
    ParsePreset {
        /// The rejected token
        token: String,
    },

    /// Text token did not name a known value of a configuration field
    #[error("unknown {what} '{token}'")]
    ParseToken {
        /// Kind of value being parsed (level, encoding, ...)
        what: &'static str,
        /// The rejected token
        token: String,
    },

    /// An environment variable held a value its field cannot be parsed from
    #[error("cannot parse {var}='{value}': {reason}")]
    EnvParse {
        /// Fully-prefixed variable name
        var: String,
        /// The offending value
        value: String,
        /// Underlying parse failure
        reason: String,
    },

    /// The logging engine rejected the fully-resolved configuration
    #[error("logger construction failed: {reason}")]
    Construction {
        /// What the engine objected to
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn construction(reason: impl Into<String>) -> Self {
        Error::Construction {
            reason: reason.into(),
        }
    }
}
