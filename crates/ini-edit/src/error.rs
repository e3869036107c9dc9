//! Error types for ini-edit

use std::fmt;

/// Result type for ini-edit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ini-edit operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A physical line that is neither header, comment, blank, nor a valid
    /// key-value pair. Only returned when the options demand strict parsing.
    #[error("Invalid line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// Raised by the value getters when the requested key is absent.
    /// Find-or-create accessors never produce this.
    #[error("Key not found: {key:?}")]
    KeyNotFound { key: String },

    /// The stored string could not be converted to the requested type.
    #[error("Cannot convert value {value:?} of key {key:?} to {target}: {kind}")]
    TypeConversion {
        key: String,
        value: String,
        target: &'static str,
        kind: ConversionKind,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a typed value conversion failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// The string is not a valid representation of the target type.
    InvalidFormat,
    /// The value parses numerically but does not fit the target width.
    Overflow,
    /// The target type does not support conversion from strings.
    Unsupported,
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "not a valid representation"),
            Self::Overflow => write!(f, "value out of range"),
            Self::Unsupported => write!(f, "unsupported target type"),
        }
    }
}
