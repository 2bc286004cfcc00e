//! Error types for the GVAS library.

use crate::property::TypePath;
use crate::text::TextHistoryType;
use thiserror::Error;

/// Main error type for GVAS value conversions.
#[derive(Error, Debug)]
pub enum Error {
    /// `Base` text carried a namespace (only the empty namespace is supported)
    #[error("Unexpected text namespace: {0:?}")]
    UnexpectedNamespace(Option<String>),

    /// `ArgumentFormat` source format is not a `Base` text
    #[error("Malformed source format: expected Base text, got {0:?}")]
    MalformedSourceFormat(TextHistoryType),

    /// Template GUID is not one of the known localization templates
    #[error("Unknown template GUID: {0:?}")]
    UnknownTemplateGuid(Option<String>),

    /// `ArgumentFormat` pattern string is null
    #[error("Null pattern in argument format text")]
    NullPattern,

    /// Pattern references an argument that is not text
    #[error("Expected text argument at index {index}")]
    ExpectedTextArgument { index: usize },

    /// Pattern references an argument past the end of the argument list
    #[error("Argument index {index} out of range (count: {count})")]
    ArgumentIndexOutOfRange { index: usize, count: usize },

    /// Single entry of a simple text is null
    #[error("Null in simple text")]
    NullInSimpleText,

    /// Simple text holds more than one entry
    #[error("Expected single entry in simple text, got {0}")]
    TooManyEntries(usize),

    /// Text nesting exceeds the decoder limit
    #[error("Text nesting deeper than {0} levels")]
    RecursionLimit(usize),

    /// Property type path outside the known shapes
    #[error("Unknown type path: {0}")]
    UnknownTypePath(String),

    /// Unknown text history byte
    #[error("Unknown text history type: {0}")]
    UnknownHistoryType(u8),

    /// Unknown rounding mode byte
    #[error("Unknown rounding mode: {0}")]
    UnknownRoundingMode(u8),

    /// Key already holds a value of another shape
    #[error("Type mismatch for {key}: expected {expected}, got {actual}")]
    TypeMismatch {
        key: String,
        expected: TypePath,
        actual: TypePath,
    },

    /// Property collection bookkeeping is inconsistent
    #[error("Invalid property collection: {0}")]
    InvalidStructure(String),

    /// JSON (de)serialization error
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid structure error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidStructure(msg.into())
    }
}

/// Result type alias for GVAS operations.
pub type Result<T> = std::result::Result<T, Error>;
