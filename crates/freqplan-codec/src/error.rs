//! Codec error types.
//!
//! Every decode failure is reported as a single [`CodecError`] carrying the
//! path of the offending node (`channels[4].data-rate.index`, `lbt`, `$` for
//! the root). The first fault found aborts the decode. No partially built
//! plan is ever returned alongside an error.

use thiserror::Error;

/// Errors produced while decoding or encoding a frequency plan.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The document does not have the expected mapping/sequence shape, or
    /// contains a key that does not belong at that level.
    #[error("structural error at {path}: {detail}")]
    Structural {
        /// Path of the offending node.
        path: String,
        /// What was wrong with its shape.
        detail: String,
    },

    /// The document text is not valid YAML, or its merge keys cannot be
    /// expanded.
    #[error("YAML syntax error: {0}")]
    Syntax(#[source] serde_yaml::Error),

    /// The declared band is not in the registry.
    #[error("unknown band {band:?}")]
    UnknownBand {
        /// The identifier the document declared.
        band: String,
    },

    /// A required field is absent or null.
    #[error("missing required field {path}")]
    MissingField {
        /// Path of the absent field.
        path: String,
    },

    /// A field is present but holds the wrong kind of value.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Path of the offending field.
        path: String,
        /// Kind of value the field requires.
        expected: &'static str,
        /// Kind (and value, for scalars) actually present.
        found: String,
    },

    /// Rendering the encoded document to text failed.
    #[error("YAML emit error: {0}")]
    Yaml(#[source] serde_yaml::Error),
}

impl CodecError {
    /// Whether this error reports a document shape fault rather than a
    /// field-level one.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural { .. } | Self::Syntax(_))
    }

    /// Path of the offending node, when the error is tied to one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Structural { path, .. }
            | Self::MissingField { path }
            | Self::TypeMismatch { path, .. } => Some(path),
            Self::UnknownBand { .. } => Some("band"),
            Self::Syntax(_) | Self::Yaml(_) => None,
        }
    }
}

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
