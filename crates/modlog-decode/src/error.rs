//! Decode errors - typed, per-entry failures

use modlog_core::{ActionType, Snowflake};
use thiserror::Error;

/// A value was present but could not be turned into the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoerceError {
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{value} is out of range for {expected}")]
    OutOfRange { expected: &'static str, value: String },

    #[error("{expected} is missing field `{field}`")]
    MissingField {
        expected: &'static str,
        field: &'static str,
    },
}

/// Failure to decode a single audit entry
///
/// An unknown action kind is deliberately not represented here; it decodes to
/// `AuditLogData::Unknown`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{action} entry is missing required field `{field}`")]
    MissingRequiredField {
        action: ActionType,
        field: &'static str,
    },

    #[error("field `{field}` has an unexpected shape: {source}")]
    TypeMismatch {
        field: &'static str,
        #[source]
        source: CoerceError,
    },

    #[error("{table} side table has no entry for {id}")]
    UnresolvedReference { table: &'static str, id: Snowflake },
}

impl DecodeError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingRequiredField { .. } => "MISSING_REQUIRED_FIELD",
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::UnresolvedReference { .. } => "UNRESOLVED_REFERENCE",
        }
    }

    /// Wire field the error is about, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingRequiredField { field, .. } | Self::TypeMismatch { field, .. } => {
                Some(*field)
            }
            Self::UnresolvedReference { .. } => None,
        }
    }

    pub(crate) fn missing(action: ActionType, field: &'static str) -> Self {
        Self::MissingRequiredField { action, field }
    }

    pub(crate) fn mismatch(field: &'static str, source: CoerceError) -> Self {
        Self::TypeMismatch { field, source }
    }
}

/// Result type for decoders
pub type DecodeResult<T> = Result<T, DecodeError>;
