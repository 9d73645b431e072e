//! Error types for optional values

use thiserror::Error;

use crate::diagnostic::{creation_message, DiagnosticConfig, NOT_PRESENT};
use crate::SentinelKind;

/// Core optval errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalError {
    // Access errors
    #[error("{}", NOT_PRESENT)]
    NotPresent,

    // Construction errors
    #[error("{}", creation_message(SentinelKind::Nullish, &DiagnosticConfig::default()))]
    Nullish,

    #[error("{}", creation_message(SentinelKind::Null, &DiagnosticConfig::default()))]
    Null,

    #[error("{}", creation_message(SentinelKind::Undefined, &DiagnosticConfig::default()))]
    Undefined,
}

impl OptionalError {
    /// Construction error for a rejected category
    pub fn rejected(kind: SentinelKind) -> Self {
        match kind {
            SentinelKind::Nullish => OptionalError::Nullish,
            SentinelKind::Null => OptionalError::Null,
            SentinelKind::Undefined => OptionalError::Undefined,
        }
    }

    /// Rejected category, `None` for `NotPresent`
    pub fn kind(&self) -> Option<SentinelKind> {
        match self {
            OptionalError::NotPresent => None,
            OptionalError::Nullish => Some(SentinelKind::Nullish),
            OptionalError::Null => Some(SentinelKind::Null),
            OptionalError::Undefined => Some(SentinelKind::Undefined),
        }
    }

    /// Did this come from a factory rather than an access?
    pub fn is_construction(&self) -> bool {
        self.kind().is_some()
    }

    /// Render with a non-default diagnostic configuration
    pub fn message_with(&self, config: &DiagnosticConfig) -> String {
        match self.kind() {
            Some(kind) => creation_message(kind, config),
            None => NOT_PRESENT.to_string(),
        }
    }
}

/// Result type for optval operations
pub type OptionalResult<T> = Result<T, OptionalError>;
