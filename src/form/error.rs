//! Usage errors raised by form slices.
//!
//! Validation messages are not errors: they live in the slice's
//! [`ErrorMap`](crate::core::ErrorMap). The variants below signal misuse of
//! the slice API, such as naming a field the form never declared.

use thiserror::Error;

/// Errors that can occur when building or driving a form slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Form key '{key}' is invalid: {reason}")]
    InvalidKey { key: String, reason: &'static str },

    #[error("Field '{field}' is not declared by form '{key}'")]
    UnknownField { key: String, field: String },

    #[error("Form '{key}' is not present in the shared context")]
    MissingSlice { key: String },

    #[error("Form '{key}' is already present in the shared context")]
    DuplicateKey { key: String },

    #[error("Expected event '{expected}', got '{found}'")]
    EventMismatch { expected: String, found: String },

    #[error("Event type '{0}' is not of the form '<key>.<ACTION>'")]
    MalformedEventType(String),

    #[error("Event '{event_type}' is missing its '{field}' payload")]
    MissingPayload {
        event_type: String,
        field: &'static str,
    },
}
