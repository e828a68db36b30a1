//! Errors raised while the host machine processes an event.

use crate::form::FormError;
use thiserror::Error;

/// Errors that can occur while processing an event.
///
/// Any error leaves the machine's state and context exactly as they were
/// before the event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Action '{action}' failed: {reason}")]
    ActionFailed { action: String, reason: String },

    #[error("State '{0}' has no state node")]
    UnknownState(String),
}
