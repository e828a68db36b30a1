//! Build errors for form configs and machines.

use thiserror::Error;

/// Errors that can occur when building form configs and host machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Field '{field}' is declared more than once")]
    DuplicateField { field: String },

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Context not specified. Call .context(ctx) before .build()")]
    MissingContext,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{state}' is defined more than once")]
    DuplicateState { state: String },

    #[error("Initial state '{state}' has no state node")]
    UnknownInitialState { state: String },

    #[error("State '{state}' targets undefined state '{target}' on '{event}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Form key '{key}' is registered more than once")]
    DuplicateFormKey { key: String },

    #[error("Form '{key}' is registered but missing from the context")]
    MissingFormSlice { key: String },
}
