//! Core types shared by form slices and the host machine.
//!
//! This module contains the pure building blocks:
//! - Field-keyed maps for values, errors and touched flags
//! - Host machine states via the `State` trait
//! - Guard predicates over the machine context
//! - Immutable state history
//!
//! Nothing in this module performs side effects.

mod field;
mod guard;
mod history;
mod state;

pub use field::{BooleanMap, ErrorMap, FieldMap, FieldName, Values};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
