//! Accumulating field checks for form validators.
//!
//! A form's validator maps the current values to an [`ErrorMap`]. Instead of
//! writing that function by hand, a form can be given a list of checks built
//! on Stillwater's `Validation` type. Every check runs on every validation
//! pass, all failures are collected, and the first message reported for each
//! field ends up in the error map.
//!
//! # Example
//!
//! ```rust
//! use formslice::form::FormConfig;
//!
//! let config = FormConfig::<String>::builder()
//!     .field("username", "")
//!     .field("password", "")
//!     .require_field("username", |v| !v.is_empty(), "You must pass a username!")
//!     .require_field("password", |v| v.len() >= 8, "Password is too short")
//!     .build()
//!     .unwrap();
//!
//! let errors = config.validate(config.initial_values());
//! assert_eq!(errors.len(), 2);
//! ```
//!
//! [`ErrorMap`]: crate::core::ErrorMap

mod checks;

pub use checks::{field_check, into_error_map, run_checks, FieldCheck, FieldError};
