//! Builder API for host machine construction.
//!
//! This module provides a validating machine builder and macros for
//! declaring host states and form field names with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::MachineBuilder;
