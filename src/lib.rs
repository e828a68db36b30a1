//! Formslice: keyed form slices for a host state machine
//!
//! Formslice follows the "pure core, imperative shell" approach. A form is
//! described once by a [`FormConfig`]; [`create_form`] turns it into a
//! [`FormSlice`] whose reducers, selectors and event constructors are all
//! pure. The host [`Machine`] owns the shared context and is the only place
//! state is replaced.
//!
//! # Core Concepts
//!
//! - **Slice**: one form's values, errors, touched flags and submit count,
//!   stored under a [`FormKey`] in the host context
//! - **Events**: `"<key>.CHANGE"`, `BLUR`, `FOCUS`, `SUBMIT` and `RESET`,
//!   namespaced so several forms can share one machine
//! - **Selectors**: valid, dirty and pristine, usable as transition guards
//! - **Handlers**: field bindings and submit/reset callbacks for a UI
//!
//! # Example
//!
//! ```rust
//! use formslice::core::ErrorMap;
//! use formslice::form::{create_form, FormConfig, FormEvent, SharedContext};
//! use formslice::machine::{StateNode, TransitionRule};
//! use formslice::{state_enum, MachineBuilder};
//!
//! state_enum! {
//!     enum LoginState {
//!         Editing,
//!         LoggingIn,
//!     }
//! }
//!
//! let login = create_form(
//!     "loginForm",
//!     FormConfig::<String>::builder()
//!         .field("username", "")
//!         .validate(|values| match values.get(&"username".to_string()) {
//!             Some(name) if !name.is_empty() => ErrorMap::new(),
//!             _ => ErrorMap::new().with("username".to_string(), "You must pass a username!".to_string()),
//!         })
//!         .build()
//!         .unwrap(),
//! )
//! .unwrap();
//!
//! let editing = login.create_state(
//!     StateNode::new()
//!         .on(
//!             "loginForm.SUBMIT",
//!             TransitionRule::new()
//!                 .guard(login.selectors().valid_guard())
//!                 .target(LoginState::LoggingIn),
//!         )
//!         .on(
//!             "loginForm.SUBMIT",
//!             TransitionRule::new().action(login.actions().assign_submit_action()),
//!         ),
//! );
//!
//! let mut machine = MachineBuilder::<LoginState, SharedContext<String>, FormEvent<String>>::new()
//!     .initial(LoginState::Editing)
//!     .context(SharedContext::new().with_slice(&login).unwrap())
//!     .form(&login)
//!     .state(LoginState::Editing, editing)
//!     .state(LoginState::LoggingIn, StateNode::new())
//!     .build()
//!     .unwrap();
//!
//! machine.send(login.events().submit()).unwrap();
//! assert!(machine.matches(&LoginState::Editing));
//!
//! machine.send(login.events().change("username", "ada").unwrap()).unwrap();
//! machine.send(login.events().submit()).unwrap();
//! assert!(machine.matches(&LoginState::LoggingIn));
//! ```

pub mod builder;
pub mod core;
pub mod form;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::{BuildError, MachineBuilder};
pub use crate::core::{ErrorMap, FieldName, Guard, State, StateHistory, StateTransition, Values};
pub use form::{
    create_form, FormConfig, FormContext, FormError, FormEvent, FormKey, FormSlice, FormState,
    SharedContext,
};
pub use machine::{Machine, MachineError, SendOutcome, StateNode, TransitionRule};
