//! Keyed form slices.
//!
//! [`create_form`] turns a key and a [`FormConfig`] into a [`FormSlice`]:
//!
//! - **Initial state**: the [`FormState`] to embed under the key
//! - **Events**: constructors for `"<key>.CHANGE"`, `BLUR`, `FOCUS`, `SUBMIT`, `RESET`
//! - **Actions**: pure reducers returning the replacement [`FormState`]
//! - **Selectors**: valid, dirty and pristine
//! - **`create_state`**: wires the slice's events into a host [`StateNode`]
//! - **`make_handlers`**: field bindings and submit/reset callbacks for a UI
//!
//! Several slices can share one context and one dispatch channel. The key
//! in every event type keeps them apart.
//!
//! [`StateNode`]: crate::machine::StateNode

mod actions;
mod config;
mod context;
mod error;
mod events;
mod handlers;
mod key;
mod selectors;
mod slice;
mod state;

pub use actions::FormActions;
pub use config::{FormConfig, FormConfigBuilder, ValidateFn};
pub use context::{FormContext, SharedContext};
pub use error::FormError;
pub use events::{AsFormEvent, FormEvent, FormEventKind, FormEvents, WireEvent};
pub use handlers::{FieldBinding, FormHandlers, InputEvent, InputTarget, SubmitEvent};
pub use key::FormKey;
pub use selectors::FormSelectors;
pub use slice::{create_form, FormSlice};
pub use state::FormState;
