//! Minimal synchronous host machine.
//!
//! Form slices only need a host that routes events by type to transition
//! rules and owns the shared context. This module provides one:
//!
//! - **State nodes**: per-state tables from event type to candidate rules
//! - **Transition rules**: optional guard, optional target, ordered actions
//! - **Actions**: pure functions returning a replacement context
//! - **Machine**: processes one event at a time and records history
//!
//! Asynchronous side effects are not run here. A host that needs them
//! reacts to the machine's state and reports back with further events.

mod action;
mod error;
mod event;
mod machine;
mod node;

pub use action::{Action, ActionFn, TransitionRule};
pub use error::MachineError;
pub use event::{Dispatch, MachineEvent};
pub use machine::{Machine, SendOutcome};
pub use node::StateNode;
