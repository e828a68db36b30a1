//! Events accepted by the host machine.

use std::sync::Arc;

/// Anything the host machine can route by event type.
pub trait MachineEvent {
    /// Event type used to look up transition rules, e.g. `"loginForm.CHANGE"`.
    fn event_type(&self) -> String;
}

/// Callback that hands an event to the host machine.
pub type Dispatch<E> = Arc<dyn Fn(E) + Send + Sync>;
