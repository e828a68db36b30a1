//! State trait for host machine states.
//!
//! Form slices do not own any machine state themselves. The host machine
//! moves between named states (for example "editing" and "submitting"),
//! and each of those states carries a [`StateNode`](crate::machine::StateNode)
//! that may be augmented with a form slice's transitions.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for host machine states.
///
/// All methods are pure. Use [`state_enum!`](crate::state_enum) to derive an
/// implementation for a plain enum.
///
/// # Example
///
/// ```rust
/// use formslice::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum CheckoutState {
///     Editing,
///     Submitting,
///     Done,
/// }
///
/// impl State for CheckoutState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Editing => "Editing",
///             Self::Submitting => "Submitting",
///             Self::Done => "Done",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Done)
///     }
/// }
///
/// assert!(!CheckoutState::Editing.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
