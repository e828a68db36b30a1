//! State nodes: per-state transition tables.

use super::action::TransitionRule;
use std::collections::BTreeMap;
use std::fmt;

/// The transitions available while the host machine is in one state.
///
/// Maps an event type to its ordered candidate rules. When an event
/// arrives, the first rule whose guard passes fires.
///
/// # Example
///
/// ```rust
/// use formslice::machine::{StateNode, TransitionRule};
///
/// let node: StateNode<&str, u32, String> = StateNode::new()
///     .on("form.SUBMIT", TransitionRule::new().when(|c: &u32| *c > 0).target("pending"))
///     .on("form.SUBMIT", TransitionRule::new());
///
/// assert_eq!(node.rules("form.SUBMIT").len(), 2);
/// assert!(node.handles("form.SUBMIT"));
/// assert!(!node.handles("form.RESET"));
/// ```
pub struct StateNode<S, C, E> {
    on: BTreeMap<String, Vec<TransitionRule<S, C, E>>>,
}

impl<S, C, E> StateNode<S, C, E> {
    pub fn new() -> Self {
        Self { on: BTreeMap::new() }
    }

    /// Append a candidate rule for `event_type`.
    pub fn on(mut self, event_type: impl Into<String>, rule: TransitionRule<S, C, E>) -> Self {
        self.on.entry(event_type.into()).or_default().push(rule);
        self
    }

    /// Merge `overrides` into this node.
    ///
    /// For every event type `overrides` handles, its rules replace the ones
    /// already present here. All other entries are kept.
    pub fn with_overrides(mut self, overrides: StateNode<S, C, E>) -> Self {
        self.on.extend(overrides.on);
        self
    }

    pub fn handles(&self, event_type: &str) -> bool {
        self.on.contains_key(event_type)
    }

    /// Candidate rules for `event_type`, in priority order.
    pub fn rules(&self, event_type: &str) -> &[TransitionRule<S, C, E>] {
        self.on.get(event_type).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First rule for `event_type` whose guard passes in `context`.
    pub fn select(&self, event_type: &str, context: &C) -> Option<&TransitionRule<S, C, E>> {
        self.rules(event_type)
            .iter()
            .find(|rule| rule.is_enabled(context))
    }

    pub fn event_types(&self) -> impl Iterator<Item = &str> {
        self.on.keys().map(String::as_str)
    }

    /// Every target state named by any rule of this node, with its event.
    pub fn targets(&self) -> impl Iterator<Item = (&str, &S)> {
        self.on.iter().flat_map(|(event_type, rules)| {
            rules
                .iter()
                .filter_map(move |rule| rule.target_state().map(|t| (event_type.as_str(), t)))
        })
    }
}

impl<S, C, E> Default for StateNode<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone, C, E> Clone for StateNode<S, C, E> {
    fn clone(&self) -> Self {
        Self {
            on: self.on.clone(),
        }
    }
}

impl<S, C, E> fmt::Debug for StateNode<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateNode")
            .field("on", &self.on.keys().collect::<Vec<_>>())
            .finish()
    }
}
