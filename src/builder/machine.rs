//! Builder for host machines.

use crate::builder::error::BuildError;
use crate::core::{FieldName, State};
use crate::form::{FormContext, FormKey, FormSlice};
use crate::machine::{Machine, MachineEvent, StateNode};
use std::collections::BTreeSet;
use tracing::debug;

type SliceCheck<C> = Box<dyn Fn(&C) -> bool>;

/// Builder for constructing host machines with a fluent API.
///
/// `build` checks the state graph before handing out a [`Machine`]: every
/// state is defined once, the initial state and every rule target have a
/// node, and every registered form slice has a unique key and is present
/// in the context.
///
/// # Example
///
/// ```rust
/// use formslice::builder::MachineBuilder;
/// use formslice::form::{create_form, FormConfig, FormEvent, SharedContext};
/// use formslice::machine::{StateNode, TransitionRule};
/// use formslice::state_enum;
///
/// state_enum! {
///     enum Page {
///         Editing,
///         Saving,
///     }
/// }
///
/// let post = create_form(
///     "post",
///     FormConfig::<String>::builder().field("title", "").build().unwrap(),
/// )
/// .unwrap();
///
/// let editing = post.create_state(StateNode::new().on(
///     "post.SUBMIT",
///     TransitionRule::new()
///         .guard(post.selectors().valid_guard())
///         .target(Page::Saving),
/// ));
///
/// let machine = MachineBuilder::<Page, SharedContext<String>, FormEvent<String>>::new()
///     .initial(Page::Editing)
///     .context(SharedContext::new().with_slice(&post).unwrap())
///     .form(&post)
///     .state(Page::Editing, editing)
///     .state(Page::Saving, StateNode::new())
///     .build()
///     .unwrap();
///
/// assert!(machine.matches(&Page::Editing));
/// ```
pub struct MachineBuilder<S: State, C, E> {
    initial: Option<S>,
    context: Option<C>,
    states: Vec<(S, StateNode<S, C, E>)>,
    forms: Vec<(FormKey, SliceCheck<C>)>,
}

impl<S: State, C: Clone, E: MachineEvent> MachineBuilder<S, C, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            states: Vec::new(),
            forms: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the initial context (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Add the node for `state`.
    pub fn state(mut self, state: S, node: StateNode<S, C, E>) -> Self {
        self.states.push((state, node));
        self
    }

    /// Register a form slice the machine hosts.
    pub fn form<F>(mut self, slice: &FormSlice<F>) -> Self
    where
        F: FieldName,
        C: FormContext<F> + 'static,
    {
        let key = slice.key().clone();
        let probe = key.clone();
        self.forms
            .push((key, Box::new(move |context: &C| context.form(&probe).is_some())));
        self
    }

    /// Build the machine.
    /// Returns an error if required fields are missing or the graph is
    /// inconsistent.
    pub fn build(self) -> Result<Machine<S, C, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        for (index, (state, _)) in self.states.iter().enumerate() {
            if self.states[..index].iter().any(|(seen, _)| seen == state) {
                return Err(BuildError::DuplicateState {
                    state: state.name().to_string(),
                });
            }
        }

        let defined = |state: &S| self.states.iter().any(|(candidate, _)| candidate == state);

        if !defined(&initial) {
            return Err(BuildError::UnknownInitialState {
                state: initial.name().to_string(),
            });
        }

        for (state, node) in &self.states {
            if let Some((event, target)) = node.targets().find(|(_, target)| !defined(target)) {
                return Err(BuildError::UnknownTarget {
                    state: state.name().to_string(),
                    event: event.to_string(),
                    target: target.name().to_string(),
                });
            }
        }

        let mut keys = BTreeSet::new();
        for (key, present) in &self.forms {
            if !keys.insert(key) {
                return Err(BuildError::DuplicateFormKey {
                    key: key.to_string(),
                });
            }
            if !present(&context) {
                return Err(BuildError::MissingFormSlice {
                    key: key.to_string(),
                });
            }
        }

        debug!(
            initial = initial.name(),
            states = self.states.len(),
            forms = self.forms.len(),
            "built machine"
        );
        Ok(Machine::new(initial, context, self.states))
    }
}

impl<S: State, C: Clone, E: MachineEvent> Default for MachineBuilder<S, C, E> {
    fn default() -> Self {
        Self::new()
    }
}
