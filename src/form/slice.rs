//! The form slice bundle.

use super::actions::FormActions;
use super::config::FormConfig;
use super::context::FormContext;
use super::error::FormError;
use super::events::{AsFormEvent, FormEvent, FormEventKind, FormEvents};
use super::handlers::FormHandlers;
use super::key::FormKey;
use super::selectors::FormSelectors;
use super::state::FormState;
use crate::core::{FieldName, State};
use crate::machine::{Dispatch, MachineEvent, StateNode, TransitionRule};
use std::sync::Arc;
use tracing::debug;

/// Everything generated for one keyed form: its initial state, event
/// constructors, reducers, selectors, state-node augmenter and handler
/// binder.
///
/// # Example
///
/// ```rust
/// use formslice::form::{create_form, FormConfig, FormContext, SharedContext};
///
/// let login = create_form(
///     "loginForm",
///     FormConfig::<String>::builder()
///         .field("username", "")
///         .field("password", "")
///         .build()
///         .unwrap(),
/// )
/// .unwrap();
///
/// let context = SharedContext::new().with_slice(&login).unwrap();
/// assert_eq!(context.form(login.key()), Some(login.initial_context()));
/// ```
#[derive(Clone, Debug)]
pub struct FormSlice<F: FieldName> {
    key: FormKey,
    config: Arc<FormConfig<F>>,
    initial_context: FormState<F>,
    events: FormEvents<F>,
    actions: FormActions<F>,
    selectors: FormSelectors<F>,
}

/// Generate the slice for `config` under `key`.
pub fn create_form<F: FieldName>(
    key: impl Into<String>,
    config: FormConfig<F>,
) -> Result<FormSlice<F>, FormError> {
    Ok(FormSlice::new(FormKey::new(key)?, config))
}

impl<F: FieldName> FormSlice<F> {
    pub fn new(key: FormKey, config: FormConfig<F>) -> Self {
        let config = Arc::new(config);
        debug!(form = %key, fields = config.initial_values().len(), "created form slice");
        Self {
            initial_context: FormState::initial(&config),
            events: FormEvents::new(key.clone(), config.fields().cloned()),
            actions: FormActions::new(key.clone(), Arc::clone(&config)),
            selectors: FormSelectors::new(key.clone()),
            config,
            key,
        }
    }

    pub fn key(&self) -> &FormKey {
        &self.key
    }

    pub fn config(&self) -> &FormConfig<F> {
        &self.config
    }

    /// State to embed under [`key`](Self::key) in the host context.
    pub fn initial_context(&self) -> &FormState<F> {
        &self.initial_context
    }

    pub fn events(&self) -> &FormEvents<F> {
        &self.events
    }

    pub fn actions(&self) -> &FormActions<F> {
        &self.actions
    }

    pub fn selectors(&self) -> &FormSelectors<F> {
        &self.selectors
    }

    /// Wire this slice's CHANGE, BLUR, FOCUS and RESET events into `node`.
    ///
    /// Rules already present in `node` win over the generated ones for the
    /// same event type. SUBMIT is left to the caller.
    pub fn create_state<S, C, E>(&self, node: StateNode<S, C, E>) -> StateNode<S, C, E>
    where
        S: State,
        C: FormContext<F> + Clone + 'static,
        E: AsFormEvent<F> + MachineEvent + 'static,
    {
        StateNode::new()
            .on(
                self.events.event_type(FormEventKind::Change),
                TransitionRule::new().action(self.actions.assign_change_action()),
            )
            .on(
                self.events.event_type(FormEventKind::Blur),
                TransitionRule::new().action(self.actions.assign_blur_action()),
            )
            .on(
                self.events.event_type(FormEventKind::Focus),
                TransitionRule::new().action(self.actions.assign_focus_action()),
            )
            .on(
                self.events.event_type(FormEventKind::Reset),
                TransitionRule::new().action(self.actions.reset_action()),
            )
            .with_overrides(node)
    }

    /// Derive UI handlers from the current context.
    pub fn make_handlers<C, E>(
        &self,
        context: &C,
        dispatch: Dispatch<E>,
    ) -> Result<FormHandlers<F, E>, FormError>
    where
        C: FormContext<F>,
        E: From<FormEvent<F>>,
    {
        let state = context
            .form(&self.key)
            .ok_or_else(|| FormError::MissingSlice {
                key: self.key.to_string(),
            })?;
        Ok(FormHandlers::new(
            state.clone(),
            self.events.clone(),
            dispatch,
        ))
    }
}
