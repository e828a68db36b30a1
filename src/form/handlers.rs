//! UI-facing handlers derived from a form slice.
//!
//! Handlers are a read-and-adapt layer: they snapshot the slice when built
//! and expose callbacks that dispatch namespaced events. Nothing here
//! changes state directly. Rebuild the handlers whenever the context
//! changes.

use super::error::FormError;
use super::events::{FormEvent, FormEvents};
use super::key::FormKey;
use super::state::FormState;
use crate::core::{BooleanMap, ErrorMap, FieldName, Values};
use crate::machine::Dispatch;
use std::fmt;
use tracing::trace;

/// The element that produced an input event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputTarget {
    pub value: String,
}

/// Change or blur event from an input control, shaped `{target: {value}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputEvent {
    pub target: InputTarget,
}

impl InputEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: InputTarget {
                value: value.into(),
            },
        }
    }
}

/// Submit event from a form control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress the control's default submit behavior.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Everything an input control needs for one field.
pub struct FieldBinding<F, E> {
    pub name: F,
    pub value: String,
    pub error: Option<String>,
    pub touched: bool,
    key: FormKey,
    dispatch: Dispatch<E>,
}

impl<F, E> FieldBinding<F, E>
where
    F: FieldName,
    E: From<FormEvent<F>>,
{
    /// Dispatch CHANGE with the input's current value.
    pub fn on_change(&self, event: &InputEvent) {
        self.send(FormEvent::Change {
            key: self.key.clone(),
            name: self.name.clone(),
            value: event.target.value.clone(),
        });
    }

    /// Dispatch BLUR with the input's current value.
    pub fn on_blur(&self, event: &InputEvent) {
        self.send(FormEvent::Blur {
            key: self.key.clone(),
            name: self.name.clone(),
            value: event.target.value.clone(),
        });
    }

    /// Dispatch FOCUS. The input event is not inspected.
    pub fn on_focus(&self, _event: &InputEvent) {
        self.send(FormEvent::Focus {
            key: self.key.clone(),
            name: self.name.clone(),
        });
    }

    fn send(&self, event: FormEvent<F>) {
        (self.dispatch)(E::from(event));
    }
}

impl<F: fmt::Debug, E> fmt::Debug for FieldBinding<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("error", &self.error)
            .field("touched", &self.touched)
            .finish_non_exhaustive()
    }
}

/// Handler bundle for one slice, derived from a context snapshot.
pub struct FormHandlers<F: FieldName, E> {
    state: FormState<F>,
    events: FormEvents<F>,
    dispatch: Dispatch<E>,
}

impl<F, E> FormHandlers<F, E>
where
    F: FieldName,
    E: From<FormEvent<F>>,
{
    pub(crate) fn new(state: FormState<F>, events: FormEvents<F>, dispatch: Dispatch<E>) -> Self {
        Self {
            state,
            events,
            dispatch,
        }
    }

    /// Bind a field to an input control.
    pub fn register(&self, name: impl Into<F>) -> Result<FieldBinding<F, E>, FormError> {
        let name = self.events.known_field(name.into())?;
        Ok(FieldBinding {
            value: self.state.value(&name).unwrap_or_default().to_string(),
            error: self.state.error(&name).map(str::to_string),
            touched: self.state.is_touched(&name),
            key: self.events.key().clone(),
            dispatch: self.dispatch.clone(),
            name,
        })
    }

    /// Prevent the default action, if an event is given, and dispatch SUBMIT.
    pub fn on_submit(&self, event: Option<&mut SubmitEvent>) {
        if let Some(event) = event {
            event.prevent_default();
        }
        trace!(form = %self.events.key(), "submit requested");
        (self.dispatch)(E::from(self.events.submit()));
    }

    /// Dispatch RESET.
    pub fn reset(&self) {
        (self.dispatch)(E::from(self.events.reset()));
    }

    pub fn values(&self) -> &Values<F> {
        self.state.values()
    }

    pub fn errors(&self) -> &ErrorMap<F> {
        self.state.errors()
    }

    pub fn touched(&self) -> &BooleanMap<F> {
        self.state.touched()
    }

    pub fn submit_count(&self) -> u32 {
        self.state.submit_count()
    }
}

impl<F: FieldName, E> fmt::Debug for FormHandlers<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormHandlers")
            .field("key", self.events.key())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
