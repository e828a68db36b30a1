//! Pure reducers for one form slice.
//!
//! Each reducer reads the slice stored under its key and returns the
//! replacement state. It never touches other entries of the context. The
//! `*_action` constructors wrap the reducers as host machine [`Action`]s that
//! write the replacement back into a cloned context.

use super::config::FormConfig;
use super::context::FormContext;
use super::error::FormError;
use super::events::{AsFormEvent, FormEvent, FormEventKind};
use super::key::FormKey;
use super::state::FormState;
use crate::core::FieldName;
use crate::machine::{Action, MachineEvent};
use std::sync::Arc;
use tracing::{trace, warn};

type Reducer<F, C> =
    fn(&FormActions<F>, &C, &FormEvent<F>) -> Result<FormState<F>, FormError>;

/// The five reducers of one form slice.
#[derive(Clone, Debug)]
pub struct FormActions<F: FieldName> {
    key: FormKey,
    config: Arc<FormConfig<F>>,
}

impl<F: FieldName> FormActions<F> {
    pub(crate) fn new(key: FormKey, config: Arc<FormConfig<F>>) -> Self {
        Self { key, config }
    }

    pub fn key(&self) -> &FormKey {
        &self.key
    }

    /// CHANGE: write the value and recompute errors. Touched is unchanged.
    pub fn assign_change<C: FormContext<F>>(
        &self,
        context: &C,
        event: &FormEvent<F>,
    ) -> Result<FormState<F>, FormError> {
        match event {
            FormEvent::Change { key, name, value } if *key == self.key => {
                self.assign_value(context, name, value)
            }
            other => Err(self.mismatch(FormEventKind::Change, other)),
        }
    }

    /// BLUR: same effect as CHANGE. Blur does not mark the field touched.
    pub fn assign_blur<C: FormContext<F>>(
        &self,
        context: &C,
        event: &FormEvent<F>,
    ) -> Result<FormState<F>, FormError> {
        match event {
            FormEvent::Blur { key, name, value } if *key == self.key => {
                self.assign_value(context, name, value)
            }
            other => Err(self.mismatch(FormEventKind::Blur, other)),
        }
    }

    /// FOCUS: mark the field touched. Values and errors are unchanged.
    pub fn assign_focus<C: FormContext<F>>(
        &self,
        context: &C,
        event: &FormEvent<F>,
    ) -> Result<FormState<F>, FormError> {
        match event {
            FormEvent::Focus { key, name } if *key == self.key => {
                let current = self.current(context)?;
                self.check_field(name)?;
                Ok(current.with_touched(name.clone()))
            }
            other => Err(self.mismatch(FormEventKind::Focus, other)),
        }
    }

    /// SUBMIT: count the attempt. Nothing else changes.
    pub fn assign_submit<C: FormContext<F>>(
        &self,
        context: &C,
        event: &FormEvent<F>,
    ) -> Result<FormState<F>, FormError> {
        match event {
            FormEvent::Submit { key } if *key == self.key => {
                Ok(self.current(context)?.with_submit())
            }
            other => Err(self.mismatch(FormEventKind::Submit, other)),
        }
    }

    /// RESET: a fresh initial state built from the config.
    pub fn reset<C: FormContext<F>>(
        &self,
        context: &C,
        event: &FormEvent<F>,
    ) -> Result<FormState<F>, FormError> {
        match event {
            FormEvent::Reset { key } if *key == self.key => {
                self.current(context)?;
                Ok(FormState::initial(&self.config))
            }
            other => Err(self.mismatch(FormEventKind::Reset, other)),
        }
    }

    /// Route `event` to the reducer matching its kind.
    pub fn apply<C: FormContext<F>>(
        &self,
        context: &C,
        event: &FormEvent<F>,
    ) -> Result<FormState<F>, FormError> {
        match event.kind() {
            FormEventKind::Change => self.assign_change(context, event),
            FormEventKind::Blur => self.assign_blur(context, event),
            FormEventKind::Focus => self.assign_focus(context, event),
            FormEventKind::Submit => self.assign_submit(context, event),
            FormEventKind::Reset => self.reset(context, event),
        }
    }

    fn assign_value<C: FormContext<F>>(
        &self,
        context: &C,
        name: &F,
        value: &str,
    ) -> Result<FormState<F>, FormError> {
        let current = self.current(context)?;
        self.check_field(name)?;
        Ok(current.with_value(&self.config, name.clone(), value.to_string()))
    }

    fn current<'c, C: FormContext<F>>(&self, context: &'c C) -> Result<&'c FormState<F>, FormError> {
        context.form(&self.key).ok_or_else(|| {
            warn!(form = %self.key, "form slice missing from context");
            FormError::MissingSlice {
                key: self.key.to_string(),
            }
        })
    }

    fn check_field(&self, name: &F) -> Result<(), FormError> {
        if self.config.has_field(name) {
            return Ok(());
        }
        warn!(form = %self.key, field = %name, "ignoring event for undeclared field");
        Err(FormError::UnknownField {
            key: self.key.to_string(),
            field: name.to_string(),
        })
    }

    fn mismatch(&self, expected: FormEventKind, found: &FormEvent<F>) -> FormError {
        FormError::EventMismatch {
            expected: self.key.event_type(expected),
            found: found.event_type(),
        }
    }
}

impl<F: FieldName> FormActions<F> {
    pub fn assign_change_action<C, E>(&self) -> Action<C, E>
    where
        C: FormContext<F> + Clone + 'static,
        E: AsFormEvent<F> + MachineEvent + 'static,
    {
        self.assign("assignChangeToState", FormActions::assign_change::<C>)
    }

    pub fn assign_blur_action<C, E>(&self) -> Action<C, E>
    where
        C: FormContext<F> + Clone + 'static,
        E: AsFormEvent<F> + MachineEvent + 'static,
    {
        self.assign("assignBlurToState", FormActions::assign_blur::<C>)
    }

    pub fn assign_focus_action<C, E>(&self) -> Action<C, E>
    where
        C: FormContext<F> + Clone + 'static,
        E: AsFormEvent<F> + MachineEvent + 'static,
    {
        self.assign("assignFocusToState", FormActions::assign_focus::<C>)
    }

    pub fn assign_submit_action<C, E>(&self) -> Action<C, E>
    where
        C: FormContext<F> + Clone + 'static,
        E: AsFormEvent<F> + MachineEvent + 'static,
    {
        self.assign("assignSubmitToState", FormActions::assign_submit::<C>)
    }

    pub fn reset_action<C, E>(&self) -> Action<C, E>
    where
        C: FormContext<F> + Clone + 'static,
        E: AsFormEvent<F> + MachineEvent + 'static,
    {
        self.assign("reset", FormActions::reset::<C>)
    }

    fn assign<C, E>(&self, name: &'static str, reducer: Reducer<F, C>) -> Action<C, E>
    where
        C: FormContext<F> + Clone + 'static,
        E: AsFormEvent<F> + MachineEvent + 'static,
    {
        let actions = self.clone();
        Action::new(format!("{}.{}", self.key, name), move |context: &C, event: &E| {
            let form_event = event.as_form_event().ok_or_else(|| FormError::EventMismatch {
                expected: format!("{}.*", actions.key),
                found: event.event_type(),
            })?;
            let next = reducer(&actions, context, form_event)?;
            trace!(form = %actions.key, action = name, "assigned form state");

            let mut updated = context.clone();
            updated.replace_form(&actions.key, next)?;
            Ok(updated)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorMap;
    use crate::form::{FormEvents, SharedContext};

    struct Fixture {
        config: Arc<FormConfig<String>>,
        actions: FormActions<String>,
        events: FormEvents<String>,
        context: SharedContext<String>,
    }

    fn fixture() -> Fixture {
        let config = Arc::new(
            FormConfig::<String>::builder()
                .field("name", "")
                .field("email", "")
                .validate(|values| {
                    values
                        .iter()
                        .filter(|(_, v)| v.is_empty())
                        .map(|(k, _)| (k.clone(), "required".to_string()))
                        .collect::<ErrorMap<String>>()
                })
                .build()
                .unwrap(),
        );
        let key = FormKey::new("profile").unwrap();
        let mut context = SharedContext::new();
        context
            .insert_form(key.clone(), FormState::initial(&config))
            .unwrap();

        Fixture {
            actions: FormActions::new(key.clone(), Arc::clone(&config)),
            events: FormEvents::new(key, config.fields().cloned()),
            config,
            context,
        }
    }

    #[test]
    fn change_writes_value_and_recomputes_errors() {
        let f = fixture();
        let event = f.events.change("name", "Ada").unwrap();

        let next = f.actions.assign_change(&f.context, &event).unwrap();

        assert_eq!(next.value(&"name".into()), Some("Ada"));
        assert_eq!(next.error(&"name".into()), None);
        assert_eq!(next.error(&"email".into()), Some("required"));
        assert!(!next.touched().any());
    }

    #[test]
    fn blur_behaves_like_change() {
        let f = fixture();
        let change = f
            .actions
            .assign_change(&f.context, &f.events.change("email", "a@b.c").unwrap())
            .unwrap();
        let blur = f
            .actions
            .assign_blur(&f.context, &f.events.blur("email", "a@b.c").unwrap())
            .unwrap();

        assert_eq!(change, blur);
    }

    #[test]
    fn focus_marks_touched_only() {
        let f = fixture();
        let event = f.events.focus("email").unwrap();

        let next = f.actions.assign_focus(&f.context, &event).unwrap();
        let before = f.context.form(f.actions.key()).unwrap();

        assert!(next.is_touched(&"email".into()));
        assert!(!next.is_touched(&"name".into()));
        assert_eq!(next.values(), before.values());
        assert_eq!(next.errors(), before.errors());
    }

    #[test]
    fn submit_counts_attempts() {
        let f = fixture();
        let next = f
            .actions
            .assign_submit(&f.context, &f.events.submit())
            .unwrap();

        assert_eq!(next.submit_count(), 1);
    }

    #[test]
    fn reset_rebuilds_initial_state() {
        let mut f = fixture();
        let changed = f
            .actions
            .assign_change(&f.context, &f.events.change("name", "Ada").unwrap())
            .unwrap();
        f.context.replace_form(f.actions.key(), changed).unwrap();

        let next = f.actions.reset(&f.context, &f.events.reset()).unwrap();

        assert_eq!(next, FormState::initial(&f.config));
    }

    #[test]
    fn event_for_other_slice_is_rejected() {
        let f = fixture();
        let other = FormEvents::<String>::new(FormKey::new("other").unwrap(), ["name".to_string()]);

        let result = f.actions.assign_submit(&f.context, &other.submit());

        assert_eq!(
            result,
            Err(FormError::EventMismatch {
                expected: "profile.SUBMIT".to_string(),
                found: "other.SUBMIT".to_string(),
            })
        );
    }

    #[test]
    fn wrong_kind_is_rejected() {
        let f = fixture();
        let result = f.actions.assign_focus(&f.context, &f.events.reset());

        assert!(matches!(result, Err(FormError::EventMismatch { .. })));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let f = fixture();
        let event = FormEvent::Change {
            key: f.actions.key().clone(),
            name: "nickname".to_string(),
            value: "x".to_string(),
        };

        let result = f.actions.assign_change(&f.context, &event);

        assert!(matches!(result, Err(FormError::UnknownField { .. })));
    }

    #[test]
    fn missing_slice_is_rejected() {
        let f = fixture();
        let empty: SharedContext<String> = SharedContext::new();

        let result = f.actions.assign_submit(&empty, &f.events.submit());

        assert_eq!(
            result,
            Err(FormError::MissingSlice {
                key: "profile".to_string()
            })
        );
    }

    #[test]
    fn apply_routes_by_kind() {
        let f = fixture();
        let event = f.events.focus("name").unwrap();

        assert_eq!(
            f.actions.apply(&f.context, &event),
            f.actions.assign_focus(&f.context, &event)
        );
    }

    #[test]
    fn wrapped_action_replaces_only_its_entry() {
        let mut f = fixture();
        let other_key = FormKey::new("other").unwrap();
        f.context
            .insert_form(other_key.clone(), FormState::initial(&f.config))
            .unwrap();

        let action = f.actions.assign_submit_action::<SharedContext<String>, FormEvent<String>>();
        let updated = action.execute(&f.context, &f.events.submit()).unwrap();

        assert_eq!(updated.form(f.actions.key()).unwrap().submit_count(), 1);
        assert_eq!(updated.form(&other_key), f.context.form(&other_key));
        assert_eq!(action.name(), "profile.assignSubmitToState");
    }
}
