//! Property-based tests for form slices.
//!
//! These tests use proptest to drive a slice through random event
//! sequences and check that its state stays consistent.

use chrono::Utc;
use formslice::core::{ErrorMap, StateHistory, StateTransition};
use formslice::form::{create_form, FormConfig, FormContext, FormEvent, FormSlice, SharedContext};
use formslice::machine::{Machine, StateNode, TransitionRule};
use formslice::state_enum;
use proptest::prelude::*;

state_enum! {
    enum Page {
        Editing,
        Sent,
    }
    final: [Sent]
}

const FIELDS: [&str; 2] = ["name", "email"];

#[derive(Clone, Debug)]
enum Op {
    Change(usize, String),
    Blur(usize, String),
    Focus(usize),
    Submit,
    Reset,
}

fn config() -> FormConfig<String> {
    FormConfig::<String>::builder()
        .field("name", "")
        .field("email", "")
        .validate(|values| {
            let mut errors = ErrorMap::new();
            if values.get(&"name".to_string()).map_or(true, |v| v.is_empty()) {
                errors = errors.with("name".to_string(), "You must pass a name".to_string());
            }
            if !values.get(&"email".to_string()).is_some_and(|v| v.contains('@')) {
                errors = errors.with("email".to_string(), "You must pass an email".to_string());
            }
            errors
        })
        .build()
        .unwrap()
}

fn setup() -> (FormSlice<String>, Machine<Page, SharedContext<String>, FormEvent<String>>) {
    let form = create_form("details", config()).unwrap();
    let editing = form.create_state(StateNode::new().on(
        "details.SUBMIT",
        TransitionRule::new().action(form.actions().assign_submit_action()),
    ));
    let context = SharedContext::new().with_slice(&form).unwrap();
    let machine = Machine::new(
        Page::Editing,
        context,
        vec![(Page::Editing, editing), (Page::Sent, StateNode::new())],
    );
    (form, machine)
}

fn event(form: &FormSlice<String>, op: &Op) -> FormEvent<String> {
    let events = form.events();
    match op {
        Op::Change(i, value) => events.change(FIELDS[*i], value.as_str()).unwrap(),
        Op::Blur(i, value) => events.blur(FIELDS[*i], value.as_str()).unwrap(),
        Op::Focus(i) => events.focus(FIELDS[*i]).unwrap(),
        Op::Submit => events.submit(),
        Op::Reset => events.reset(),
    }
}

fn run(ops: &[Op]) -> (FormSlice<String>, Machine<Page, SharedContext<String>, FormEvent<String>>) {
    let (form, mut machine) = setup();
    for op in ops {
        machine.send(event(&form, op)).unwrap();
    }
    (form, machine)
}

prop_compose! {
    fn arbitrary_value()(value in "[a-z@.]{0,8}") -> String {
        value
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..FIELDS.len(), arbitrary_value()).prop_map(|(i, v)| Op::Change(i, v)),
        (0..FIELDS.len(), arbitrary_value()).prop_map(|(i, v)| Op::Blur(i, v)),
        (0..FIELDS.len()).prop_map(Op::Focus),
        Just(Op::Submit),
        Just(Op::Reset),
    ]
}

proptest! {
    #[test]
    fn key_sets_never_change(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let (form, machine) = run(&ops);
        let state = machine.context().form(form.key()).unwrap();

        let initial: Vec<_> = form.config().fields().collect();
        prop_assert_eq!(state.values().keys().collect::<Vec<_>>(), initial.clone());
        prop_assert_eq!(state.touched().keys().collect::<Vec<_>>(), initial);
    }

    #[test]
    fn errors_always_match_validator(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let (form, machine) = run(&ops);
        let state = machine.context().form(form.key()).unwrap();

        prop_assert_eq!(state.errors(), &form.config().validate(state.values()));
    }

    #[test]
    fn selectors_agree_with_state(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let (form, machine) = run(&ops);
        let context = machine.context();
        let state = context.form(form.key()).unwrap();
        let selectors = form.selectors();

        prop_assert_eq!(selectors.is_valid(context), state.errors().is_empty());
        prop_assert_eq!(selectors.is_dirty(context), state.touched().any());
        prop_assert_eq!(selectors.is_pristine(context), !selectors.is_dirty(context));
    }

    #[test]
    fn focus_is_idempotent(
        ops in prop::collection::vec(arbitrary_op(), 0..10),
        field in 0..FIELDS.len(),
    ) {
        let (form, mut machine) = run(&ops);

        machine.send(event(&form, &Op::Focus(field))).unwrap();
        let once = machine.context().clone();
        machine.send(event(&form, &Op::Focus(field))).unwrap();

        prop_assert_eq!(machine.context(), &once);
    }

    #[test]
    fn submit_count_counts_submits(count in 0..10u32) {
        let ops = vec![Op::Submit; count as usize];
        let (form, machine) = run(&ops);

        let state = machine.context().form(form.key()).unwrap();
        prop_assert_eq!(state.submit_count(), count);
    }

    #[test]
    fn reset_restores_initial_state(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let (form, mut machine) = run(&ops);

        machine.send(form.events().reset()).unwrap();

        prop_assert_eq!(
            machine.context().form(form.key()),
            Some(form.initial_context())
        );
    }

    #[test]
    fn wire_shape_round_trips(ops in prop::collection::vec(arbitrary_op(), 1..5)) {
        let (form, _) = setup();
        for op in &ops {
            let event = event(&form, op);
            let wire = event.to_wire();
            prop_assert!(wire.event_type.starts_with("details."));
            prop_assert_eq!(FormEvent::from_wire(wire).unwrap(), event);
        }
    }

    #[test]
    fn history_record_is_pure(first in any::<bool>()) {
        let history = StateHistory::new();
        let (from, to) = if first {
            (Page::Editing, Page::Sent)
        } else {
            (Page::Sent, Page::Editing)
        };

        let new_history = history.record(StateTransition {
            from,
            to,
            event: "details.SUBMIT".to_string(),
            timestamp: Utc::now(),
        });

        prop_assert_eq!(history.transitions().len(), 0);
        prop_assert_eq!(new_history.transitions().len(), 1);
    }
}
