//! Details Form
//!
//! This example hosts two forms in one machine alongside a non-form event.
//!
//! Key concepts:
//! - Declaring field names with `form_fields!`
//! - Wrapping form events in the host's own event type
//! - Namespaced events keeping two slices apart
//! - Reset restoring a slice to its initial state
//!
//! Run with: cargo run --example details_form

use formslice::core::ErrorMap;
use formslice::form::{create_form, AsFormEvent, FormConfig, FormContext, FormEvent, SharedContext};
use formslice::machine::{MachineEvent, StateNode, TransitionRule};
use formslice::{form_fields, state_enum, MachineBuilder};
use tracing_subscriber::EnvFilter;

form_fields! {
    enum Field {
        Name => "name",
        Email => "email",
        Street => "street",
        City => "city",
    }
}

state_enum! {
    enum Checkout {
        GettingDetails,
        Pending,
        Complete,
    }
    final: [Complete]
}

#[derive(Clone, Debug)]
enum AppEvent {
    Form(FormEvent<Field>),
    PaymentConfirmed,
}

impl From<FormEvent<Field>> for AppEvent {
    fn from(event: FormEvent<Field>) -> Self {
        Self::Form(event)
    }
}

impl AsFormEvent<Field> for AppEvent {
    fn as_form_event(&self) -> Option<&FormEvent<Field>> {
        match self {
            Self::Form(event) => Some(event),
            Self::PaymentConfirmed => None,
        }
    }
}

impl MachineEvent for AppEvent {
    fn event_type(&self) -> String {
        match self {
            Self::Form(event) => event.event_type(),
            Self::PaymentConfirmed => "PAYMENT_CONFIRMED".to_string(),
        }
    }
}

fn required(values: &formslice::Values<Field>, fields: &[Field]) -> ErrorMap<Field> {
    fields
        .iter()
        .filter(|field| values.get(field).map_or(true, |v| v.is_empty()))
        .map(|field| (*field, format!("You must pass a {field}")))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Details Form ===\n");

    let details = create_form(
        "details",
        FormConfig::<Field>::builder()
            .field(Field::Name, "")
            .field(Field::Email, "")
            .validate(|values| required(values, &[Field::Name, Field::Email]))
            .build()?,
    )?;
    let address = create_form(
        "address",
        FormConfig::<Field>::builder()
            .field(Field::Street, "")
            .field(Field::City, "")
            .validate(|values| required(values, &[Field::Street, Field::City]))
            .build()?,
    )?;

    let details_valid = details.selectors().valid_guard::<SharedContext<Field>>();
    let address_valid = address.selectors().valid_guard::<SharedContext<Field>>();
    let both_valid = move |ctx: &SharedContext<Field>| details_valid.check(ctx) && address_valid.check(ctx);

    let getting_details = address.create_state(details.create_state(
        StateNode::new()
            .on(
                "details.SUBMIT",
                TransitionRule::new().when(both_valid).target(Checkout::Pending),
            )
            .on(
                "details.SUBMIT",
                TransitionRule::new().action(details.actions().assign_submit_action()),
            ),
    ));

    let mut machine = MachineBuilder::<Checkout, SharedContext<Field>, AppEvent>::new()
        .initial(Checkout::GettingDetails)
        .context(
            SharedContext::new()
                .with_slice(&details)?
                .with_slice(&address)?,
        )
        .form(&details)
        .form(&address)
        .state(Checkout::GettingDetails, getting_details)
        .state(
            Checkout::Pending,
            StateNode::new().on(
                "PAYMENT_CONFIRMED",
                TransitionRule::new().target(Checkout::Complete),
            ),
        )
        .state(Checkout::Complete, StateNode::new())
        .build()?;

    println!("1. Filling the details form...");
    machine.send(details.events().change(Field::Name, "Ada")?.into())?;
    machine.send(details.events().change(Field::Email, "ada@example.com")?.into())?;
    println!("   details valid: {}", details.selectors().is_valid(machine.context()));
    println!("   address valid: {}", address.selectors().is_valid(machine.context()));

    println!("\n2. Submitting with an empty address...");
    machine.send(details.events().submit().into())?;
    println!("   State: {:?}", machine.current_state());

    println!("\n3. Typing and resetting the address...");
    machine.send(address.events().change(Field::City, "London")?.into())?;
    machine.send(address.events().reset().into())?;
    let unchanged = machine.context().form(address.key()) == Some(address.initial_context());
    println!("   address back to initial: {unchanged}");

    println!("\n4. Completing the address and submitting...");
    machine.send(address.events().change(Field::Street, "1 Analytical Way")?.into())?;
    machine.send(address.events().change(Field::City, "London")?.into())?;
    machine.send(details.events().submit().into())?;
    machine.send(AppEvent::PaymentConfirmed)?;
    println!("   State: {:?}", machine.current_state());
    println!("   Path: {:?}", machine.history().get_path());

    println!("\n=== Complete ===");
    Ok(())
}
