//! Login Form
//!
//! This example wires a single login form into a host machine.
//!
//! Key concepts:
//! - Declaring a form with string field names and a validator
//! - Letting the slice generate CHANGE/BLUR/FOCUS/RESET handling
//! - Guarding SUBMIT on the form's validity
//! - Driving the machine through UI handlers and a dispatch queue
//!
//! Run with: cargo run --example login_form
//! Set RUST_LOG=formslice=trace to see every action.

use formslice::core::ErrorMap;
use formslice::form::{create_form, FormConfig, FormEvent, InputEvent, SharedContext, SubmitEvent};
use formslice::machine::{StateNode, TransitionRule};
use formslice::{state_enum, MachineBuilder};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum LoginState {
        Editing,
        LoggingIn,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Login Form ===\n");

    let config = FormConfig::<String>::builder()
        .field("username", "")
        .field("password", "")
        .validate(|values| match values.get(&"username".to_string()) {
            Some(name) if !name.is_empty() => ErrorMap::new(),
            _ => ErrorMap::new().with(
                "username".to_string(),
                "You must pass a username!".to_string(),
            ),
        })
        .require_field("password", |v| v.len() >= 8, "Password is too short")
        .build()?;
    let login = create_form("loginForm", config)?;

    let editing = login.create_state(
        StateNode::new()
            .on(
                "loginForm.SUBMIT",
                TransitionRule::new()
                    .guard(login.selectors().valid_guard())
                    .target(LoginState::LoggingIn),
            )
            .on(
                "loginForm.SUBMIT",
                TransitionRule::new().action(login.actions().assign_submit_action()),
            ),
    );

    let mut machine = MachineBuilder::<LoginState, SharedContext<String>, FormEvent<String>>::new()
        .initial(LoginState::Editing)
        .context(SharedContext::new().with_slice(&login)?)
        .form(&login)
        .state(LoginState::Editing, editing)
        .state(LoginState::LoggingIn, StateNode::new())
        .build()?;
    let dispatch = machine.dispatcher();

    println!("1. Submitting the empty form...");
    let handlers = login.make_handlers(machine.context(), dispatch.clone())?;
    handlers.on_submit(Some(&mut SubmitEvent::new()));
    machine.drain()?;
    println!("   State: {:?}", machine.current_state());

    let handlers = login.make_handlers(machine.context(), dispatch.clone())?;
    println!("   Submit attempts: {}", handlers.submit_count());
    for (field, message) in handlers.errors().iter() {
        println!("   {field}: {message}");
    }

    println!("\n2. Typing credentials...");
    let username = handlers.register("username")?;
    username.on_focus(&InputEvent::default());
    username.on_change(&InputEvent::new("ada"));
    let password = handlers.register("password")?;
    password.on_focus(&InputEvent::default());
    password.on_blur(&InputEvent::new("correct horse"));
    machine.drain()?;
    println!("   Dirty: {}", login.selectors().is_dirty(machine.context()));
    println!("   Valid: {}", login.selectors().is_valid(machine.context()));

    println!("\n3. Submitting again...");
    let handlers = login.make_handlers(machine.context(), dispatch)?;
    handlers.on_submit(None);
    machine.drain()?;
    println!("   State: {:?}", machine.current_state());

    println!("\n=== Complete ===");
    Ok(())
}
