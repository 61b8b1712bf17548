//! Authentication Flow Coordinator
//!
//! This example shows a flow coordinator that owns a state machine and reacts
//! to committed transitions through an observer.
//!
//! Key concepts:
//! - Multi-source transitions with names and handlers
//! - Typed rejections the coordinator can match on
//! - Observers as the seam between the engine and the view layer
//!
//! Run with: cargo run --example auth_flow

use turnstile::builder::named_transition;
use turnstile::{state_enum, BuildError, StateMachine, StateMachineBuilder, TransitionError};

state_enum! {
    pub enum Route {
        Entry,
        Authentication,
        Registration,
        Main,
    }
}

struct FlowCoordinator {
    machine: StateMachine<Route>,
}

impl FlowCoordinator {
    fn new() -> Result<Self, BuildError> {
        let machine = StateMachineBuilder::new()
            .initial(Route::Entry)
            .transitions(vec![
                named_transition(
                    "login",
                    [Route::Entry, Route::Registration],
                    Route::Authentication,
                )?
                .with_handler(|| println!("  [handler] preparing login form")),
                named_transition(
                    "register",
                    [Route::Entry, Route::Authentication],
                    Route::Registration,
                )?
                .with_handler(|| println!("  [handler] preparing registration form")),
                named_transition(
                    "loggedIn",
                    [Route::Authentication, Route::Registration],
                    Route::Main,
                )?
                .with_handler(|| println!("  [handler] loading home screen")),
            ])
            .observer(|from: &Route, to: &Route, name: Option<&str>| {
                println!(
                    "  [view] {from} -> {to} ({})",
                    name.unwrap_or("unnamed")
                );
            })
            .strict(true)
            .build()?;

        Ok(Self { machine })
    }

    fn navigate(&mut self, route: Route) {
        println!("navigate to {route}");
        match self.machine.send(route) {
            Ok(_) => {}
            Err(TransitionError::InvalidCurrentState { current }) => {
                println!("  [error] {current} is a dead end");
            }
            Err(TransitionError::InvalidTransition { from, to }) => {
                println!("  [error] cannot go from {from} to {to}");
            }
            Err(error @ TransitionError::GuardRejected { .. }) => {
                println!("  [error] {error}");
            }
        }
    }
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Authentication Flow ===\n");

    let mut coordinator = FlowCoordinator::new()?;

    coordinator.navigate(Route::Main);
    coordinator.navigate(Route::Registration);
    coordinator.navigate(Route::Authentication);
    coordinator.navigate(Route::Main);
    coordinator.navigate(Route::Entry);

    let path: Vec<String> = coordinator
        .machine
        .history()
        .get_path()
        .iter()
        .map(|route| route.to_string())
        .collect();
    println!("\nJourney: {}", path.join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
