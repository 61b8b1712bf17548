//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - State declarations with `state_enum!`
//! - Draining commits from a channel observer
//!
//! Run with: cargo run --example traffic_light

use turnstile::builder::simple_transition;
use turnstile::{state_enum, BuildError, ChannelObserver, StateMachineBuilder};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn main() -> Result<(), BuildError> {
    println!("=== Traffic Light State Machine ===\n");

    let (observer, mut events) = ChannelObserver::new();

    let mut machine = StateMachineBuilder::new()
        .initial(TrafficLight::Red)
        .transitions(vec![
            simple_transition(TrafficLight::Red, TrafficLight::Green),
            simple_transition(TrafficLight::Green, TrafficLight::Yellow),
            simple_transition(TrafficLight::Yellow, TrafficLight::Red),
        ])
        .observer(observer)
        .build()?;

    println!("Initial state: {}", machine.current_state());

    for _ in 0..2 {
        for light in [TrafficLight::Green, TrafficLight::Yellow, TrafficLight::Red] {
            if let Err(error) = machine.send(light) {
                println!("rejected: {error}");
            }
        }
    }

    // Red cannot skip straight to Yellow.
    if let Err(error) = machine.send(TrafficLight::Yellow) {
        println!("rejected: {error}");
    }

    println!("\nCommitted transitions:");
    while let Ok(event) = events.try_recv() {
        println!("  {} -> {}", event.from, event.to);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
