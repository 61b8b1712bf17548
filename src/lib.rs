//! Turnstile: a synchronous finite-state transition engine.
//!
//! A machine tracks one current state and lets it change only through a
//! declarative table of permitted transitions. Each transition names the set of
//! states it may fire from, the single state it leads to, and optionally a
//! name, a handler and a guard. Illegal requests come back as typed errors and
//! leave the machine untouched.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash + Debug` value
//! - **Transition**: one legal move from a set of sources to a destination
//! - **StateMachine**: validates and commits requested moves via `send`
//! - **Observers**: post-commit hooks for the owning code
//! - **Validation**: opt-in checks that flag shadowed or ambiguous entries
//!
//! # Example
//!
//! ```rust
//! use turnstile::{StateMachine, Transition, TransitionError};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum Route {
//!     Entry,
//!     Authentication,
//!     Registration,
//!     Main,
//! }
//!
//! let mut machine = StateMachine::new(
//!     Route::Entry,
//!     vec![
//!         Transition::from_any([Route::Entry, Route::Registration], Route::Authentication)?
//!             .named("login"),
//!         Transition::from_any([Route::Entry, Route::Authentication], Route::Registration)?
//!             .named("register"),
//!         Transition::from_any([Route::Authentication, Route::Registration], Route::Main)?
//!             .named("loggedIn"),
//!     ],
//! );
//!
//! assert_eq!(
//!     machine.send(Route::Main).unwrap_err(),
//!     TransitionError::InvalidTransition { from: Route::Entry, to: Route::Main }
//! );
//!
//! let fired = machine.send(Route::Authentication)?;
//! assert_eq!(fired.name(), Some("login"));
//!
//! machine.send(Route::Main)?;
//! assert_eq!(machine.current_state(), &Route::Main);
//! assert!(machine.is_dead_end());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod observer;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Guard, State, StateHistory, StateTransition};
pub use crate::engine::{StateMachine, Transition, TransitionError};
pub use crate::observer::{ChannelObserver, TransitionObserver};
