//! The transition engine.
//!
//! A [`StateMachine`] owns one current state and an ordered table of
//! [`Transition`]s. `send` is the only way the state changes:
//!
//! 1. find the first transition leaving the current state that targets the
//!    requested one (declaration order decides ties)
//! 2. check its guard, if any
//! 3. commit the new state, then run the handler, then notify observers
//!
//! Any failure returns a [`TransitionError`] and changes nothing.

mod error;
mod machine;
mod transition;

pub use error::TransitionError;
pub use machine::StateMachine;
pub use transition::{Handler, Transition};
