//! Observer that queues commits on a channel.

use super::TransitionObserver;
use crate::core::{State, StateTransition};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

/// Forwards every commit as a [`StateTransition`] over an unbounded tokio
/// channel.
///
/// Sending never blocks, so the observer is safe to call from the synchronous
/// `send` path. Consumers drain the receiver on their own schedule, from sync
/// code with `try_recv` or from async code with `recv().await`.
///
/// Once the receiver is dropped, commits are no longer forwarded; each one is
/// logged at `warn` and the commit itself stands.
#[derive(Debug, Clone)]
pub struct ChannelObserver<S: State> {
    sender: UnboundedSender<StateTransition<S>>,
}

impl<S: State> ChannelObserver<S> {
    /// Create an observer and the receiving end of its channel.
    pub fn new() -> (Self, UnboundedReceiver<StateTransition<S>>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Wrap an existing sender, e.g. one shared by several machines.
    pub fn from_sender(sender: UnboundedSender<StateTransition<S>>) -> Self {
        Self { sender }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<S: State> TransitionObserver<S> for ChannelObserver<S> {
    fn on_transitioned(&mut self, from: &S, to: &S, name: Option<&str>) {
        let event = StateTransition::now(from.clone(), to.clone(), name);
        if let Err(error) = self.sender.send(event) {
            warn!(
                from = ?error.0.from,
                to = ?error.0.to,
                "transition receiver dropped, event discarded"
            );
        }
    }
}
