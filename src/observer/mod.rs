//! Post-commit notification hooks.
//!
//! Observers are how an owner reacts to state changes (updating views,
//! forwarding events) without the engine knowing anything about it. They run
//! after the state has changed and after the transition's own handler.
//!
//! Two strategies ship with the crate:
//!
//! - Any `FnMut(&S, &S, Option<&str>)` closure is an observer (direct call)
//! - [`ChannelObserver`] forwards each commit over a tokio channel (queued)

mod channel;

pub use channel::ChannelObserver;

use crate::core::State;

/// Receives `(from, to, name)` after every committed transition.
///
/// # Example
///
/// ```rust
/// use turnstile::{StateMachine, Transition, TransitionObserver};
///
/// struct ViewUpdater {
///     rendered: Vec<&'static str>,
/// }
///
/// impl TransitionObserver<&'static str> for ViewUpdater {
///     fn on_transitioned(&mut self, _from: &&'static str, to: &&'static str, _name: Option<&str>) {
///         self.rendered.push(*to);
///     }
/// }
///
/// let mut machine = StateMachine::new("entry", vec![Transition::new("entry", "main")]);
/// machine.add_observer(ViewUpdater { rendered: Vec::new() });
/// machine.send("main").unwrap();
/// ```
pub trait TransitionObserver<S: State> {
    fn on_transitioned(&mut self, from: &S, to: &S, name: Option<&str>);
}

impl<S, F> TransitionObserver<S> for F
where
    S: State,
    F: FnMut(&S, &S, Option<&str>),
{
    fn on_transitioned(&mut self, from: &S, to: &S, name: Option<&str>) {
        self(from, to, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting {
        calls: usize,
        last: Option<(u8, u8)>,
    }

    impl TransitionObserver<u8> for Counting {
        fn on_transitioned(&mut self, from: &u8, to: &u8, _name: Option<&str>) {
            self.calls += 1;
            self.last = Some((*from, *to));
        }
    }

    #[test]
    fn struct_observer_accumulates() {
        let mut observer = Counting {
            calls: 0,
            last: None,
        };

        observer.on_transitioned(&1, &2, None);
        observer.on_transitioned(&2, &3, Some("next"));

        assert_eq!(observer.calls, 2);
        assert_eq!(observer.last, Some((2, 3)));
    }

    #[test]
    fn closure_is_observer() {
        let mut names = Vec::new();
        {
            let mut observer = |_: &u8, _: &u8, name: Option<&str>| {
                names.push(name.map(str::to_owned));
            };
            TransitionObserver::on_transitioned(&mut observer, &1, &2, Some("step"));
            TransitionObserver::on_transitioned(&mut observer, &2, &1, None);
        }

        assert_eq!(names, vec![Some("step".to_string()), None]);
    }
}
