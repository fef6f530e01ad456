//! Settable completion handle.
//!
//! `Completion` is a ready-made [`CompletionSource`] for drivers that do not
//! ship their own future-like type, and for tests that need to control
//! exactly when and on which thread an operation completes.

use super::source::{Callback, CompletionSource};
use std::fmt;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::warn;

enum State<T, E> {
    /// Neither settled nor observed yet
    Waiting,
    /// Callback registered, outcome not yet known
    Registered(Callback<T, E>),
    /// Outcome known, no callback yet
    Settled(Result<T, E>),
    /// Outcome delivered, or the completer went away
    Done,
}

struct Shared<T, E> {
    state: Mutex<State<T, E>>,
}

impl<T, E> Shared<T, E> {
    fn with_state(state: State<T, E>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(state),
        })
    }

    fn lock(&self) -> MutexGuard<'_, State<T, E>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Driver-side handle of an operation that completes later.
///
/// # Example
///
/// ```
/// use session_bridge::completion::{future_to_promise, Completion};
///
/// let (completion, completer) = Completion::<u32, String>::pending();
/// let promise = future_to_promise(completion);
///
/// std::thread::spawn(move || completer.succeed(10));
/// assert_eq!(promise.blocking_wait(), Ok(10));
/// ```
pub struct Completion<T, E> {
    shared: Arc<Shared<T, E>>,
}

/// Settles the paired [`Completion`].
///
/// Dropping a completer without settling releases any registered callback
/// unused, so the bridged promise reports abandonment.
pub struct Completer<T, E> {
    shared: Option<Arc<Shared<T, E>>>,
}

impl<T, E> Completion<T, E> {
    /// Create an unsettled handle and the completer that settles it.
    pub fn pending() -> (Self, Completer<T, E>) {
        let shared = Shared::with_state(State::Waiting);
        (
            Self {
                shared: Arc::clone(&shared),
            },
            Completer {
                shared: Some(shared),
            },
        )
    }

    /// Create a handle that is already settled with `result`.
    pub fn ready(result: Result<T, E>) -> Self {
        Self {
            shared: Shared::with_state(State::Settled(result)),
        }
    }

    /// Create a handle that already succeeded with `value`.
    pub fn succeeded(value: T) -> Self {
        Self::ready(Ok(value))
    }

    /// Create a handle that already failed with `cause`.
    pub fn failed(cause: E) -> Self {
        Self::ready(Err(cause))
    }

    /// Check if the outcome is known but not yet delivered.
    pub fn is_settled(&self) -> bool {
        matches!(*self.shared.lock(), State::Settled(_))
    }
}

impl<T, E> CompletionSource for Completion<T, E> {
    type Value = T;
    type Error = E;

    fn on_complete(self, callback: Callback<T, E>) {
        let mut state = self.shared.lock();
        match mem::replace(&mut *state, State::Done) {
            State::Settled(result) => {
                drop(state);
                callback(result);
            }
            State::Waiting => *state = State::Registered(callback),
            // Completer dropped before settling; releasing the callback
            // abandons the promise.
            State::Done => {}
            State::Registered(_) => unreachable!("on_complete consumes the completion"),
        }
    }
}

impl<T, E> Completer<T, E> {
    /// Settle the paired completion with `result`.
    ///
    /// A registered callback runs on the calling thread, after the internal
    /// lock is released.
    pub fn complete(mut self, result: Result<T, E>) {
        let Some(shared) = self.shared.take() else {
            return;
        };

        let mut state = shared.lock();
        match mem::replace(&mut *state, State::Done) {
            State::Registered(callback) => {
                drop(state);
                callback(result);
            }
            State::Waiting => *state = State::Settled(result),
            State::Settled(_) | State::Done => {}
        }
    }

    /// Settle the paired completion successfully.
    pub fn succeed(self, value: T) {
        self.complete(Ok(value));
    }

    /// Settle the paired completion with a failure.
    pub fn fail(self, cause: E) {
        self.complete(Err(cause));
    }
}

impl<T, E> Drop for Completer<T, E> {
    fn drop(&mut self) {
        let Some(shared) = self.shared.take() else {
            return;
        };

        let previous = mem::replace(&mut *shared.lock(), State::Done);
        if matches!(previous, State::Registered(_) | State::Waiting) {
            warn!("Completer dropped without settling its completion");
        }
        // Callback (if any) is dropped here, outside the lock
        drop(previous);
    }
}

impl<T, E> fmt::Debug for Completion<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("settled", &self.is_settled())
            .finish()
    }
}

impl<T, E> fmt::Debug for Completer<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completer").finish_non_exhaustive()
    }
}
