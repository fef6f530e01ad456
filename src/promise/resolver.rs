//! Write side of a promise.

use std::fmt;
use tokio::sync::oneshot;
use tracing::{debug, trace};

/// Settles a [`Promise`](super::Promise) exactly once.
///
/// Every settling method consumes the resolver, so a second resolution is
/// impossible. A resolver dropped without settling makes its promise
/// report [`PromiseError::Abandoned`](crate::error::PromiseError::Abandoned).
///
/// Resolvers are `Send` whenever `T` and `E` are, so they can be moved into
/// callbacks that a driver invokes on its own threads.
pub struct Resolver<T, E> {
    sender: Option<oneshot::Sender<Result<T, E>>>,
}

impl<T, E> Resolver<T, E> {
    pub(crate) fn new(sender: oneshot::Sender<Result<T, E>>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Resolve the promise with a value.
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Reject the promise with a cause.
    pub fn reject(self, cause: E) {
        self.settle(Err(cause));
    }

    /// Settle the promise from a `Result`.
    ///
    /// If the promise has already been dropped the result is discarded.
    pub fn settle(mut self, result: Result<T, E>) {
        if let Some(sender) = self.sender.take() {
            if sender.send(result).is_err() {
                trace!("Promise dropped before settlement, discarding result");
            }
        }
    }

    /// Check whether nobody is waiting on the promise any more.
    pub fn is_abandoned(&self) -> bool {
        self.sender.as_ref().map_or(true, |sender| sender.is_closed())
    }
}

impl<T, E> Drop for Resolver<T, E> {
    fn drop(&mut self) {
        if self.sender.is_some() {
            debug!("Resolver dropped without settling its promise");
        }
    }
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("abandoned", &self.is_abandoned())
            .finish()
    }
}
