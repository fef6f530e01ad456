//! The `Promise` type.

use super::Resolver;
use crate::error::PromiseError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot::{self, error::TryRecvError};

/// A value or failure that becomes available exactly once.
///
/// A `Promise` is settled through its [`Resolver`]. Awaiting it yields the
/// value on success, [`PromiseError::Rejected`] with the unchanged cause on
/// failure, and [`PromiseError::Abandoned`] if the resolver was dropped
/// without settling.
///
/// # Example
///
/// ```
/// use session_bridge::promise::Promise;
///
/// # async fn example() {
/// let promise: Promise<u32, String> = Promise::invokable(|resolver| {
///     std::thread::spawn(move || resolver.resolve(42));
/// });
///
/// assert_eq!(promise.await, Ok(42));
/// # }
/// ```
#[must_use = "promises do nothing unless awaited or waited on"]
pub struct Promise<T, E> {
    receiver: oneshot::Receiver<Result<T, E>>,
}

impl<T, E> Promise<T, E> {
    /// Create an unsettled promise together with the resolver that settles it.
    pub fn pending() -> (Self, Resolver<T, E>) {
        let (sender, receiver) = oneshot::channel();
        (Self { receiver }, Resolver::new(sender))
    }

    /// Create a promise and hand its resolver to `invoke` immediately.
    ///
    /// `invoke` typically registers the resolver with some external
    /// completion mechanism and returns without blocking.
    pub fn invokable<F>(invoke: F) -> Self
    where
        F: FnOnce(Resolver<T, E>),
    {
        let (promise, resolver) = Self::pending();
        invoke(resolver);
        promise
    }

    /// Create a promise already resolved with `value`.
    pub fn resolved(value: T) -> Self {
        Self::invokable(|resolver| resolver.resolve(value))
    }

    /// Create a promise already rejected with `cause`.
    pub fn rejected(cause: E) -> Self {
        Self::invokable(|resolver| resolver.reject(cause))
    }

    /// Block the current thread until the promise settles.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context;
    /// use `.await` there instead.
    pub fn blocking_wait(self) -> Result<T, PromiseError<E>> {
        match self.receiver.blocking_recv() {
            Ok(result) => result.map_err(PromiseError::Rejected),
            Err(_) => Err(PromiseError::Abandoned),
        }
    }

    /// Take the outcome if the promise has already settled.
    ///
    /// Consumes the promise on success. While it is still pending the
    /// promise is handed back unchanged in `Err`, ready to be awaited or
    /// taken again.
    pub fn try_take(mut self) -> Result<Result<T, PromiseError<E>>, Self> {
        match self.receiver.try_recv() {
            Ok(result) => Ok(result.map_err(PromiseError::Rejected)),
            Err(TryRecvError::Empty) => Err(self),
            Err(TryRecvError::Closed) => Ok(Err(PromiseError::Abandoned)),
        }
    }
}

impl<T, E> Future for Promise<T, E> {
    type Output = Result<T, PromiseError<E>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result.map_err(PromiseError::Rejected)),
            Poll::Ready(Err(_)) => Poll::Ready(Err(PromiseError::Abandoned)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T, E> fmt::Debug for Promise<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Promise").finish_non_exhaustive()
    }
}
