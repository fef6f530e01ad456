//! Conversion from driver completion handles to promises.

use super::source::CompletionSource;
use crate::promise::Promise;
use tracing::trace;

/// Convert a driver completion handle into a [`Promise`].
///
/// A callback is registered on `source` before this function returns. When
/// the driver completes the operation, on whichever thread it chooses, the
/// promise is resolved with the value or rejected with the cause, exactly
/// once and unchanged. No polling, timeout or cancellation is added.
///
/// # Example
///
/// ```
/// use session_bridge::completion::{future_to_promise, Completion};
/// use session_bridge::error::PromiseError;
///
/// let promise = future_to_promise(Completion::<(), &str>::failed("unavailable"));
/// assert_eq!(promise.blocking_wait(), Err(PromiseError::Rejected("unavailable")));
/// ```
pub fn future_to_promise<F>(source: F) -> Promise<F::Value, F::Error>
where
    F: CompletionSource,
    F::Value: Send + 'static,
    F::Error: Send + 'static,
{
    Promise::invokable(|resolver| {
        source.on_complete(Box::new(move |result| {
            trace!(succeeded = result.is_ok(), "Completion source settled");
            resolver.settle(result);
        }));
    })
}

/// Extension methods for every [`CompletionSource`].
pub trait CompletionSourceExt: CompletionSource + Sized {
    /// Convert this handle into a [`Promise`]; see [`future_to_promise`].
    fn into_promise(self) -> Promise<Self::Value, Self::Error>
    where
        Self::Value: Send + 'static,
        Self::Error: Send + 'static,
    {
        future_to_promise(self)
    }
}

impl<F: CompletionSource> CompletionSourceExt for F {}
