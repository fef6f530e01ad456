//! Completion source abstraction.
//!
//! This module defines the `CompletionSource` trait that describes the
//! future-like handle a database driver returns from its asynchronous
//! methods. The only capability required of such a handle is accepting a
//! single completion callback.

/// Callback invoked once with the outcome of a driver operation.
///
/// Drivers may invoke it on any thread, hence the `Send` bound.
pub type Callback<T, E> = Box<dyn FnOnce(Result<T, E>) + Send + 'static>;

/// A driver-native handle for an operation that completes later.
///
/// Implementations must invoke the registered callback at most once, on
/// whatever thread completes the operation. If the handle can never
/// complete it should drop the callback, which the bridge reports as
/// abandonment.
///
/// `on_complete` consumes the handle, so one registration per handle is
/// enforced by the compiler.
pub trait CompletionSource {
    /// Value produced on success
    type Value;

    /// Cause reported on failure
    type Error;

    /// Register the completion callback.
    ///
    /// If the operation has already completed, implementations may invoke
    /// `callback` before returning.
    fn on_complete(self, callback: Callback<Self::Value, Self::Error>);
}
