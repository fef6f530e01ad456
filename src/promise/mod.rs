//! Promise abstraction returned by every adapter operation.
//!
//! A [`Promise`] is the read side of a single-value handoff and a
//! [`Resolver`] is its write side. The handoff is built on
//! `tokio::sync::oneshot`, so a resolver may be settled from any thread
//! and the promise may be awaited on any executor or waited on
//! synchronously with [`Promise::blocking_wait`].

pub mod deferred;
pub mod resolver;

pub use deferred::Promise;
pub use resolver::Resolver;
