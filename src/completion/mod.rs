//! Driver completion handles and their conversion to promises.
//!
//! # Architecture
//!
//! - `source` - The `CompletionSource` trait drivers implement
//! - `handle` - `Completion`, a settable handle usable by any driver
//! - `bridge` - `future_to_promise`, the one-shot callback adapter

pub mod bridge;
pub mod handle;
pub mod source;

pub use bridge::{future_to_promise, CompletionSourceExt};
pub use handle::{Completer, Completion};
pub use source::{Callback, CompletionSource};
