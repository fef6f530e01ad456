//! # session-bridge
//!
//! Promise-returning adapter for callback-driven database driver sessions.
//!
//! Database drivers commonly expose asynchronous operations that return a
//! future-like handle accepting a single completion callback, completed
//! later from the driver's own I/O threads. This library wraps such a
//! session in [`AsyncSession`], whose operations return a [`Promise`]
//! that can be awaited on any executor or waited on synchronously.
//!
//! All database work (connections, execution, paging, retries, pooling)
//! stays in the wrapped driver. Values and failure causes pass through
//! unchanged.
//!
//! ## Example
//!
//! ```no_run
//! # use session_bridge::*;
//! # async fn example<S>(driver_session: S, statement: S::Statement) -> Result<(), Box<dyn std::error::Error>>
//! # where
//! #     S: DriverSession,
//! #     S::Error: std::error::Error + 'static,
//! # {
//! let session = AsyncSession::new(driver_session);
//!
//! // Execute a statement
//! let rows = session.execute(statement).await?;
//!
//! // Close the session
//! session.close().await?;
//! # let _ = rows;
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod completion;
pub mod error;
pub mod promise;
pub mod session;

// Re-export public API
pub use completion::{future_to_promise, Completer, Completion, CompletionSource};
pub use error::{ConfigError, PromiseError};
pub use promise::{Promise, Resolver};
pub use session::{async_session, AsyncSession, DriverSession, SessionConfig};
