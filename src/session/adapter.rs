//! Promise-returning session adapter.
//!
//! This module provides `AsyncSession`, which wraps a driver session and
//! exposes its asynchronous operations as [`Promise`]s.

use crate::completion::future_to_promise;
use crate::promise::Promise;
use crate::session::config::SessionConfig;
use crate::session::driver::DriverSession;
use tracing::debug;

/// Driver session whose asynchronous operations return promises.
///
/// Every operation forwards to the matching `*_async` method of the
/// wrapped session exactly once and converts the returned handle with
/// [`future_to_promise`]. Values and failure causes pass through
/// unchanged; nothing is retried, wrapped or timed out here.
///
/// # Example
///
/// ```no_run
/// use session_bridge::session::{AsyncSession, DriverSession};
///
/// # async fn example<S>(driver_session: S) -> Result<(), Box<dyn std::error::Error>>
/// # where
/// #     S: DriverSession,
/// #     S::Error: std::error::Error + 'static,
/// # {
/// let session = AsyncSession::new(driver_session);
///
/// let prepared = session.prepare("SELECT * FROM users WHERE id = ?").await?;
///
/// session.close().await?;
/// # let _ = prepared;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AsyncSession<S> {
    /// Wrapped driver session
    session: S,
    /// Adapter configuration
    config: SessionConfig,
}

/// Wrap `session` with the default configuration.
pub fn async_session<S: DriverSession>(session: S) -> AsyncSession<S> {
    AsyncSession::new(session)
}

impl<S: DriverSession> AsyncSession<S> {
    /// Wrap a driver session using the default configuration.
    pub fn new(session: S) -> Self {
        Self::with_config(session, SessionConfig::default())
    }

    /// Wrap a driver session using `config`.
    pub fn with_config(session: S, config: SessionConfig) -> Self {
        Self { session, config }
    }

    /// Get the underlying driver session.
    pub fn session(&self) -> &S {
        &self.session
    }

    /// Get the adapter configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Unwrap the adapter, returning the driver session.
    pub fn into_inner(self) -> S {
        self.session
    }

    /// Close the session.
    ///
    /// Requests a single asynchronous shutdown; the promise resolves with
    /// `()` once the driver reports the session closed.
    pub fn close(&self) -> Promise<(), S::Error> {
        debug!(session = %self.config.name, "Closing session");
        future_to_promise(self.session.close_async())
    }

    /// Prepare a query string.
    pub fn prepare(&self, query: &str) -> Promise<S::PreparedStatement, S::Error> {
        if self.config.log_statements {
            debug!(session = %self.config.name, query, "Preparing query");
        } else {
            debug!(session = %self.config.name, "Preparing query");
        }
        future_to_promise(self.session.prepare_async(query))
    }

    /// Prepare a structured statement.
    pub fn prepare_statement(
        &self,
        statement: S::RegularStatement,
    ) -> Promise<S::PreparedStatement, S::Error> {
        debug!(session = %self.config.name, "Preparing structured statement");
        future_to_promise(self.session.prepare_statement_async(statement))
    }

    /// Execute any statement variant.
    ///
    /// The statement is handed to the driver as-is.
    pub fn execute(&self, statement: impl Into<S::Statement>) -> Promise<S::ResultSet, S::Error> {
        debug!(session = %self.config.name, "Executing statement");
        future_to_promise(self.session.execute_async(statement.into()))
    }
}

impl<S: DriverSession> From<S> for AsyncSession<S> {
    fn from(session: S) -> Self {
        Self::new(session)
    }
}
