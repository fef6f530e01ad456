//! Driver session contract.
//!
//! This module defines the `DriverSession` trait describing the
//! asynchronous surface a database driver's session exposes. Connection
//! handling, query execution, paging and retries all live behind it.

use crate::completion::CompletionSource;
use std::sync::Arc;

/// Asynchronous session API of a database driver.
///
/// Each method starts an operation and returns immediately with a
/// completion handle; the driver completes the handle later from its own
/// threads.
pub trait DriverSession {
    /// Failure cause reported by every operation
    type Error: Send + 'static;

    /// Parsed, reusable statement returned by preparation
    type PreparedStatement: Send + 'static;

    /// Rows returned by execution
    type ResultSet: Send + 'static;

    /// Pre-built structured statement accepted for preparation
    type RegularStatement;

    /// Any statement variant accepted for execution
    type Statement;

    /// Handle returned by `close_async`
    type CloseFuture: CompletionSource<Value = (), Error = Self::Error>;

    /// Handle returned by `prepare_async` and `prepare_statement_async`
    type PrepareFuture: CompletionSource<Value = Self::PreparedStatement, Error = Self::Error>;

    /// Handle returned by `execute_async`
    type ExecuteFuture: CompletionSource<Value = Self::ResultSet, Error = Self::Error>;

    /// Start shutting the session down.
    fn close_async(&self) -> Self::CloseFuture;

    /// Start preparing a query string.
    fn prepare_async(&self, query: &str) -> Self::PrepareFuture;

    /// Start preparing a structured statement.
    fn prepare_statement_async(&self, statement: Self::RegularStatement) -> Self::PrepareFuture;

    /// Start executing a statement.
    fn execute_async(&self, statement: Self::Statement) -> Self::ExecuteFuture;
}

macro_rules! forward_driver_session {
    ($($ty:ty),+) => {
        $(
            impl<S: DriverSession + ?Sized> DriverSession for $ty {
                type Error = S::Error;
                type PreparedStatement = S::PreparedStatement;
                type ResultSet = S::ResultSet;
                type RegularStatement = S::RegularStatement;
                type Statement = S::Statement;
                type CloseFuture = S::CloseFuture;
                type PrepareFuture = S::PrepareFuture;
                type ExecuteFuture = S::ExecuteFuture;

                fn close_async(&self) -> Self::CloseFuture {
                    (**self).close_async()
                }

                fn prepare_async(&self, query: &str) -> Self::PrepareFuture {
                    (**self).prepare_async(query)
                }

                fn prepare_statement_async(
                    &self,
                    statement: Self::RegularStatement,
                ) -> Self::PrepareFuture {
                    (**self).prepare_statement_async(statement)
                }

                fn execute_async(&self, statement: Self::Statement) -> Self::ExecuteFuture {
                    (**self).execute_async(statement)
                }
            }
        )+
    };
}

forward_driver_session!(Arc<S>, &S, Box<S>);
