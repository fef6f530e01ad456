//! Common test utilities for session-bridge integration tests.
//!
//! Provides `MemoryDriverSession`, an in-memory driver session that behaves
//! like a real callback-driven driver: every operation returns immediately
//! and is completed later on a separate driver I/O thread.
//!
//! | Query contains | Outcome                          |
//! |----------------|----------------------------------|
//! | `big_table`    | execute fails with `Timeout`     |
//! | no SQL verb    | prepare fails with `Syntax`      |
//! | anything else  | succeeds                         |
//!
//! After `close_async` completes, every operation fails with `SessionClosed`.

#![allow(dead_code)]

use session_bridge::completion::{Completer, Completion};
use session_bridge::DriverSession;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Driver Types
// ============================================================================

/// Name given to every driver completion thread.
pub const DRIVER_THREAD_NAME: &str = "memory-driver-io";

/// Simulated latency of each driver operation.
const OPERATION_LATENCY: Duration = Duration::from_millis(5);

const SQL_VERBS: [&str; 4] = ["SELECT", "INSERT", "UPDATE", "DELETE"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DriverError {
    #[error("Query timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Syntax error in query: {query}")]
    Syntax { query: String },

    #[error("Session is closed")]
    SessionClosed,
}

/// Driver failures are shared so tests can check instance identity.
pub type Cause = Arc<DriverError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    pub id: u64,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleStatement {
    pub query: String,
}

impl SimpleStatement {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundStatement {
    pub prepared: PreparedQuery,
    pub values: Vec<String>,
}

/// Every statement variant the driver executes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Simple(SimpleStatement),
    Bound(BoundStatement),
}

impl Statement {
    fn query(&self) -> &str {
        match self {
            Statement::Simple(stmt) => &stmt.query,
            Statement::Bound(stmt) => &stmt.prepared.query,
        }
    }
}

impl From<SimpleStatement> for Statement {
    fn from(stmt: SimpleStatement) -> Self {
        Statement::Simple(stmt)
    }
}

impl From<BoundStatement> for Statement {
    fn from(stmt: BoundStatement) -> Self {
        Statement::Bound(stmt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rows {
    pub rows: Vec<String>,
    pub completed_on: Option<String>,
}

// ============================================================================
// Memory Driver Session
// ============================================================================

#[derive(Default)]
struct SessionState {
    next_prepared_id: AtomicU64,
    closed: AtomicBool,
    close_requests: AtomicUsize,
    executed: Mutex<Vec<Statement>>,
    timeout_cause: Mutex<Option<Cause>>,
}

/// In-memory driver session completing operations on its own threads.
#[derive(Clone, Default)]
pub struct MemoryDriverSession {
    state: Arc<SessionState>,
}

impl MemoryDriverSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `close_async` calls received.
    pub fn close_requests(&self) -> usize {
        self.state.close_requests.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }

    /// Statements received by `execute_async`, in arrival order.
    pub fn executed(&self) -> Vec<Statement> {
        self.state.executed.lock().unwrap().clone()
    }

    /// The timeout instance most recently reported by `execute_async`.
    pub fn last_timeout(&self) -> Option<Cause> {
        self.state.timeout_cause.lock().unwrap().clone()
    }

    /// Complete `completer` on a driver thread after a short latency.
    fn complete_later<T, F>(&self, completer: Completer<T, Cause>, operation: F)
    where
        T: Send + 'static,
        F: FnOnce(&SessionState) -> Result<T, Cause> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        thread::Builder::new()
            .name(DRIVER_THREAD_NAME.to_string())
            .spawn(move || {
                thread::sleep(OPERATION_LATENCY);
                let result = if state.closed.load(Ordering::SeqCst) {
                    Err(Arc::new(DriverError::SessionClosed))
                } else {
                    operation(&state)
                };
                completer.complete(result);
            })
            .expect("failed to spawn driver thread");
    }

    fn prepare_query(state: &SessionState, query: String) -> Result<PreparedQuery, Cause> {
        let upper = query.to_uppercase();
        if !SQL_VERBS.iter().any(|verb| upper.contains(verb)) {
            return Err(Arc::new(DriverError::Syntax { query }));
        }
        let id = state.next_prepared_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(PreparedQuery { id, query })
    }
}

impl DriverSession for MemoryDriverSession {
    type Error = Cause;
    type PreparedStatement = PreparedQuery;
    type ResultSet = Rows;
    type RegularStatement = SimpleStatement;
    type Statement = Statement;
    type CloseFuture = Completion<(), Cause>;
    type PrepareFuture = Completion<PreparedQuery, Cause>;
    type ExecuteFuture = Completion<Rows, Cause>;

    fn close_async(&self) -> Self::CloseFuture {
        self.state.close_requests.fetch_add(1, Ordering::SeqCst);
        let (completion, completer) = Completion::pending();
        self.complete_later(completer, |state| {
            state.closed.store(true, Ordering::SeqCst);
            Ok(())
        });
        completion
    }

    fn prepare_async(&self, query: &str) -> Self::PrepareFuture {
        let query = query.to_string();
        let (completion, completer) = Completion::pending();
        self.complete_later(completer, move |state| Self::prepare_query(state, query));
        completion
    }

    fn prepare_statement_async(&self, statement: SimpleStatement) -> Self::PrepareFuture {
        let (completion, completer) = Completion::pending();
        self.complete_later(completer, move |state| {
            Self::prepare_query(state, statement.query)
        });
        completion
    }

    fn execute_async(&self, statement: Statement) -> Self::ExecuteFuture {
        self.state.executed.lock().unwrap().push(statement.clone());

        let (completion, completer) = Completion::pending();
        self.complete_later(completer, move |state| {
            if statement.query().contains("big_table") {
                let cause = Arc::new(DriverError::Timeout { timeout_ms: 12_000 });
                *state.timeout_cause.lock().unwrap() = Some(Arc::clone(&cause));
                return Err(cause);
            }

            let rows = match &statement {
                Statement::Simple(_) => vec!["alice".to_string(), "bob".to_string()],
                Statement::Bound(bound) => bound.values.clone(),
            };
            Ok(Rows {
                rows,
                completed_on: thread::current().name().map(str::to_string),
            })
        });
        completion
    }
}
