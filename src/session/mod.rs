//! Session adaptation.
//!
//! This module provides the driver session contract, the promise-returning
//! adapter around it, and the adapter's configuration.
//!
//! # Example
//!
//! ```no_run
//! # use session_bridge::session::{AsyncSession, DriverSession, SessionConfig};
//! # fn example<S: DriverSession>(driver_session: S) -> Result<(), Box<dyn std::error::Error>> {
//! let config = SessionConfig::builder()
//!     .name("inventory")
//!     .log_statements(true)
//!     .build()?;
//!
//! let session = AsyncSession::with_config(driver_session, config);
//! # let _ = session;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod config;
pub mod driver;

pub use adapter::{async_session, AsyncSession};
pub use config::{SessionConfig, SessionConfigBuilder};
pub use driver::DriverSession;
