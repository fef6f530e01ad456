//! Adapter configuration.
//!
//! `SessionConfig` can be built in code with [`SessionConfigBuilder`] or
//! deserialized with serde from whatever configuration format the host
//! application already uses.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default session name used in log records.
pub const DEFAULT_SESSION_NAME: &str = "session";

/// Adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Name attached to every log record emitted for this session
    pub name: String,

    /// Include query text in debug logs when preparing
    pub log_statements: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SESSION_NAME.to_string(),
            log_statements: false,
        }
    }
}

impl SessionConfig {
    /// Create a new SessionConfigBuilder.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::new()
    }

    /// Check the configuration for invalid values.
    ///
    /// Deserialized configurations should be validated before use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.is_empty() {
            return Err(ConfigError::InvalidParameter {
                parameter: "name".to_string(),
                message: "Session name cannot be empty".to_string(),
            });
        }

        if self.name.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidParameter {
                parameter: "name".to_string(),
                message: format!("Session name '{}' cannot contain whitespace", self.name),
            });
        }

        Ok(())
    }
}

/// Builder for constructing SessionConfig with validation.
#[derive(Debug, Clone, Default)]
pub struct SessionConfigBuilder {
    name: Option<String>,
    log_statements: Option<bool>,
}

impl SessionConfigBuilder {
    /// Create a new SessionConfigBuilder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the session name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Enable or disable logging of query text.
    pub fn log_statements(mut self, enabled: bool) -> Self {
        self.log_statements = Some(enabled);
        self
    }

    /// Build the SessionConfig with validation.
    pub fn build(self) -> Result<SessionConfig, ConfigError> {
        let config = SessionConfig {
            name: self
                .name
                .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
            log_statements: self.log_statements.unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}
