//! Error handling for the panel core
//!
//! This module defines the error type shared by the crate's fallible surfaces.
//! The permission resolver and the contract converter never return errors by
//! design (they degrade to safe defaults); everything that touches files or
//! serialized records reports through [`PanelError`].

use thiserror::Error;

/// Result type alias for the panel core
pub type Result<T> = std::result::Result<T, PanelError>;

/// Main error type for the panel core
#[derive(Error, Debug)]
pub enum PanelError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record lookup failures
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PanelError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }
}
