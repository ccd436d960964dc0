//! Error types for the model catalog.

use thiserror::Error;

use crate::models::ChatModel;

/// Primary error type for all catalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No catalog entry has exactly this wire identifier.
    #[error("Unrecognized model identifier: {0:?}")]
    UnrecognizedIdentifier(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Raised only when the caller opts into denying deprecated models.
    #[error("Model {model} is deprecated; use {replacement} instead")]
    Deprecated {
        model: ChatModel,
        replacement: ChatModel,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    /// The offending input, when this is a decode failure.
    pub fn unrecognized_identifier(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedIdentifier(id) => Some(id),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, CatalogError>;
