//! Convenience re-exports for common use.

pub use crate::config::{CatalogConfig, DeprecationPolicy};
pub use crate::error::{CatalogError, Result};
pub use crate::models::{ChatModel, ModelCapabilities, ModelFamily, ModelSelector};
