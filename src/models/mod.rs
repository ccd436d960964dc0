//! Model definitions and selection.

pub mod capabilities;
pub mod family;
pub mod info;
pub mod openai;
pub mod selector;

pub use capabilities::ModelCapabilities;
pub use family::ModelFamily;
pub use info::{DeprecationInfo, ModelInfo};
pub use openai::{ChatModel, Deprecation, KnowledgeCutoff};
pub use selector::ModelSelector;
