//! Serializable snapshot of everything the catalog knows about a model.

use serde::Serialize;

use super::capabilities::ModelCapabilities;
use super::family::ModelFamily;
use super::openai::ChatModel;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeprecationInfo {
    pub replacement: &'static str,
    pub message: &'static str,
}

/// Flattened metadata for listing and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub family: ModelFamily,
    pub description: &'static str,
    pub context_window: usize,
    pub knowledge_cutoff: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<usize>,
    pub snapshot: bool,
    pub preview: bool,
    pub chat_completions: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_of: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<DeprecationInfo>,
    pub capabilities: ModelCapabilities,
}

impl From<ChatModel> for ModelInfo {
    fn from(model: ChatModel) -> Self {
        Self {
            id: model.as_str(),
            family: model.family(),
            description: model.description(),
            context_window: model.context_window(),
            knowledge_cutoff: model.knowledge_cutoff().to_string(),
            max_output_tokens: model.max_output_tokens(),
            snapshot: model.is_snapshot(),
            preview: model.is_preview(),
            chat_completions: model.supports_chat_completions(),
            alias_of: model.documented_alias_target().map(ChatModel::as_str),
            deprecated: model.deprecation().map(|d| DeprecationInfo {
                replacement: d.replacement.as_str(),
                message: d.message,
            }),
            capabilities: model.capabilities(),
        }
    }
}

impl ChatModel {
    pub fn info(self) -> ModelInfo {
        self.into()
    }
}
