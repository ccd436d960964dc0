//! Model capabilities descriptor.

use serde::{Deserialize, Serialize};

/// Describes what a chat model can do.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelCapabilities {
    pub supports_vision: bool,
    pub supports_tools: bool,
    pub supports_streaming: bool,
    pub supports_json_mode: bool,
    pub supports_json_schema: bool,
    pub supports_reasoning: bool,
    pub supports_system_messages: bool,
    pub context_length: usize,
    pub max_output_tokens: Option<usize>,
}

impl Default for ModelCapabilities {
    fn default() -> Self {
        Self {
            supports_vision: false,
            supports_tools: false,
            supports_streaming: true,
            supports_json_mode: false,
            supports_json_schema: false,
            supports_reasoning: false,
            supports_system_messages: true,
            context_length: 4_096,
            max_output_tokens: None,
        }
    }
}

impl ModelCapabilities {
    /// Whether a request with `input_tokens` of prompt and up to
    /// `output_tokens` of completion fits this model's limits.
    pub fn fits(&self, input_tokens: usize, output_tokens: usize) -> bool {
        if let Some(max_out) = self.max_output_tokens {
            if output_tokens > max_out {
                return false;
            }
        }
        input_tokens
            .checked_add(output_tokens)
            .is_some_and(|total| total <= self.context_length)
    }
}
