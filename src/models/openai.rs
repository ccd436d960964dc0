//! OpenAI chat-completion model definitions.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{AsRefStr, Display, EnumCount, EnumIter, IntoStaticStr, IntoEnumIterator};

use super::capabilities::ModelCapabilities;
use super::family::ModelFamily;
use crate::error::CatalogError;

/// OpenAI chat-completion models.
///
/// Every variant maps to exactly one wire identifier, the literal sent as the
/// `model` field of a request. Parsing is exact and case-sensitive:
///
/// ```
/// use chatmodel::models::ChatModel;
///
/// let model: ChatModel = "gpt-4o".parse()?;
/// assert_eq!(model, ChatModel::Gpt4o);
/// assert_eq!(model.as_str(), "gpt-4o");
/// assert!("GPT-4o".parse::<ChatModel>().is_err());
/// # Ok::<(), chatmodel::error::CatalogError>(())
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumIter,
    EnumCount,
)]
pub enum ChatModel {
    /// GPT-4 Turbo preview tuned to reduce unfinished ("lazy") completions.
    #[strum(serialize = "gpt-4-0125-preview")]
    Gpt4_0125Preview,
    /// Alias the vendor points at the current GPT-4 Turbo preview.
    #[strum(serialize = "gpt-4-turbo-preview")]
    Gpt4TurboPreview,
    /// First GPT-4 Turbo preview: JSON mode, reproducible outputs, parallel function calling.
    #[strum(serialize = "gpt-4-1106-preview")]
    Gpt4_1106Preview,
    /// GPT-4 Turbo preview with image understanding.
    #[strum(serialize = "gpt-4-vision-preview")]
    Gpt4VisionPreview,
    /// GPT-4, updated with each model iteration.
    #[strum(serialize = "gpt-4")]
    Gpt4,
    /// GPT-4 snapshot from 2023-06-13 with function calling.
    #[strum(serialize = "gpt-4-0613")]
    Gpt4_0613,
    /// GPT-4 with a 32k context window.
    #[strum(serialize = "gpt-4-32k")]
    Gpt4_32k,
    /// GPT-4 32k snapshot from 2023-06-13.
    #[strum(serialize = "gpt-4-32k-0613")]
    Gpt4_32k0613,
    /// GPT-4o flagship multimodal model.
    #[strum(serialize = "gpt-4o")]
    Gpt4o,
    /// GPT-4o snapshot from 2024-11-20.
    #[strum(serialize = "gpt-4o-2024-11-20")]
    Gpt4o20241120,
    /// GPT-4o snapshot from 2024-08-06.
    #[strum(serialize = "gpt-4o-2024-08-06")]
    Gpt4o20240806,
    /// GPT-4o snapshot from 2024-05-13.
    #[strum(serialize = "gpt-4o-2024-05-13")]
    Gpt4o20240513,
    /// The GPT-4o build currently served in ChatGPT.
    #[strum(serialize = "chatgpt-4o-latest")]
    ChatGpt4oLatest,
    /// GPT-4o mini, the small and fast 4o model.
    #[strum(serialize = "gpt-4o-mini")]
    Gpt4oMini,
    /// GPT-4o mini snapshot from 2024-07-18.
    #[strum(serialize = "gpt-4o-mini-2024-07-18")]
    Gpt4oMini20240718,
    /// GPT-3.5 Turbo with JSON mode and parallel function calling.
    #[strum(serialize = "gpt-3.5-turbo-1106")]
    Gpt35Turbo1106,
    /// GPT-3.5 Turbo, updated with each model iteration.
    #[strum(serialize = "gpt-3.5-turbo")]
    Gpt35Turbo,
    /// GPT-3.5 Turbo with a 16k context window.
    #[strum(serialize = "gpt-3.5-turbo-16k")]
    Gpt35Turbo16k,
    /// GPT-3.5 instruct model for the legacy Completions endpoint.
    #[strum(serialize = "gpt-3.5-turbo-instruct")]
    Gpt35TurboInstruct,
    /// GPT-3.5 Turbo snapshot from 2023-06-13. Deprecated.
    #[strum(serialize = "gpt-3.5-turbo-0613")]
    Gpt35Turbo0613,
    /// GPT-3.5 Turbo 16k snapshot from 2023-06-13. Deprecated.
    #[strum(serialize = "gpt-3.5-turbo-16k-0613")]
    Gpt35Turbo16k0613,
    /// GPT-3.5 Turbo snapshot from 2023-03-01. Deprecated.
    #[strum(serialize = "gpt-3.5-turbo-0301")]
    Gpt35Turbo0301,
}

/// Advisory deprecation metadata. Never changes how a model encodes or parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deprecation {
    pub replacement: ChatModel,
    pub message: &'static str,
}

/// Month and year the model's training data ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnowledgeCutoff {
    pub year: i32,
    pub month: Month,
}

impl KnowledgeCutoff {
    pub const fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// First calendar day of the cutoff month.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1)
    }
}

impl fmt::Display for KnowledgeCutoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", &self.month.name()[..3], self.year)
    }
}

const OPENAI_DEPRECATION_NOTICE: &str = "Will be deprecated by OpenAI.";

const GPT4_TURBO_CUTOFF: KnowledgeCutoff = KnowledgeCutoff::new(2023, Month::April);
const GPT4O_CUTOFF: KnowledgeCutoff = KnowledgeCutoff::new(2023, Month::October);
const LEGACY_CUTOFF: KnowledgeCutoff = KnowledgeCutoff::new(2021, Month::September);

static BY_WIRE_ID: OnceLock<HashMap<&'static str, ChatModel>> = OnceLock::new();

fn wire_table() -> &'static HashMap<&'static str, ChatModel> {
    BY_WIRE_ID.get_or_init(|| ChatModel::iter().map(|m| (m.as_str(), m)).collect())
}

impl ChatModel {
    /// Get the API model identifier.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Every model in declaration order.
    pub fn all() -> Vec<ChatModel> {
        Self::iter().collect()
    }

    pub fn family(self) -> ModelFamily {
        match self {
            Self::Gpt4_0125Preview
            | Self::Gpt4TurboPreview
            | Self::Gpt4_1106Preview
            | Self::Gpt4VisionPreview
            | Self::Gpt4
            | Self::Gpt4_0613
            | Self::Gpt4_32k
            | Self::Gpt4_32k0613 => ModelFamily::Gpt4,
            Self::Gpt4o
            | Self::Gpt4o20241120
            | Self::Gpt4o20240806
            | Self::Gpt4o20240513
            | Self::ChatGpt4oLatest => ModelFamily::Gpt4o,
            Self::Gpt4oMini | Self::Gpt4oMini20240718 => ModelFamily::Gpt4oMini,
            Self::Gpt35Turbo1106
            | Self::Gpt35Turbo
            | Self::Gpt35Turbo16k
            | Self::Gpt35TurboInstruct
            | Self::Gpt35Turbo0613
            | Self::Gpt35Turbo16k0613
            | Self::Gpt35Turbo0301 => ModelFamily::Gpt35,
        }
    }

    /// Context window in tokens.
    pub fn context_window(self) -> usize {
        match self {
            Self::Gpt4_0125Preview
            | Self::Gpt4TurboPreview
            | Self::Gpt4_1106Preview
            | Self::Gpt4VisionPreview => 128_000,
            Self::Gpt4 | Self::Gpt4_0613 => 8_192,
            Self::Gpt4_32k | Self::Gpt4_32k0613 => 32_768,
            Self::Gpt4o
            | Self::Gpt4o20241120
            | Self::Gpt4o20240806
            | Self::Gpt4o20240513
            | Self::ChatGpt4oLatest
            | Self::Gpt4oMini
            | Self::Gpt4oMini20240718 => 128_000,
            Self::Gpt35Turbo1106 => 16_385,
            Self::Gpt35Turbo16k | Self::Gpt35Turbo16k0613 => 16_384,
            Self::Gpt35Turbo
            | Self::Gpt35TurboInstruct
            | Self::Gpt35Turbo0613
            | Self::Gpt35Turbo0301 => 4_096,
        }
    }

    pub fn knowledge_cutoff(self) -> KnowledgeCutoff {
        match self {
            Self::Gpt4_0125Preview
            | Self::Gpt4TurboPreview
            | Self::Gpt4_1106Preview
            | Self::Gpt4VisionPreview => GPT4_TURBO_CUTOFF,
            m if matches!(m.family(), ModelFamily::Gpt4o | ModelFamily::Gpt4oMini) => {
                GPT4O_CUTOFF
            }
            _ => LEGACY_CUTOFF,
        }
    }

    /// Documented output-token ceiling, where the vendor publishes one
    /// separately from the context window.
    pub fn max_output_tokens(self) -> Option<usize> {
        match self {
            Self::Gpt4_1106Preview | Self::Gpt4VisionPreview | Self::Gpt35Turbo1106 => {
                Some(4_096)
            }
            _ => None,
        }
    }

    /// Whether this is a dated snapshot that will not receive updates.
    pub fn is_snapshot(self) -> bool {
        matches!(
            self,
            Self::Gpt4_0125Preview
                | Self::Gpt4_1106Preview
                | Self::Gpt4_0613
                | Self::Gpt4_32k0613
                | Self::Gpt4o20241120
                | Self::Gpt4o20240806
                | Self::Gpt4o20240513
                | Self::Gpt4oMini20240718
                | Self::Gpt35Turbo1106
                | Self::Gpt35Turbo0613
                | Self::Gpt35Turbo16k0613
                | Self::Gpt35Turbo0301
        )
    }

    /// Preview models are not meant for production traffic.
    pub fn is_preview(self) -> bool {
        matches!(
            self,
            Self::Gpt4_0125Preview
                | Self::Gpt4TurboPreview
                | Self::Gpt4_1106Preview
                | Self::Gpt4VisionPreview
        )
    }

    /// Whether the model accepts image inputs.
    pub fn supports_vision(self) -> bool {
        self == Self::Gpt4VisionPreview
            || matches!(self.family(), ModelFamily::Gpt4o | ModelFamily::Gpt4oMini)
    }

    /// `gpt-3.5-turbo-instruct` only works with the legacy Completions endpoint.
    pub fn supports_chat_completions(self) -> bool {
        self != Self::Gpt35TurboInstruct
    }

    /// The dated snapshot an undated alias pointed at when this catalog was
    /// last revised.
    ///
    /// Informational only: the alias keeps its own wire identifier because the
    /// vendor can repoint it at any time.
    pub fn documented_alias_target(self) -> Option<ChatModel> {
        match self {
            Self::Gpt4TurboPreview => Some(Self::Gpt4_0125Preview),
            Self::Gpt4o => Some(Self::Gpt4o20240806),
            Self::Gpt4oMini => Some(Self::Gpt4oMini20240718),
            _ => None,
        }
    }

    pub fn deprecation(self) -> Option<Deprecation> {
        match self {
            Self::Gpt35Turbo0613 | Self::Gpt35Turbo16k0613 | Self::Gpt35Turbo0301 => {
                Some(Deprecation {
                    replacement: Self::Gpt35Turbo1106,
                    message: OPENAI_DEPRECATION_NOTICE,
                })
            }
            _ => None,
        }
    }

    pub fn is_deprecated(self) -> bool {
        self.deprecation().is_some()
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Gpt4_0125Preview => {
                "GPT-4 Turbo preview tuned to reduce cases where the model leaves a task unfinished."
            }
            Self::Gpt4TurboPreview => "Alias for the current GPT-4 Turbo preview.",
            Self::Gpt4_1106Preview => {
                "GPT-4 Turbo preview with improved instruction following, JSON mode, reproducible outputs and parallel function calling."
            }
            Self::Gpt4VisionPreview => "GPT-4 Turbo preview that also understands images.",
            Self::Gpt4 => "GPT-4 optimized for chat, updated with each model iteration.",
            Self::Gpt4_0613 => "Snapshot of gpt-4 from June 13th 2023 with function calling data.",
            Self::Gpt4_32k => "GPT-4 with four times the context length.",
            Self::Gpt4_32k0613 => "Snapshot of gpt-4-32k from June 13th 2023.",
            Self::Gpt4o => {
                "Versatile multimodal flagship: text and image input, text output, Structured Outputs."
            }
            Self::Gpt4o20241120 => "Snapshot of gpt-4o from November 20th 2024.",
            Self::Gpt4o20240806 => "Snapshot of gpt-4o from August 6th 2024.",
            Self::Gpt4o20240513 => "Snapshot of gpt-4o from May 13th 2024.",
            Self::ChatGpt4oLatest => "The gpt-4o build currently used in ChatGPT.",
            Self::Gpt4oMini => {
                "Fast, affordable small model for focused tasks; suited to fine-tuning and distillation."
            }
            Self::Gpt4oMini20240718 => "Snapshot of gpt-4o-mini from July 18th 2024.",
            Self::Gpt35Turbo1106 => {
                "GPT-3.5 Turbo with improved instruction following, JSON mode and parallel function calling."
            }
            Self::Gpt35Turbo => "GPT-3.5 optimized for chat, updated with each model iteration.",
            Self::Gpt35Turbo16k => "gpt-3.5-turbo with four times the context.",
            Self::Gpt35TurboInstruct => {
                "GPT-3 era capabilities for the legacy Completions endpoint, not Chat Completions."
            }
            Self::Gpt35Turbo0613 => {
                "Snapshot of gpt-3.5-turbo from June 13th 2023 with function calling data."
            }
            Self::Gpt35Turbo16k0613 => "Snapshot of gpt-3.5-turbo-16k from June 13th 2023.",
            Self::Gpt35Turbo0301 => "Snapshot of gpt-3.5-turbo from March 1st 2023.",
        }
    }

    /// Whether the model honors `response_format: {"type": "json_object"}`.
    pub fn supports_json_mode(self) -> bool {
        matches!(
            self,
            Self::Gpt4_0125Preview
                | Self::Gpt4TurboPreview
                | Self::Gpt4_1106Preview
                | Self::Gpt35Turbo1106
        ) || matches!(self.family(), ModelFamily::Gpt4o | ModelFamily::Gpt4oMini)
    }

    /// Whether the model supports Structured Outputs (`json_schema`).
    pub fn supports_json_schema(self) -> bool {
        self != Self::Gpt4o20240513
            && matches!(self.family(), ModelFamily::Gpt4o | ModelFamily::Gpt4oMini)
    }

    pub fn supports_tools(self) -> bool {
        self.supports_chat_completions()
            && !matches!(self, Self::Gpt4VisionPreview | Self::Gpt35Turbo0301)
    }

    pub fn capabilities(self) -> ModelCapabilities {
        ModelCapabilities {
            supports_vision: self.supports_vision(),
            supports_tools: self.supports_tools(),
            supports_streaming: true,
            supports_json_mode: self.supports_json_mode(),
            supports_json_schema: self.supports_json_schema(),
            supports_reasoning: false,
            supports_system_messages: self.supports_chat_completions(),
            context_length: self.context_window(),
            max_output_tokens: self.max_output_tokens(),
        }
    }
}

impl FromStr for ChatModel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        wire_table()
            .get(s)
            .copied()
            .ok_or_else(|| CatalogError::UnrecognizedIdentifier(s.to_string()))
    }
}

impl TryFrom<&str> for ChatModel {
    type Error = CatalogError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl Serialize for ChatModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChatModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
