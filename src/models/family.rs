//! Model family grouping.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Product line a chat model belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ModelFamily {
    #[serde(rename = "gpt-4")]
    #[strum(serialize = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-4o")]
    #[strum(serialize = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "gpt-4o-mini")]
    #[strum(serialize = "gpt-4o-mini")]
    Gpt4oMini,
    #[serde(rename = "gpt-3.5")]
    #[strum(serialize = "gpt-3.5")]
    Gpt35,
}

impl ModelFamily {
    /// Human-readable family label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Gpt4 => "GPT-4",
            Self::Gpt4o => "GPT-4o",
            Self::Gpt4oMini => "GPT-4o mini",
            Self::Gpt35 => "GPT-3.5",
        }
    }
}
