//! chatmodel: typed catalog of OpenAI chat-completion model identifiers.
//!
//! Each [`ChatModel`](models::ChatModel) variant maps to exactly one wire
//! identifier. Encoding is total, decoding is exact and case-sensitive, and an
//! unknown identifier is always an error rather than a fallback.
//!
//! # Quick Start
//!
//! ```
//! use chatmodel::prelude::*;
//!
//! let model: ChatModel = "gpt-4o-mini".parse()?;
//! assert_eq!(model.as_str(), "gpt-4o-mini");
//! assert_eq!(model.context_window(), 128_000);
//!
//! let legacy = ChatModel::Gpt35Turbo0301;
//! assert_eq!(legacy.deprecation().map(|d| d.replacement), Some(ChatModel::Gpt35Turbo1106));
//! # Ok::<(), CatalogError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod prelude;

#[cfg(feature = "cli")]
pub mod cli;
