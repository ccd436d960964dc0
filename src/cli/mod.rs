//! CLI entry point for the model catalog.

pub mod catalog;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::ModelFamily;

/// OpenAI chat model catalog
#[derive(Parser, Debug)]
#[command(name = "chatmodel", version, about = "Inspect OpenAI chat-completion model identifiers")]
pub struct Cli {
    /// Config file (defaults to chatmodel.toml in the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known model identifiers
    List(ListArgs),
    /// Show metadata for one model
    Show(ShowArgs),
    /// Validate a model identifier against the catalog and deprecation policy
    Check(CheckArgs),
}

/// Arguments for `chatmodel list`.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only list one family (gpt-4, gpt-4o, gpt-4o-mini, gpt-3.5)
    #[arg(short, long)]
    pub family: Option<ModelFamily>,

    /// Hide deprecated models
    #[arg(long)]
    pub no_deprecated: bool,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `chatmodel show`.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Model id, optionally prefixed with `openai:`
    pub model: String,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `chatmodel check`.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Model id, optionally prefixed with `openai:`
    pub model: String,
}
