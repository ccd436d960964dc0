//! Handlers for `list`, `show` and `check`.

use std::io::Write;

use crate::config::{CatalogConfig, DeprecationPolicy};
use crate::error::Result;
use crate::models::{ChatModel, ModelInfo, ModelSelector};

use super::{CheckArgs, ListArgs, ShowArgs};

/// Handle `chatmodel list`.
pub fn handle_list(args: &ListArgs, out: &mut impl Write) -> Result<()> {
    let models: Vec<ChatModel> = ChatModel::all()
        .into_iter()
        .filter(|m| args.family.map_or(true, |f| m.family() == f))
        .filter(|m| !(args.no_deprecated && m.is_deprecated()))
        .collect();

    if args.json {
        let infos: Vec<ModelInfo> = models.into_iter().map(ChatModel::info).collect();
        serde_json::to_writer_pretty(&mut *out, &infos)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:<24} {:<12} {:>9}  {:<9} NOTES", "ID", "FAMILY", "CONTEXT", "CUTOFF")?;
    for model in models {
        writeln!(
            out,
            "{:<24} {:<12} {:>9}  {:<9} {}",
            model.as_str(),
            model.family().label(),
            model.context_window(),
            model.knowledge_cutoff().to_string(),
            notes(model)
        )?;
    }
    Ok(())
}

/// Handle `chatmodel show <model>`.
pub fn handle_show(args: &ShowArgs, out: &mut impl Write) -> Result<()> {
    let model = ModelSelector::parse(&args.model)?;
    let info = model.info();

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &info)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", info.id)?;
    writeln!(out, "  {}", info.description)?;
    writeln!(out, "  family:            {}", model.family().label())?;
    writeln!(out, "  context window:    {}", info.context_window)?;
    if let Some(max) = info.max_output_tokens {
        writeln!(out, "  max output tokens: {max}")?;
    }
    writeln!(out, "  training data:     up to {}", info.knowledge_cutoff)?;
    writeln!(out, "  snapshot:          {}", yes_no(info.snapshot))?;
    writeln!(out, "  preview:           {}", yes_no(info.preview))?;
    writeln!(out, "  chat completions:  {}", yes_no(info.chat_completions))?;
    writeln!(out, "  vision:            {}", yes_no(info.capabilities.supports_vision))?;
    if let Some(alias_of) = info.alias_of {
        writeln!(out, "  currently points to {alias_of}")?;
    }
    if let Some(dep) = &info.deprecated {
        writeln!(out, "  deprecated: {} Use {}.", dep.message, dep.replacement)?;
    }
    Ok(())
}

/// Handle `chatmodel check <model>`.
///
/// Deprecated models pass unless the policy denies them; under `warn` a
/// warning naming the replacement goes to `err`.
pub fn handle_check(
    args: &CheckArgs,
    config: &CatalogConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    let model = config.resolve_str(&args.model)?;
    if let Some(dep) = model.deprecation() {
        if config.deprecation_policy == DeprecationPolicy::Warn {
            writeln!(
                err,
                "warning: {model} is deprecated: {} Use {}.",
                dep.message, dep.replacement
            )?;
        }
    }
    writeln!(out, "{model}: ok")?;
    Ok(())
}

fn notes(model: ChatModel) -> String {
    let mut notes = Vec::new();
    if model.is_preview() {
        notes.push("preview".to_string());
    }
    if !model.supports_chat_completions() {
        notes.push("completions only".to_string());
    }
    if let Some(target) = model.documented_alias_target() {
        notes.push(format!("alias of {target}"));
    }
    if let Some(dep) = model.deprecation() {
        notes.push(format!("deprecated -> {}", dep.replacement));
    }
    notes.join(", ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
