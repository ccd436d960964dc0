//! Model selection and parsing.

use tracing::debug;

use super::openai::ChatModel;
use crate::error::CatalogError;

/// Provider prefix accepted in qualified selectors.
pub const OPENAI_PROVIDER: &str = "openai";

/// Parse "provider:model_id" (or a bare model id) into a [`ChatModel`].
pub struct ModelSelector;

impl ModelSelector {
    /// Parse `"openai:<id>"` or `"<id>"` into a ChatModel.
    ///
    /// The model id is matched exactly; only the `openai` provider is known
    /// to this catalog.
    pub fn parse(s: &str) -> Result<ChatModel, CatalogError> {
        let model_id = match s.split_once(':') {
            Some((OPENAI_PROVIDER, model_id)) => model_id,
            Some((provider, _)) => {
                return Err(CatalogError::InvalidArgument(format!(
                    "Invalid model selector '{s}': unsupported provider '{provider}'"
                )));
            }
            None => s,
        };

        let model: ChatModel = model_id.parse()?;
        debug!(selector = s, model = %model, "resolved model selector");
        Ok(model)
    }

    /// Format a model as a provider-qualified selector.
    pub fn qualified(model: ChatModel) -> String {
        format!("{OPENAI_PROVIDER}:{model}")
    }
}
