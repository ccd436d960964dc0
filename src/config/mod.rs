//! Configuration system (layered: code > env > config file > defaults).

pub mod policy;

pub use policy::DeprecationPolicy;

use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CatalogError, Result};
use crate::models::{ChatModel, ModelSelector};

/// Environment variable selecting the default model (`gpt-4o`, `openai:gpt-4o`).
pub const ENV_DEFAULT_MODEL: &str = "CHATMODEL_DEFAULT_MODEL";
/// Environment variable selecting the [`DeprecationPolicy`].
pub const ENV_DEPRECATION_POLICY: &str = "CHATMODEL_DEPRECATION_POLICY";
/// File name looked up in the user's config directory.
pub const CONFIG_FILE_NAME: &str = "chatmodel.toml";

/// Layered configuration for model selection.
///
/// Resolution order:
/// 1. Explicit values (builder or `with_*` setters)
/// 2. Environment variables (a `.env` file is loaded first if present)
/// 3. `chatmodel.toml` in the user's config directory
/// 4. Built-in defaults
///
/// ```
/// use chatmodel::config::{CatalogConfig, DeprecationPolicy};
/// use chatmodel::models::ChatModel;
///
/// let config = CatalogConfig::builder()
///     .default_model(ChatModel::Gpt4oMini)
///     .deprecation_policy(DeprecationPolicy::Deny)
///     .build();
/// assert!(config.resolve(ChatModel::Gpt35Turbo0301).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    #[builder(default = ChatModel::Gpt4o)]
    pub default_model: ChatModel,
    #[builder(default)]
    pub deprecation_policy: DeprecationPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_model: ChatModel::Gpt4o,
            deprecation_policy: DeprecationPolicy::default(),
        }
    }
}

impl CatalogConfig {
    /// Default config file location, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chatmodel")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Parse a TOML config file. A missing file is an error here.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&raw)?;
        debug!(path = %path.display(), model = %config.default_model, "loaded model config file");
        Ok(config)
    }

    /// Load the file at `path` (or the default location), then overlay the
    /// environment. A missing file falls back to defaults.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        let base = match path {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => config,
                Err(CatalogError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
                    debug!(path = %path.display(), "no model config file, using defaults");
                    Self::default()
                }
                Err(err) => return Err(err),
            },
            None => Self::default(),
        };

        base.with_env_from(|key| std::env::var(key).ok())
    }

    /// Load from the default config file location and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Overlay values from an environment lookup.
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_DEFAULT_MODEL) {
            self.default_model = ModelSelector::parse(&raw)?;
        }
        if let Some(raw) = lookup(ENV_DEPRECATION_POLICY) {
            self.deprecation_policy = raw.parse().map_err(|_| {
                CatalogError::Configuration(format!(
                    "{ENV_DEPRECATION_POLICY}='{raw}': expected one of allow, warn, deny"
                ))
            })?;
        }
        Ok(self)
    }

    pub fn with_default_model(mut self, model: ChatModel) -> Self {
        self.default_model = model;
        self
    }

    pub fn with_deprecation_policy(mut self, policy: DeprecationPolicy) -> Self {
        self.deprecation_policy = policy;
        self
    }

    /// Apply the deprecation policy to `model`.
    pub fn resolve(&self, model: ChatModel) -> Result<ChatModel> {
        let Some(deprecation) = model.deprecation() else {
            return Ok(model);
        };

        match self.deprecation_policy {
            DeprecationPolicy::Allow => Ok(model),
            DeprecationPolicy::Warn => {
                warn!(
                    model = %model,
                    replacement = %deprecation.replacement,
                    "{}",
                    deprecation.message
                );
                Ok(model)
            }
            DeprecationPolicy::Deny => Err(CatalogError::Deprecated {
                model,
                replacement: deprecation.replacement,
            }),
        }
    }

    /// Parse a selector or bare model id, then apply the deprecation policy.
    pub fn resolve_str(&self, selector: &str) -> Result<ChatModel> {
        self.resolve(ModelSelector::parse(selector)?)
    }

    /// The configured default model, with the deprecation policy applied.
    pub fn resolved_default(&self) -> Result<ChatModel> {
        self.resolve(self.default_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn resolve_with_logs(config: &CatalogConfig, model: ChatModel) -> (Result<ChatModel>, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();
        let result = tracing::subscriber::with_default(subscriber, || config.resolve(model));
        (result, logs.contents())
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_gpt4o_with_warn_policy() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_model, ChatModel::Gpt4o);
        assert_eq!(config.deprecation_policy, DeprecationPolicy::Warn);
        assert_eq!(CatalogConfig::builder().build(), config);
    }

    #[test]
    fn env_overrides_file_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "default_model = \"gpt-4\"\ndeprecation_policy = \"deny\"\n").unwrap();

        let config = CatalogConfig::from_file(&path)
            .unwrap()
            .with_env_from(lookup(&[(ENV_DEFAULT_MODEL, "openai:gpt-4o-mini")]))
            .unwrap();

        assert_eq!(config.default_model, ChatModel::Gpt4oMini);
        assert_eq!(config.deprecation_policy, DeprecationPolicy::Deny);
    }

    #[test]
    fn env_with_unknown_model_is_error() {
        let err = CatalogConfig::default()
            .with_env_from(lookup(&[(ENV_DEFAULT_MODEL, "gpt-5-ultra")]))
            .unwrap_err();
        assert_eq!(err.unrecognized_identifier(), Some("gpt-5-ultra"));
    }

    #[test]
    fn env_with_bad_policy_is_configuration_error() {
        let err = CatalogConfig::default()
            .with_env_from(lookup(&[(ENV_DEPRECATION_POLICY, "sometimes")]))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Configuration(_)));
    }

    #[test]
    fn explicit_setter_wins_over_env() {
        let config = CatalogConfig::default()
            .with_env_from(lookup(&[(ENV_DEFAULT_MODEL, "gpt-4")]))
            .unwrap()
            .with_default_model(ChatModel::Gpt4_32k);
        assert_eq!(config.default_model, ChatModel::Gpt4_32k);
    }

    #[test]
    fn file_with_unknown_model_is_toml_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "default_model = \"GPT-4\"\n").unwrap();

        let err = CatalogConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Toml(_)));
        assert!(err.to_string().contains("GPT-4"));
    }

    #[test]
    fn file_with_unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "model = \"gpt-4\"\n").unwrap();

        assert!(matches!(
            CatalogConfig::from_file(&path),
            Err(CatalogError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = CatalogConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "deprecation_policy = \"allow\"\n").unwrap();

        let config = CatalogConfig::from_file(&path).unwrap();
        assert_eq!(config.default_model, ChatModel::Gpt4o);
        assert_eq!(config.deprecation_policy, DeprecationPolicy::Allow);
    }

    #[test]
    fn policies_never_substitute_models() {
        for policy in [DeprecationPolicy::Allow, DeprecationPolicy::Warn] {
            let config = CatalogConfig::default().with_deprecation_policy(policy);
            assert_eq!(
                config.resolve(ChatModel::Gpt35Turbo0613).unwrap(),
                ChatModel::Gpt35Turbo0613
            );
        }

        let deny = CatalogConfig::default().with_deprecation_policy(DeprecationPolicy::Deny);
        match deny.resolve(ChatModel::Gpt35Turbo16k0613) {
            Err(CatalogError::Deprecated { model, replacement }) => {
                assert_eq!(model, ChatModel::Gpt35Turbo16k0613);
                assert_eq!(replacement, ChatModel::Gpt35Turbo1106);
            }
            other => panic!("expected deprecated error, got {other:?}"),
        }
        assert_eq!(deny.resolve(ChatModel::Gpt4o).unwrap(), ChatModel::Gpt4o);
    }

    #[test]
    fn warn_policy_logs_replacement() {
        let config = CatalogConfig::default();
        let (result, logs) = resolve_with_logs(&config, ChatModel::Gpt35Turbo0613);
        assert_eq!(result.unwrap(), ChatModel::Gpt35Turbo0613);
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("Will be deprecated by OpenAI."), "{logs}");
        assert!(logs.contains("model=gpt-3.5-turbo-0613"), "{logs}");
        assert!(logs.contains("replacement=gpt-3.5-turbo-1106"), "{logs}");
    }

    #[test]
    fn allow_policy_and_current_models_log_nothing() {
        let allow = CatalogConfig::default().with_deprecation_policy(DeprecationPolicy::Allow);
        let (_, logs) = resolve_with_logs(&allow, ChatModel::Gpt35Turbo0301);
        assert!(logs.is_empty(), "{logs}");

        let (_, logs) = resolve_with_logs(&CatalogConfig::default(), ChatModel::Gpt4o);
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn resolve_str_parses_then_applies_policy() {
        let deny = CatalogConfig::default().with_deprecation_policy(DeprecationPolicy::Deny);
        assert!(deny.resolve_str("openai:gpt-3.5-turbo-0301").is_err());
        assert_eq!(deny.resolve_str("gpt-4-0613").unwrap(), ChatModel::Gpt4_0613);
    }
}
