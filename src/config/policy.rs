//! How deprecated models are treated when resolved through config.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Policy applied by [`super::CatalogConfig::resolve`].
///
/// No policy ever swaps in a different model; `Deny` refuses instead.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DeprecationPolicy {
    /// Accept deprecated models silently.
    Allow,
    /// Accept deprecated models and emit a warning event.
    #[default]
    Warn,
    /// Reject deprecated models with [`crate::error::CatalogError::Deprecated`].
    Deny,
}
