//! Trigger configuration

use serde::Deserialize;

/// Which events trigger a validation pass.
///
/// Immutable after construction. Deserializes from a partial object:
/// unspecified options fall back to the defaults below.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    /// Revalidate when a tracked field loses focus.
    pub validate_on_blur: bool,
    /// Revalidate on every value change of a tracked field.
    pub validate_on_entry: bool,
    /// Intercept form submission (always suppressing the default action)
    /// and revalidate.
    pub validate_on_submit: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            validate_on_blur: false,
            validate_on_entry: true,
            validate_on_submit: true,
        }
    }
}
