//! # Widget Configuration
//!
//! Settings the host page can override. Every field has a default, so an empty
//! or partial JSON object is a valid configuration. Values are validated once
//! at startup to fail fast on a broken host page.
//!
//! ```rust
//! use lib_core::config::WidgetConfig;
//!
//! let config: WidgetConfig = serde_json::from_str(r#"{"api_base":"https://qa.example.com"}"#).unwrap();
//! config.validate().unwrap();
//! assert_eq!(config.endpoint("/api/ask"), "https://qa.example.com/api/ask");
//! assert_eq!(config.history_window, 60);
//! ```

use serde::{Deserialize, Serialize};

use lib_utils::validation::{validate_class_name, validate_slug};

use crate::error::{AppError, Result};

/// A value/label pair rendered as a `<select>` option
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Widget configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Prefix for every backend endpoint; empty means same origin
    pub api_base: String,

    /// Version used when the page does not name one
    pub default_version: String,

    /// Theme class applied when nothing is stored
    pub default_theme: String,

    /// Themes offered in the settings menu
    pub themes: Vec<ChoiceOption>,

    /// Versions offered in the header; `value` is the `/v/<slug>` path segment
    pub versions: Vec<ChoiceOption>,

    /// Most recent history items shown
    pub history_window: usize,

    /// Characters of each history item shown
    pub history_excerpt_chars: usize,

    /// Guided-mode suggestions shown at once
    pub suggestion_limit: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_version: "RelativityOne".to_string(),
            default_theme: "theme-purple".to_string(),
            themes: vec![
                ChoiceOption::new("theme-purple", "Purple"),
                ChoiceOption::new("theme-dark", "Dark"),
                ChoiceOption::new("theme-light", "Light"),
            ],
            versions: vec![
                ChoiceOption::new("RelativityOne", "Relativity One"),
                ChoiceOption::new("Server2024", "Server 2024"),
                ChoiceOption::new("Server2023", "Server 2023"),
            ],
            history_window: 60,
            history_excerpt_chars: 160,
            suggestion_limit: 60,
        }
    }
}

impl WidgetConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.api_base.ends_with('/') {
            return Err(AppError::Config("api_base must not end with '/'".to_string()));
        }

        validate_class_name(&self.default_theme).map_err(AppError::Config)?;
        for theme in &self.themes {
            validate_class_name(&theme.value).map_err(AppError::Config)?;
        }
        for version in &self.versions {
            validate_slug(&version.value).map_err(AppError::Config)?;
        }

        if self.history_window == 0 || self.suggestion_limit == 0 || self.history_excerpt_chars == 0 {
            return Err(AppError::Config("display limits must be greater than zero".to_string()));
        }

        Ok(())
    }

    /// Absolute or origin-relative URL of a backend path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Page that hosts the widget for `slug`.
    pub fn version_path(slug: &str) -> String {
        format!("/v/{}", slug)
    }
}
