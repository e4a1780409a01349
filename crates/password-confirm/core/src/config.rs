use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::messages::{Locale, MessageOverrides, Messages};

/// Guard configuration.
///
/// Arrives as a JavaScript options object in the browser, or from
/// `password-confirm.toml` on the server that renders the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardConfig {
    #[serde(default)]
    pub ids: ElementIds,
    #[serde(default)]
    pub classes: StyleClasses,
    #[serde(default)]
    pub locale: Locale,
    #[serde(default)]
    pub messages: MessageOverrides,
}

/// Element identifiers the guard looks up in the host page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementIds {
    #[serde(default = "default_password_id")]
    pub password: String,
    #[serde(default = "default_confirmation_id")]
    pub confirmation: String,
    #[serde(default = "default_feedback_id")]
    pub feedback: String,
    #[serde(default = "default_form_id")]
    pub form: String,
    #[serde(default = "default_submit_id")]
    pub submit: String,
}

/// Class names shared with the host page's stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleClasses {
    #[serde(default = "default_text_success")]
    pub text_success: String,
    #[serde(default = "default_text_danger")]
    pub text_danger: String,
    #[serde(default = "default_border_success")]
    pub border_success: String,
    #[serde(default = "default_border_danger")]
    pub border_danger: String,
}

fn default_password_id() -> String {
    "new_password".into()
}
fn default_confirmation_id() -> String {
    "confirm_password".into()
}
fn default_feedback_id() -> String {
    "passwordFeedback".into()
}
fn default_form_id() -> String {
    "passwordForm".into()
}
fn default_submit_id() -> String {
    "submitBtn".into()
}
fn default_text_success() -> String {
    "text-success".into()
}
fn default_text_danger() -> String {
    "text-danger".into()
}
fn default_border_success() -> String {
    "border-success".into()
}
fn default_border_danger() -> String {
    "border-danger".into()
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            password: default_password_id(),
            confirmation: default_confirmation_id(),
            feedback: default_feedback_id(),
            form: default_form_id(),
            submit: default_submit_id(),
        }
    }
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            text_success: default_text_success(),
            text_danger: default_text_danger(),
            border_success: default_border_success(),
            border_danger: default_border_danger(),
        }
    }
}

impl GuardConfig {
    /// Load from `password-confirm.toml` in the current directory.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("password-confirm.toml")
    }

    /// Load from a specific path.
    /// Returns default config if the file doesn't exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents).map_err(|e| {
                tracing::warn!("failed to parse {}: {}", path.display(), e);
                e
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Messages for the configured locale with overrides applied
    pub fn messages(&self) -> Messages {
        Messages::resolve(self.locale, &self.messages)
    }
}
