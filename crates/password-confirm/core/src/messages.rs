//! User-facing feedback messages

use serde::Deserialize;

/// Built-in message table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-TW", alias = "zh-tw", alias = "zh_TW")]
    ZhTw,
    #[serde(rename = "en", alias = "en-US")]
    En,
}

/// Per-message replacements for the built-in table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageOverrides {
    #[serde(default)]
    pub matched: Option<String>,
    #[serde(default)]
    pub mismatched: Option<String>,
    #[serde(default)]
    pub submit_mismatch: Option<String>,
}

/// The three texts a guard can show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// Label text when both fields match
    pub matched: String,
    /// Label text when the confirmation differs
    pub mismatched: String,
    /// Alert text when a mismatched form is submitted
    pub submit_mismatch: String,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        let (matched, mismatched, submit_mismatch) = match locale {
            Locale::ZhTw => ("密碼匹配", "密碼不匹配", "確認密碼與新密碼不符"),
            Locale::En => (
                "Passwords match",
                "Passwords do not match",
                "The confirmation does not match the new password",
            ),
        };
        Self {
            matched: matched.to_string(),
            mismatched: mismatched.to_string(),
            submit_mismatch: submit_mismatch.to_string(),
        }
    }

    /// Builds the table for `locale`, then applies any overrides
    pub fn resolve(locale: Locale, overrides: &MessageOverrides) -> Self {
        let mut messages = Self::for_locale(locale);
        if let Some(ref text) = overrides.matched {
            messages.matched = text.clone();
        }
        if let Some(ref text) = overrides.mismatched {
            messages.mismatched = text.clone();
        }
        if let Some(ref text) = overrides.submit_mismatch {
            messages.submit_mismatch = text.clone();
        }
        messages
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
