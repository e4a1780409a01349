//! Feedback state derived from the password / confirmation pair

use serde::Serialize;

/// Visual tone applied to the feedback label and confirmation field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Danger,
}

/// Live feedback for the confirmation field.
///
/// Always recomputed from the current field values, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackState {
    /// Confirmation field is empty
    Empty,
    /// Both fields hold exactly the same value
    Match,
    /// Confirmation is non-empty and differs from the password
    Mismatch,
}

impl FeedbackState {
    /// Derives the state from the two raw field values.
    ///
    /// Comparison is exact and case-sensitive. An empty confirmation is
    /// `Empty` whatever the password holds.
    ///
    /// # Examples
    /// ```
    /// use password_confirm_core::FeedbackState;
    /// assert_eq!(FeedbackState::evaluate("abc", ""), FeedbackState::Empty);
    /// assert_eq!(FeedbackState::evaluate("abc", "abc"), FeedbackState::Match);
    /// assert_eq!(FeedbackState::evaluate("abc", "ABC"), FeedbackState::Mismatch);
    /// ```
    pub fn evaluate(password: &str, confirmation: &str) -> Self {
        if confirmation.is_empty() {
            FeedbackState::Empty
        } else if passwords_match(password, confirmation) {
            FeedbackState::Match
        } else {
            FeedbackState::Mismatch
        }
    }

    /// Tone to display, `None` means every tone class is cleared
    pub fn tone(self) -> Option<Tone> {
        match self {
            FeedbackState::Empty => None,
            FeedbackState::Match => Some(Tone::Success),
            FeedbackState::Mismatch => Some(Tone::Danger),
        }
    }

    /// Whether the submit control should be disabled.
    ///
    /// `None` leaves the control as it is. The empty state does not reset a
    /// control that an earlier mismatch disabled.
    pub fn submit_disabled(self) -> Option<bool> {
        match self {
            FeedbackState::Empty => None,
            FeedbackState::Match => Some(false),
            FeedbackState::Mismatch => Some(true),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackState::Empty => "empty",
            FeedbackState::Match => "match",
            FeedbackState::Mismatch => "mismatch",
        }
    }
}

/// Exact equality of the two raw values, as checked at submit time
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}
