//! Form guard: keeps feedback and the submit control in sync with the fields

use crate::config::{GuardConfig, StyleClasses};
use crate::feedback::{passwords_match, FeedbackState, Tone};
use crate::messages::Messages;

/// What the guard reads from and writes to.
///
/// Implemented over DOM elements by the WASM bindings and over plain
/// structs in tests. Methods take `&self` because page elements are
/// mutated through shared handles.
pub trait FormSurface {
    fn password(&self) -> String;
    fn confirmation(&self) -> String;

    fn set_feedback_text(&self, text: &str);

    /// Adds (`on = true`) or removes a class on the feedback label
    fn set_label_class(&self, class: &str, on: bool);

    /// Adds (`on = true`) or removes a class on the confirmation field
    fn set_field_class(&self, class: &str, on: bool);

    /// No-op when the page has no submit control
    fn set_submit_disabled(&self, disabled: bool);

    /// Blocking notification shown when a mismatched form is submitted
    fn alert(&self, message: &str);
}

/// Outcome of the submit-time check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Let the browser submit the form
    Allow,
    /// Cancel the submission, the user has been alerted
    Block,
}

impl SubmitDecision {
    pub fn is_blocked(self) -> bool {
        self == SubmitDecision::Block
    }
}

pub struct FormGuard<S> {
    surface: S,
    classes: StyleClasses,
    messages: Messages,
}

impl<S: FormSurface> FormGuard<S> {
    pub fn new(surface: S, config: &GuardConfig) -> Self {
        Self {
            surface,
            classes: config.classes.clone(),
            messages: config.messages(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Current state of the fields, without touching the surface
    pub fn state(&self) -> FeedbackState {
        FeedbackState::evaluate(&self.surface.password(), &self.surface.confirmation())
    }

    /// Recomputes feedback from the current values and applies it.
    ///
    /// Runs on every input event of either field.
    pub fn refresh(&self) -> FeedbackState {
        let state = self.state();
        tracing::trace!(state = state.as_str(), "password confirmation refreshed");

        let text = match state {
            FeedbackState::Empty => "",
            FeedbackState::Match => self.messages.matched.as_str(),
            FeedbackState::Mismatch => self.messages.mismatched.as_str(),
        };
        self.surface.set_feedback_text(text);
        self.apply_tone(state.tone());

        if let Some(disabled) = state.submit_disabled() {
            self.surface.set_submit_disabled(disabled);
        }

        state
    }

    /// Final equality check when the form is submitted
    pub fn check_submit(&self) -> SubmitDecision {
        if passwords_match(&self.surface.password(), &self.surface.confirmation()) {
            return SubmitDecision::Allow;
        }

        tracing::debug!("blocked submission with mismatched confirmation");
        self.surface.alert(&self.messages.submit_mismatch);
        SubmitDecision::Block
    }

    // Removals go first so a label never carries both tones.
    fn apply_tone(&self, tone: Option<Tone>) {
        let classes = &self.classes;

        if tone != Some(Tone::Success) {
            self.surface.set_label_class(&classes.text_success, false);
            self.surface.set_field_class(&classes.border_success, false);
        }
        if tone != Some(Tone::Danger) {
            self.surface.set_label_class(&classes.text_danger, false);
            self.surface.set_field_class(&classes.border_danger, false);
        }

        match tone {
            Some(Tone::Success) => {
                self.surface.set_label_class(&classes.text_success, true);
                self.surface.set_field_class(&classes.border_success, true);
            }
            Some(Tone::Danger) => {
                self.surface.set_label_class(&classes.text_danger, true);
                self.surface.set_field_class(&classes.border_danger, true);
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        password: String,
        confirmation: String,
        calls: RefCell<Vec<String>>,
    }

    impl FormSurface for Recorder {
        fn password(&self) -> String {
            self.password.clone()
        }
        fn confirmation(&self) -> String {
            self.confirmation.clone()
        }
        fn set_feedback_text(&self, text: &str) {
            self.calls.borrow_mut().push(format!("text:{text}"));
        }
        fn set_label_class(&self, class: &str, on: bool) {
            self.calls.borrow_mut().push(format!("label:{class}:{on}"));
        }
        fn set_field_class(&self, class: &str, on: bool) {
            self.calls.borrow_mut().push(format!("field:{class}:{on}"));
        }
        fn set_submit_disabled(&self, disabled: bool) {
            self.calls.borrow_mut().push(format!("disabled:{disabled}"));
        }
        fn alert(&self, message: &str) {
            self.calls.borrow_mut().push(format!("alert:{message}"));
        }
    }

    fn guard(password: &str, confirmation: &str) -> FormGuard<Recorder> {
        let surface = Recorder {
            password: password.to_string(),
            confirmation: confirmation.to_string(),
            ..Default::default()
        };
        FormGuard::new(surface, &GuardConfig::default())
    }

    #[test]
    fn test_mismatch_removes_success_before_adding_danger() {
        let guard = guard("abc", "abd");
        assert_eq!(guard.refresh(), FeedbackState::Mismatch);

        let calls = guard.surface().calls.borrow();
        assert_eq!(
            *calls,
            vec![
                "text:密碼不匹配",
                "label:text-success:false",
                "field:border-success:false",
                "label:text-danger:true",
                "field:border-danger:true",
                "disabled:true",
            ]
        );
    }

    #[test]
    fn test_empty_never_touches_submit() {
        let guard = guard("abc", "");
        assert_eq!(guard.refresh(), FeedbackState::Empty);

        let calls = guard.surface().calls.borrow();
        assert_eq!(calls[0], "text:");
        assert!(calls.iter().all(|c| !c.starts_with("disabled")));
        assert!(calls.iter().all(|c| !c.ends_with(":true")));
    }

    #[test]
    fn test_submit_alerts_once_on_mismatch() {
        let guard = guard("abc", "abd");
        assert_eq!(guard.check_submit(), SubmitDecision::Block);

        let calls = guard.surface().calls.borrow();
        assert_eq!(*calls, vec!["alert:確認密碼與新密碼不符"]);
    }

    #[test]
    fn test_submit_with_empty_pair_is_allowed() {
        let guard = guard("", "");
        assert_eq!(guard.check_submit(), SubmitDecision::Allow);
        assert!(guard.surface().calls.borrow().is_empty());
    }

    #[test]
    fn test_state_does_not_mutate_surface() {
        let guard = guard("abc", "abc");
        assert_eq!(guard.state(), FeedbackState::Match);
        assert!(guard.surface().calls.borrow().is_empty());
    }
}
