//! `FormSurface` over live DOM elements

use js_sys::Function;
use password_confirm_core::FormSurface;
use wasm_bindgen::JsValue;

use crate::handles::GuardHandles;

/// How a blocked submission is reported to the user
#[derive(Debug, Clone)]
pub enum Alerter {
    /// `window.alert`
    Window,
    /// A page-supplied function called with the message
    Callback(Function),
}

impl Alerter {
    fn show(&self, message: &str) {
        let shown = match self {
            Alerter::Window => match web_sys::window() {
                Some(window) => window.alert_with_message(message),
                None => return,
            },
            Alerter::Callback(callback) => callback
                .call1(&JsValue::NULL, &JsValue::from_str(message))
                .map(|_| ()),
        };
        if let Err(e) = shown {
            tracing::debug!("mismatch alert failed: {:?}", e);
        }
    }
}

pub struct DomSurface {
    handles: GuardHandles,
    alerter: Alerter,
}

impl DomSurface {
    pub fn new(handles: GuardHandles, alerter: Alerter) -> Self {
        Self { handles, alerter }
    }

    pub fn handles(&self) -> &GuardHandles {
        &self.handles
    }
}

// DOMTokenList and attribute updates only fail on invalid tokens, which the
// configured class names are not; those results are ignored.
impl FormSurface for DomSurface {
    fn password(&self) -> String {
        self.handles.password.value()
    }

    fn confirmation(&self) -> String {
        self.handles.confirmation.value()
    }

    fn set_feedback_text(&self, text: &str) {
        self.handles.feedback.set_text_content(Some(text));
    }

    fn set_label_class(&self, class: &str, on: bool) {
        let class_list = self.handles.feedback.class_list();
        let _ = if on {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
    }

    fn set_field_class(&self, class: &str, on: bool) {
        let class_list = self.handles.confirmation.class_list();
        let _ = if on {
            class_list.add_1(class)
        } else {
            class_list.remove_1(class)
        };
    }

    fn set_submit_disabled(&self, disabled: bool) {
        if let Some(ref submit) = self.handles.submit {
            let _ = submit.toggle_attribute_with_force("disabled", disabled);
        }
    }

    fn alert(&self, message: &str) {
        self.alerter.show(message);
    }
}
