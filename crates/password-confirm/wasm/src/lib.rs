//! Password Confirmation WASM
//!
//! WebAssembly bindings for the password confirmation guard.
//! Gives live "passwords match" feedback using the same check the server runs.

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlFormElement, HtmlInputElement};

use password_confirm_core::FeedbackState;

pub mod error;
pub mod guard;
pub mod handles;
pub mod surface;

pub use error::GuardError;
pub use guard::{attach_on_dom_ready, attach_when_ready, parse_options, PasswordGuard};
pub use handles::GuardHandles;
pub use surface::{Alerter, DomSurface};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "auto-attach")]
    {
        if let Err(e) = attach_when_ready(Default::default(), Alerter::Window) {
            tracing::warn!("password guard not attached: {}", e);
        }
    }
}

/// Bind a guard to the elements with the configured ids.
///
/// Waits for `DOMContentLoaded` if the document is still loading. If a
/// required element is missing, nothing is bound and no error is raised.
///
/// # Example (JavaScript)
/// ```javascript
/// attachPasswordGuard({ locale: 'en', ids: { form: 'changePassword' } });
/// ```
#[wasm_bindgen(js_name = attachPasswordGuard)]
pub fn attach_password_guard(options: JsValue) -> Result<(), JsValue> {
    let (config, alerter) = parse_options(&options)?;
    attach_when_ready(config, alerter)?;
    Ok(())
}

/// Bind a guard to explicit element handles.
///
/// The returned guard owns the listeners: keep it, call `persist()`, or
/// call `detach()` to unbind.
///
/// # Example (JavaScript)
/// ```javascript
/// const guard = bindPasswordGuard(pw, confirm, label, form, button, {
///     onMismatch: (msg) => showToast(msg),
/// });
/// ```
#[wasm_bindgen(js_name = bindPasswordGuard)]
pub fn bind_password_guard(
    password: HtmlInputElement,
    confirmation: HtmlInputElement,
    feedback: Element,
    form: HtmlFormElement,
    submit: Option<Element>,
    options: JsValue,
) -> Result<PasswordGuard, JsValue> {
    let (config, alerter) = parse_options(&options)?;
    let handles = GuardHandles {
        password,
        confirmation,
        feedback,
        form,
        submit,
    };
    Ok(PasswordGuard::bind(handles, &config, alerter)?)
}

/// Quick comparison: `"empty"`, `"match"` or `"mismatch"`
#[wasm_bindgen(js_name = evaluatePasswords)]
pub fn evaluate_passwords(password: &str, confirmation: &str) -> String {
    FeedbackState::evaluate(password, confirmation).as_str().to_string()
}
