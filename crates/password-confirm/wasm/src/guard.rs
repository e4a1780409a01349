//! Event wiring between page elements and the core form guard

use std::rc::Rc;

use js_sys::{Function, Reflect};
use password_confirm_core::{FormGuard, GuardConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget};

use crate::error::GuardError;
use crate::handles::GuardHandles;
use crate::surface::{Alerter, DomSurface};

type Listener = Closure<dyn FnMut(Event)>;

/// A guard bound to one form.
///
/// Dropping the guard (or calling `detach` from JavaScript) removes its
/// listeners. Call `persist` to keep them for the lifetime of the page.
#[wasm_bindgen]
pub struct PasswordGuard {
    guard: Rc<FormGuard<DomSurface>>,
    listeners: Vec<(EventTarget, &'static str, Listener)>,
}

impl PasswordGuard {
    /// Binds input listeners on both fields and a submit listener on the form
    pub fn bind(
        handles: GuardHandles,
        config: &GuardConfig,
        alerter: Alerter,
    ) -> Result<Self, GuardError> {
        let password: EventTarget = handles.password.clone().into();
        let confirmation: EventTarget = handles.confirmation.clone().into();
        let form: EventTarget = handles.form.clone().into();

        let guard = Rc::new(FormGuard::new(DomSurface::new(handles, alerter), config));
        let mut bound = Self {
            guard: Rc::clone(&guard),
            listeners: Vec::with_capacity(3),
        };

        for target in [password, confirmation] {
            let guard = Rc::clone(&guard);
            bound.listen(target, "input", move |_event| {
                guard.refresh();
            })?;
        }

        bound.listen(form, "submit", move |event| {
            if guard.check_submit().is_blocked() {
                event.prevent_default();
            }
        })?;

        Ok(bound)
    }

    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), GuardError> {
        let listener: Listener = Closure::new(handler);
        target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.push((target, event, listener));
        Ok(())
    }

    pub fn guard(&self) -> &FormGuard<DomSurface> {
        &self.guard
    }
}

#[wasm_bindgen]
impl PasswordGuard {
    /// Recomputes feedback now, returning `"empty"`, `"match"` or `"mismatch"`
    pub fn refresh(&self) -> String {
        self.guard.refresh().as_str().to_string()
    }

    /// Current state without updating the page
    pub fn state(&self) -> String {
        self.guard.state().as_str().to_string()
    }

    /// Removes all listeners
    pub fn detach(self) {}

    /// Keeps the listeners installed for the lifetime of the page
    pub fn persist(self) {
        std::mem::forget(self);
    }
}

impl Drop for PasswordGuard {
    fn drop(&mut self) {
        for (target, event, listener) in self.listeners.drain(..) {
            let _ = target
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
        }
    }
}

/// Splits a JavaScript options object into config and alert handler.
///
/// `undefined` and `null` give the defaults. An `onMismatch` function,
/// when present, replaces `window.alert`.
pub fn parse_options(options: &JsValue) -> Result<(GuardConfig, Alerter), GuardError> {
    if options.is_undefined() || options.is_null() {
        return Ok((GuardConfig::default(), Alerter::Window));
    }

    let config: GuardConfig = serde_wasm_bindgen::from_value(options.clone())?;
    let alerter = Reflect::get(options, &JsValue::from_str("onMismatch"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .map_or(Alerter::Window, Alerter::Callback);

    Ok((config, alerter))
}

/// Binds by element id once the document has been parsed.
///
/// Runs immediately when parsing is already done, otherwise on
/// `DOMContentLoaded`. Missing elements leave the page without live
/// validation and are not reported to the page.
pub fn attach_when_ready(config: GuardConfig, alerter: Alerter) -> Result<(), GuardError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(GuardError::NoDocument)?;

    if document.ready_state() != "loading" {
        return attach_now(&document, &config, alerter);
    }

    attach_on_dom_ready(document, config, alerter)
}

/// Defers the by-id attach to the document's next `DOMContentLoaded`
pub fn attach_on_dom_ready(
    document: Document,
    config: GuardConfig,
    alerter: Alerter,
) -> Result<(), GuardError> {
    let target = document.clone();
    let on_ready = Closure::once_into_js(move || {
        if let Err(e) = attach_now(&document, &config, alerter) {
            tracing::warn!("password guard not attached: {}", e);
        }
    });
    target.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn attach_now(
    document: &Document,
    config: &GuardConfig,
    alerter: Alerter,
) -> Result<(), GuardError> {
    let handles = match GuardHandles::lookup(document, &config.ids) {
        Ok(handles) => handles,
        Err(e @ (GuardError::MissingElement(_) | GuardError::WrongElement { .. })) => {
            tracing::debug!("skipping password guard: {}", e);
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    PasswordGuard::bind(handles, config, alerter)?.persist();
    Ok(())
}
