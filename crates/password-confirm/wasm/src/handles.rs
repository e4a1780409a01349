//! Element handles the guard binds to

use password_confirm_core::ElementIds;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlFormElement, HtmlInputElement};

use crate::error::GuardError;

/// The page elements a guard works on
#[derive(Debug, Clone)]
pub struct GuardHandles {
    pub password: HtmlInputElement,
    pub confirmation: HtmlInputElement,
    pub feedback: Element,
    pub form: HtmlFormElement,
    pub submit: Option<Element>,
}

impl GuardHandles {
    /// Looks up every element by id.
    ///
    /// Fails on the first required element that is absent or of the wrong
    /// kind. A missing submit control is not an error.
    pub fn lookup(document: &Document, ids: &ElementIds) -> Result<Self, GuardError> {
        Ok(Self {
            password: typed(document, &ids.password, "input element")?,
            confirmation: typed(document, &ids.confirmation, "input element")?,
            feedback: element(document, &ids.feedback)?,
            form: typed(document, &ids.form, "form element")?,
            submit: document.get_element_by_id(&ids.submit),
        })
    }
}

fn element(document: &Document, id: &str) -> Result<Element, GuardError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| GuardError::MissingElement(id.to_string()))
}

fn typed<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> Result<T, GuardError> {
    element(document, id)?
        .dyn_into::<T>()
        .map_err(|_| GuardError::WrongElement {
            id: id.to_string(),
            expected,
        })
}
