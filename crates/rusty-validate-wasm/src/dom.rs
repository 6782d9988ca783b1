// File: crates/rusty-validate-wasm/src/dom.rs
// Purpose: Host trait implementations over real DOM elements

use wasm_bindgen::JsCast;
use web_sys::{
    Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use rusty_validate::host::{
    FieldHandle, FormHandle, MessageSlot, ATTR_VALIDATE, ATTR_VALIDATE_MESSAGE,
};

/// Error-text slot backed by a DOM element.
pub struct DomSlot {
    element: HtmlElement,
}

impl MessageSlot for DomSlot {
    fn set_text(&self, text: &str) {
        self.element.set_inner_text(text);
    }
}

/// A tracked DOM input. Cheap JS reference, cloneable.
#[derive(Clone)]
pub struct DomField {
    element: Element,
}

impl DomField {
    pub(crate) fn new(element: Element) -> Self {
        Self { element }
    }

    pub(crate) fn element(&self) -> &Element {
        &self.element
    }
}

impl FieldHandle for DomField {
    type Slot = DomSlot;

    fn value(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = self.element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = self.element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn input_type(&self) -> String {
        self.element
            .dyn_ref::<HtmlInputElement>()
            .map(|input| input.type_())
            .unwrap_or_default()
    }

    fn has_attr(&self, name: &str) -> bool {
        self.element.has_attribute(name)
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn add_class(&self, name: &str) {
        // classList mutation only fails on malformed tokens; ours are
        // fixed contract strings
        let _ = self.element.class_list().add_1(name);
    }

    fn remove_class(&self, name: &str) {
        let _ = self.element.class_list().remove_1(name);
    }

    fn message_slot(&self) -> Option<DomSlot> {
        let parent = self.element.parent_element()?;
        let selector = format!("[{ATTR_VALIDATE_MESSAGE}]");
        let element = parent.query_selector(&selector).ok().flatten()?;
        element
            .dyn_into::<HtmlElement>()
            .ok()
            .map(|element| DomSlot { element })
    }
}

/// The form under validation.
pub struct DomForm {
    form: HtmlFormElement,
}

impl DomForm {
    pub(crate) fn new(form: HtmlFormElement) -> Self {
        Self { form }
    }

    pub(crate) fn element(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl FormHandle for DomForm {
    type Field = DomField;

    fn validatable_fields(&self) -> Vec<DomField> {
        let selector = format!("[{ATTR_VALIDATE}]");
        let Ok(nodes) = self.form.query_selector_all(&selector) else {
            return Vec::new();
        };
        let mut fields = Vec::with_capacity(nodes.length() as usize);
        for index in 0..nodes.length() {
            if let Some(element) = nodes
                .item(index)
                .and_then(|node| node.dyn_into::<Element>().ok())
            {
                fields.push(DomField::new(element));
            }
        }
        fields
    }

    fn add_class(&self, name: &str) {
        let _ = self.form.class_list().add_1(name);
    }

    fn remove_class(&self, name: &str) {
        let _ = self.form.class_list().remove_1(name);
    }
}
