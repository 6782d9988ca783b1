//! rusty-validate-wasm
//!
//! WebAssembly DOM bindings for `rusty-validate`. Exposes a
//! JS-constructible `FormValidator` that scans a form for fields marked
//! `data-validate`, wires the configured event triggers, and reflects
//! validation state into the DOM as error messages and CSS classes.
//!
//! ```javascript
//! const validator = new FormValidator(form, null, {
//!     transactionAmount: {
//!         validator: (field) => parseFloat(field.value) >= 0,
//!         errorMessage: "Transactions must be positive.",
//!     },
//! });
//! validator.initialize();
//! ```

mod dom;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlFormElement};

use dom::{DomField, DomForm};
use rusty_validate::{FormValidator as Validator, Rule, ValidatorConfig};

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

type SharedValidator = Rc<RefCell<Validator<DomForm>>>;

/// Client-side form validator driven by markup attributes.
///
/// Holds the shared validation state behind `Rc<RefCell<_>>`: the host is
/// single-threaded and every trigger handler runs synchronously to
/// completion, so interior mutability is the whole concurrency story.
#[wasm_bindgen]
pub struct FormValidator {
    inner: SharedValidator,
    // Listener closures stay alive as long as the validator; there is no
    // teardown, matching the lifetime of the page context.
    listeners: Vec<Closure<dyn FnMut(Event)>>,
}

#[wasm_bindgen]
impl FormValidator {
    /// Creates a validator for `form`.
    ///
    /// `config` and `custom_validators` may be `null` or `undefined`.
    /// Unspecified config options fall back to their defaults; custom
    /// validators are merged over the built-ins with caller entries
    /// winning on name collision. Each custom entry is an object of the
    /// shape `{validator: Function, errorMessage: string}`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        form: HtmlFormElement,
        config: JsValue,
        custom_validators: JsValue,
    ) -> Result<FormValidator, JsValue> {
        let config = parse_config(config)?;
        let custom = parse_custom_validators(custom_validators)?;
        let inner = Validator::new(DomForm::new(form), config, custom);
        Ok(FormValidator {
            inner: Rc::new(RefCell::new(inner)),
            listeners: Vec::new(),
        })
    }

    /// Scans the form and attaches the configured trigger listeners.
    ///
    /// Call once after construction; a second call duplicates listeners.
    pub fn initialize(&mut self) -> Result<(), JsValue> {
        self.inner.borrow_mut().scan();

        let config = self.inner.borrow().config().clone();
        if config.validate_on_blur {
            self.attach_field_listeners("blur")?;
        }
        if config.validate_on_entry {
            self.attach_field_listeners("input")?;
        }
        if config.validate_on_submit {
            self.attach_submit()?;
        }
        Ok(())
    }
}

impl FormValidator {
    fn attach_submit(&mut self) -> Result<(), JsValue> {
        let inner = Rc::clone(&self.inner);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            // Submission is always suppressed, valid or not; the caller
            // decides what a confirmed-valid submit actually does.
            event.prevent_default();
            inner.borrow_mut().handle_trigger(None);
        });
        self.inner
            .borrow()
            .form()
            .element()
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        self.listeners.push(closure);
        Ok(())
    }

    fn attach_field_listeners(&mut self, event_name: &str) -> Result<(), JsValue> {
        let fields: Vec<DomField> = self
            .inner
            .borrow()
            .items()
            .iter()
            .map(|item| item.field.clone())
            .collect();
        for (index, field) in fields.into_iter().enumerate() {
            let inner = Rc::clone(&self.inner);
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                inner.borrow_mut().handle_trigger(Some(index));
            });
            field
                .element()
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            self.listeners.push(closure);
        }
        Ok(())
    }
}

fn parse_config(config: JsValue) -> Result<Option<ValidatorConfig>, JsValue> {
    if config.is_null() || config.is_undefined() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(config)
        .map(Some)
        .map_err(|err| JsValue::from_str(&format!("invalid config: {err}")))
}

fn parse_custom_validators(custom: JsValue) -> Result<HashMap<String, Rule<DomField>>, JsValue> {
    let mut rules = HashMap::new();
    if custom.is_null() || custom.is_undefined() {
        return Ok(rules);
    }
    let object: &Object = custom
        .dyn_ref()
        .ok_or_else(|| JsValue::from_str("custom validators must be an object"))?;
    for key in Object::keys(object).iter() {
        let Some(name) = key.as_string() else { continue };
        let entry = Reflect::get(object, &key)?;
        let validator: Function = Reflect::get(&entry, &JsValue::from_str("validator"))?
            .dyn_into()
            .map_err(|_| {
                JsValue::from_str(&format!("validator for rule '{name}' must be a function"))
            })?;
        let message = Reflect::get(&entry, &JsValue::from_str("errorMessage"))?
            .as_string()
            .unwrap_or_default();
        rules.insert(name, js_rule(validator, message));
    }
    Ok(rules)
}

/// Wraps a JS predicate as a rule. The function receives the DOM element
/// and its return value is read through JS truthiness, as callers coming
/// from JavaScript expect.
fn js_rule(validator: Function, message: String) -> Rule<DomField> {
    Rule::new(
        move |field: &DomField| {
            validator
                .call1(&JsValue::NULL, field.element())
                .map(|result| result.is_truthy())
                .unwrap_or(false)
        },
        message,
    )
}
