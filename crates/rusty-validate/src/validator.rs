// File: crates/rusty-validate/src/validator.rs
// Purpose: The validation state machine: scan, validate, display

use std::collections::HashMap;

use tracing::debug;

use crate::config::ValidatorConfig;
use crate::host::{
    FieldHandle, FormHandle, MessageSlot, ATTR_REQUIRED, ATTR_VALIDATE_TYPE, CLASS_FIELD_ERROR,
    CLASS_FORM_ERROR, TYPE_EMAIL,
};
use crate::rules::{Rule, RuleSet, RULE_EMAIL, RULE_REQUIRED};
use crate::state::{FieldValidation, FormItemState, RuleStatus};

/// Attaches declarative validation rules to a form's fields and reflects
/// pass/fail state back into the host as error messages and state
/// classes.
///
/// The validator owns all mutable validation state; the host's fields are
/// only ever read and decorated, never owned. Event listener wiring lives
/// with the host implementation; this type exposes the operations the
/// triggers invoke, all of which run synchronously to completion.
pub struct FormValidator<H: FormHandle> {
    form: H,
    config: ValidatorConfig,
    rules: RuleSet<H::Field>,
    items: Vec<FormItemState<H::Field>>,
}

impl<H: FormHandle> FormValidator<H> {
    /// Creates a validator over `form`.
    ///
    /// `custom_rules` are merged over the built-ins (`required`, `email`)
    /// with caller entries winning on name collision. A `None` config
    /// means all defaults.
    pub fn new(
        form: H,
        config: Option<ValidatorConfig>,
        custom_rules: HashMap<String, Rule<H::Field>>,
    ) -> Self {
        Self {
            form,
            config: config.unwrap_or_default(),
            rules: RuleSet::with_builtins().overlay(custom_rules),
            items: Vec::new(),
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn form(&self) -> &H {
        &self.form
    }

    /// Tracked items in discovery order.
    pub fn items(&self) -> &[FormItemState<H::Field>] {
        &self.items
    }

    /// Scans the form and rebuilds the tracked field set.
    ///
    /// Rules attach in a fixed order per field: `required` (attribute
    /// present), `email` (input type is exactly `email`), then the rule
    /// named by `data-validate-type` if the registry knows it; unknown
    /// names are skipped. Fields that end up with no rules are not
    /// tracked at all. The field set is a snapshot: fields added to the
    /// form afterwards are not picked up.
    pub fn scan(&mut self) {
        self.items.clear();
        for field in self.form.validatable_fields() {
            let mut item = FormItemState::new(field);

            if item.field.has_attr(ATTR_REQUIRED) {
                item.validations.push(FieldValidation::new(RULE_REQUIRED));
            }

            if item.field.input_type() == TYPE_EMAIL {
                item.validations.push(FieldValidation::new(RULE_EMAIL));
            }

            if let Some(name) = item.field.attr(ATTR_VALIDATE_TYPE) {
                if self.rules.contains(&name) {
                    item.validations.push(FieldValidation::new(name));
                } else {
                    debug!(rule = %name, "skipping unregistered validation type");
                }
            }

            if !item.validations.is_empty() {
                self.items.push(item);
            }
        }
        debug!(fields = self.items.len(), "form scan complete");
    }

    /// Runs every rule attached to one tracked item.
    ///
    /// All rules run on every pass (no short-circuit on the first
    /// failure), but only the first failure's message becomes the item
    /// error. Out-of-range indices are a no-op.
    pub fn validate_item(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            Self::run_item(&self.rules, item);
        }
    }

    /// Synchronous sweep over every tracked item, in discovery order.
    pub fn validate_all_fields(&mut self) {
        for item in &mut self.items {
            Self::run_item(&self.rules, item);
        }
    }

    fn run_item(rules: &RuleSet<H::Field>, item: &mut FormItemState<H::Field>) {
        item.error = None;
        for validation in &mut item.validations {
            // Scan only records names the registry knows, and the
            // registry is fixed after construction.
            let Some(rule) = rules.get(&validation.rule) else {
                continue;
            };
            let passed = rule.check(&item.field);
            validation.status = RuleStatus::from_pass(passed);
            if !passed && item.error.is_none() {
                item.error = Some(rule.message().to_string());
            }
        }
    }

    /// Reflects one item's error state into the host: toggles the
    /// field-level error class and writes or clears the message slot
    /// text. A missing slot only skips the text update; the class still
    /// toggles. No validation state changes here.
    pub fn display_item_error(&self, index: usize) {
        if let Some(item) = self.items.get(index) {
            Self::display_item(item);
        }
    }

    /// Refreshes the display of every tracked item, in order.
    pub fn display_all_item_errors(&self) {
        for item in &self.items {
            Self::display_item(item);
        }
    }

    fn display_item(item: &FormItemState<H::Field>) {
        let slot = item.field.message_slot();
        match &item.error {
            Some(message) => {
                item.field.add_class(CLASS_FIELD_ERROR);
                if let Some(slot) = slot {
                    slot.set_text(message);
                }
            }
            None => {
                item.field.remove_class(CLASS_FIELD_ERROR);
                if let Some(slot) = slot {
                    slot.set_text("");
                }
            }
        }
    }

    /// Recomputes the aggregate form error state from scratch and
    /// toggles the form-level error class: present while any tracked
    /// item currently fails.
    pub fn display_form_error(&self) {
        if self.items.iter().any(FormItemState::has_error) {
            self.form.add_class(CLASS_FORM_ERROR);
        } else {
            self.form.remove_class(CLASS_FORM_ERROR);
        }
    }

    /// The single routine behind every trigger: revalidate everything,
    /// refresh the display for the trigger's target (one field for input
    /// and blur triggers, all fields for submit), then the form-level
    /// state.
    ///
    /// Per-field triggers still revalidate the whole form. Deliberate
    /// simplicity/cost trade-off, not a bug: all trigger paths stay
    /// identical at the price of redundant rule runs, and the form-level
    /// class can change while typing in an unrelated field.
    pub fn handle_trigger(&mut self, target: Option<usize>) {
        self.validate_all_fields();
        match target {
            Some(index) => self.display_item_error(index),
            None => self.display_all_item_errors(),
        }
        self.display_form_error();
    }
}
