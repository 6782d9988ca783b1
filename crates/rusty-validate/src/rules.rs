//! Built-in rule predicates and the rule registry

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::host::FieldHandle;

/// Registry name of the built-in required rule.
pub const RULE_REQUIRED: &str = "required";
/// Registry name of the built-in email rule.
pub const RULE_EMAIL: &str = "email";

/// Message shown when the `required` rule fails.
pub const REQUIRED_MESSAGE: &str = "This is a required field.";
/// Message shown when the `email` rule fails.
pub const EMAIL_MESSAGE: &str = "Please enter a valid email.";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)+$")
        .expect("email pattern compiles")
});

/// Passes unless the value trims down to the empty string.
pub fn is_required_satisfied(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Purely syntactic email check: a local part of permitted characters,
/// one `@`, then dot-separated DNS labels. No length limits, no DNS
/// resolution.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// A named validation capability: a predicate over the host field plus a
/// human-readable error message.
pub struct Rule<F> {
    validate: Box<dyn Fn(&F) -> bool>,
    message: String,
}

impl<F> Rule<F> {
    pub fn new(validate: impl Fn(&F) -> bool + 'static, message: impl Into<String>) -> Self {
        Self {
            validate: Box::new(validate),
            message: message.into(),
        }
    }

    /// Runs the predicate against a field. `true` means the field passes.
    pub fn check(&self, field: &F) -> bool {
        (self.validate)(field)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<F> fmt::Debug for Rule<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Registry mapping rule names to rules.
///
/// Built once at construction by overlaying caller-supplied rules onto
/// the built-in defaults; caller entries shadow built-ins of the same
/// name.
#[derive(Debug, Default)]
pub struct RuleSet<F> {
    rules: HashMap<String, Rule<F>>,
}

impl<F> RuleSet<F> {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Merges `custom` into the set, with `custom` winning on name
    /// collision.
    pub fn overlay(mut self, custom: HashMap<String, Rule<F>>) -> Self {
        self.rules.extend(custom);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, rule: Rule<F>) {
        self.rules.insert(name.into(), rule);
    }

    pub fn get(&self, name: &str) -> Option<&Rule<F>> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }
}

impl<F: FieldHandle> RuleSet<F> {
    /// The built-in rule set: `required` and `email`.
    pub fn with_builtins() -> Self {
        let mut set = Self::new();
        set.insert(
            RULE_REQUIRED,
            Rule::new(
                |field: &F| is_required_satisfied(&field.value()),
                REQUIRED_MESSAGE,
            ),
        );
        set.insert(
            RULE_EMAIL,
            Rule::new(|field: &F| is_valid_email(&field.value()), EMAIL_MESSAGE),
        );
        set
    }
}
