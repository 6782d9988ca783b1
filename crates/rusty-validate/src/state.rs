//! Per-field validation state

/// Outcome of a single rule application.
///
/// `Unchecked` means the rule has not run since the field set was built;
/// tracking it explicitly keeps "never validated" distinguishable from
/// "validated and passed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleStatus {
    #[default]
    Unchecked,
    Passed,
    Failed,
}

impl RuleStatus {
    pub fn from_pass(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }

    pub fn is_failed(self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// One rule application against one field: the rule's registry name plus
/// the status of its last run. Created at scan time, mutated on every
/// validation pass, never destroyed until the field set is rebuilt.
#[derive(Debug, Clone)]
pub struct FieldValidation {
    pub rule: String,
    pub status: RuleStatus,
}

impl FieldValidation {
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            status: RuleStatus::Unchecked,
        }
    }
}

/// Aggregate validation state for a single tracked field.
///
/// `validations` is ordered by rule discovery (required, email, then the
/// custom rule). `error` holds the message of the first failing rule, or
/// `None` when every rule passed on the last run.
#[derive(Debug)]
pub struct FormItemState<F> {
    pub field: F,
    pub validations: Vec<FieldValidation>,
    pub error: Option<String>,
}

impl<F> FormItemState<F> {
    pub fn new(field: F) -> Self {
        Self {
            field,
            validations: Vec::new(),
            error: None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}
