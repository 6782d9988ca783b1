// File: crates/rusty-validate/src/host.rs
// Purpose: Traits modeling the DOM-like host the validator runs against

/// Attribute opting a field into validation tracking (presence only, the
/// value is ignored).
pub const ATTR_VALIDATE: &str = "data-validate";
/// Attribute naming a registry rule to apply to the field.
pub const ATTR_VALIDATE_TYPE: &str = "data-validate-type";
/// Attribute marking the error-text slot inside the field's parent
/// container.
pub const ATTR_VALIDATE_MESSAGE: &str = "data-validate-message";
/// Native attribute that adds the built-in `required` rule.
pub const ATTR_REQUIRED: &str = "required";
/// Input type that adds the built-in `email` rule.
pub const TYPE_EMAIL: &str = "email";

/// Class applied to a field whose last validation pass failed.
pub const CLASS_FIELD_ERROR: &str = "validate-error";
/// Class applied to the form while any tracked field fails.
pub const CLASS_FORM_ERROR: &str = "validate-form-error";

/// The error-text display slot next to a field.
pub trait MessageSlot {
    fn set_text(&self, text: &str);
}

/// A single form input under validation.
///
/// The host owns the element; implementations are cheap handles into it.
/// Mutating calls take `&self` because hosts use interior mutability (DOM
/// nodes, `RefCell`-backed test doubles).
pub trait FieldHandle {
    type Slot: MessageSlot;

    /// Current value of the input.
    fn value(&self) -> String;

    /// Input type, e.g. `"email"` or `"text"`.
    fn input_type(&self) -> String;

    fn has_attr(&self, name: &str) -> bool;

    fn attr(&self, name: &str) -> Option<String>;

    fn add_class(&self, name: &str);

    fn remove_class(&self, name: &str);

    /// Locates the message slot within the field's immediate parent
    /// container, if one exists. Looked up fresh on every display pass.
    fn message_slot(&self) -> Option<Self::Slot>;
}

/// The form-like container fields are discovered from.
pub trait FormHandle {
    type Field: FieldHandle;

    /// All descendant fields carrying [`ATTR_VALIDATE`], in document
    /// order.
    fn validatable_fields(&self) -> Vec<Self::Field>;

    fn add_class(&self, name: &str);

    fn remove_class(&self, name: &str);
}
