//! rusty-validate
//!
//! Declarative client-side form validation: rules attach to fields through
//! markup attributes, run on configurable triggers (blur, input, submit),
//! and pass/fail state is reflected back into the host as error messages
//! and CSS state classes.
//!
//! The crate is host-agnostic. The DOM (or a test double) is reached
//! through the [`host::FormHandle`] and [`host::FieldHandle`] traits; the
//! companion `rusty-validate-wasm` crate implements them over `web-sys`
//! and wires the browser event listeners.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use rusty_validate::{FormValidator, Rule};
//! use std::collections::HashMap;
//!
//! let mut custom = HashMap::new();
//! custom.insert(
//!     "transactionAmount".to_string(),
//!     Rule::new(
//!         |field| field.value().parse::<f64>().is_ok(),
//!         "Please enter a number.",
//!     ),
//! );
//!
//! let mut validator = FormValidator::new(form, None, custom);
//! validator.scan();
//! validator.handle_trigger(None); // revalidate and redraw everything
//! ```

pub mod config;
pub mod host;
pub mod rules;
pub mod state;
pub mod validator;

pub use config::ValidatorConfig;
pub use rules::{Rule, RuleSet};
pub use state::{FieldValidation, FormItemState, RuleStatus};
pub use validator::FormValidator;
