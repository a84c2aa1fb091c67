//! Signup form validation.
//!
//! Four fields, each with one fixed rule, and a submit gate that re-checks
//! all of them. Indicator visibility is written through a [`Host`].
//!
//! # Example
//!
//! ```
//! use formwatch_lib::config::FormConfig;
//! use formwatch_lib::host::MemoryHost;
//! use formwatch_lib::validation::{Field, FormValidator};
//!
//! let host = MemoryHost::new();
//! let mut form = FormValidator::new(host.clone(), FormConfig::default());
//!
//! form.on_field_changed(Field::Name, "J");
//! assert!(host.is_visible("nameError"));
//!
//! form.on_field_changed(Field::Name, "Jane Doe");
//! assert!(!host.is_visible("nameError"));
//! ```
//!
//! [`Host`]: crate::host::Host

mod field;
mod form;
mod result;
pub mod rules;

pub use field::{Field, FieldValues};
pub use form::{FormPhase, FormValidator};
pub use result::{FieldError, SubmitOutcome};
