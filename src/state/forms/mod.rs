//! Form domain layer
//!
//! Field state, phone formatting, the validation schema and the controller
//! that drives one form through its submission lifecycle.

mod controller;
mod field;
mod form_state;
mod phone;
mod schema;
mod variant;

pub use controller::{FormController, SubmissionState, SubmitOutcome};
pub use field::{FieldId, FieldValue, FormField};
pub use form_state::{Form, LeadForm};
pub use phone::{format_phone, phone_digits, MAX_PHONE_DIGITS};
pub use schema::{is_valid_email, rules, validate, Check, Rule, ValidationResult};
pub use variant::{FormVariant, CHALLENGE_OPTIONS, EQUIPMENT_OPTIONS, REVENUE_OPTIONS};
