//! Form domain layer
//!
//! Type-safe contact form handling: field values, validation, and the
//! submission lifecycle.

mod field;
mod form_state;
mod status;
mod validation;

pub use field::{ContactFields, FieldName};
pub use form_state::{ContactForm, Form};
pub use status::{SubmissionPhase, SubmissionStatus};

#[cfg(test)]
pub use form_state::SUBMIT_BUTTON_INDEX;
#[cfg(test)]
pub use status::STATUS_DISPLAY_DURATION;
