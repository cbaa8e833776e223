//! Contact form state and submission lifecycle

use super::field::{ContactFields, FieldName};
use super::status::{StatusTimer, SubmissionPhase, SubmissionStatus};
use super::validation::{validate, FieldErrors};
use crate::gateway::{DeliveryReceipt, GatewayError};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Focus index of the submit button, after the four inputs
pub const SUBMIT_BUTTON_INDEX: usize = 4;

/// Trait for common form navigation
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field_index(&self) -> usize;
    fn set_active_field_index(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field_index();
        self.set_active_field_index((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field_index();
        if current == 0 {
            self.set_active_field_index(count - 1);
        } else {
            self.set_active_field_index(current - 1);
        }
    }
}

/// Owns field values, validation errors, the in-flight flag and the
/// terminal status of the contact form.
///
/// All mutation happens on the UI thread. The gateway call is the only
/// suspension point; `begin_submit` and `finish_submit` bracket it so the
/// await can run elsewhere.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    errors: FieldErrors,
    submitting: bool,
    status: SubmissionStatus,
    status_timer: Option<StatusTimer>,
    active_field_index: usize,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn phase(&self) -> SubmissionPhase {
        SubmissionPhase::derive(self.submitting, self.status)
    }

    pub fn status_timer(&self) -> Option<StatusTimer> {
        self.status_timer
    }

    /// The focused input, or `None` when the submit button is focused
    pub fn active_field(&self) -> Option<FieldName> {
        FieldName::from_index(self.active_field_index)
    }

    pub fn is_submit_button_active(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Set a field's value and drop any error recorded for it.
    ///
    /// Never validates or submits.
    pub fn update_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.set(field, value.into());
        self.errors.clear(field);
    }

    /// Append a typed character to the focused input
    pub fn input_char(&mut self, c: char) {
        self.edit_active(|value| value.push(c));
    }

    /// Remove the last character of the focused input
    pub fn backspace(&mut self) {
        self.edit_active(|value| {
            value.pop();
        });
    }

    /// Insert a line break; only the message input accepts one
    pub fn insert_newline(&mut self) {
        if self.active_field().is_some_and(|f| f.is_multiline()) {
            self.edit_active(|value| value.push('\n'));
        }
    }

    fn edit_active(&mut self, edit: impl FnOnce(&mut String)) {
        // Inputs are disabled while a submission is in flight
        if self.submitting {
            return;
        }
        let Some(field) = self.active_field() else {
            return;
        };
        let mut value = self.fields.get(field).to_string();
        edit(&mut value);
        self.update_field(field, value);
    }

    /// Validate and, if the form is clean, enter the pending state.
    ///
    /// Returns a snapshot of the fields to deliver, or `None` when a
    /// submission is already in flight or validation failed. In the latter
    /// case the errors are stored and the status is left untouched.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.submitting {
            debug!("Submit ignored, a submission is already in flight");
            return None;
        }

        self.errors = validate(&self.fields);
        if !self.errors.is_empty() {
            let invalid: Vec<&str> = self.errors.iter().map(|(f, _)| f.as_str()).collect();
            warn!(
                "Contact form has {} invalid field(s), not submitting: {}",
                self.errors.len(),
                invalid.join(", ")
            );
            return None;
        }

        self.status_timer = None;
        self.submitting = true;
        self.status = SubmissionStatus::Unset;
        Some(self.fields.clone())
    }

    /// Settle the in-flight submission with the gateway outcome.
    ///
    /// Delivery failures stop here: they are logged and become
    /// `SubmissionStatus::Error`. The status reverts to unset once the
    /// timer scheduled from `now` expires.
    pub fn finish_submit(
        &mut self,
        outcome: Result<DeliveryReceipt, GatewayError>,
        now: Instant,
    ) {
        if !self.submitting {
            debug!("Delivery outcome ignored, no submission in flight");
            return;
        }
        self.submitting = false;

        match outcome {
            Ok(receipt) => {
                info!("Contact message delivered: {}", receipt.text);
                self.status = SubmissionStatus::Success;
                self.fields = ContactFields::default();
                self.active_field_index = 0;
            }
            Err(e) if e.is_config_error() => {
                error!("Email configuration missing: {e}");
                self.status = SubmissionStatus::Error;
            }
            Err(e) => {
                error!("Failed to send email: {e}");
                self.status = SubmissionStatus::Error;
            }
        }

        self.status_timer = Some(StatusTimer::schedule(now));
    }

    /// Validate, deliver through `gateway`, and settle, in one call.
    ///
    /// The event loop uses `begin_submit` and `finish_submit` directly so the
    /// await runs on a spawned task.
    #[cfg(test)]
    pub async fn submit(
        &mut self,
        gateway: &dyn crate::gateway::SubmissionGateway,
    ) -> SubmissionStatus {
        let Some(fields) = self.begin_submit() else {
            return self.status;
        };
        let outcome = gateway.deliver(&fields).await;
        self.finish_submit(outcome, Instant::now());
        self.status
    }

    /// Revert the status to unset once its timer has expired.
    ///
    /// Returns true if the status was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.status_timer {
            Some(timer) if timer.is_expired(now) => {
                self.status_timer = None;
                self.status = SubmissionStatus::Unset;
                true
            }
            _ => false,
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        5 // name, email, subject, message, submit button
    }
    fn active_field_index(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field_index(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}
