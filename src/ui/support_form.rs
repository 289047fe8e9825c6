//! Support request form.
//!
//! The form only tracks values and submission state. Sending the request is
//! up to the owner: [`SupportForm::submit`] hands back a [`SupportRequest`]
//! and the owner reports the outcome with `submit_succeeded`/`submit_failed`.

use serde::Serialize;
use thiserror::Error;

use crate::constants::SUPPORT_NOTES_MAX_LENGTH;
use crate::validation::{is_required, is_valid_email, max_length, ValidationError};

/// Editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportField {
    EmailAddress,
    /// Prefilled and read-only
    EnterpriseName,
    Subject,
    Notes,
}

impl SupportField {
    pub fn label(&self) -> &'static str {
        match self {
            SupportField::EmailAddress => "Email Address",
            SupportField::EnterpriseName => "Company",
            SupportField::Subject => "Subject",
            SupportField::Notes => "Notes",
        }
    }

    pub fn all() -> &'static [SupportField] {
        &[
            SupportField::EmailAddress,
            SupportField::EnterpriseName,
            SupportField::Subject,
            SupportField::Notes,
        ]
    }
}

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// Carries the error message reported by the owner
    Failed(String),
}

/// Payload sent to the customer success team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportRequest {
    pub email_address: String,
    pub enterprise_name: String,
    pub subject: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

/// Status banner shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAlert {
    pub kind: AlertKind,
    pub icon_class: &'static str,
    pub title: &'static str,
    pub message: String,
    pub dismissible: bool,
}

/// Reasons a submission cannot start.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error("A support request is already being submitted")]
    InProgress,
}

#[derive(Debug, Clone, Default)]
pub struct SupportForm {
    email_address: String,
    enterprise_name: String,
    subject: String,
    notes: String,
    status: SubmitStatus,
    success_dismissed: bool,
}

impl SupportForm {
    /// Create a form prefilled with the admin's email and company.
    pub fn new(email_address: impl Into<String>, enterprise_name: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            enterprise_name: enterprise_name.into(),
            ..Default::default()
        }
    }

    pub fn value(&self, field: SupportField) -> &str {
        match field {
            SupportField::EmailAddress => &self.email_address,
            SupportField::EnterpriseName => &self.enterprise_name,
            SupportField::Subject => &self.subject,
            SupportField::Notes => &self.notes,
        }
    }

    /// Change a field value. Read-only fields are left untouched.
    pub fn set_value(&mut self, field: SupportField, value: impl Into<String>) {
        let value = value.into();
        match field {
            SupportField::EmailAddress => self.email_address = value,
            SupportField::EnterpriseName => {
                log::warn!("Ignoring edit of read-only field '{}'", field.label());
            }
            SupportField::Subject => self.subject = value,
            SupportField::Notes => self.notes = value,
        }
    }

    /// Refresh the prefilled company name. Other fields keep their values.
    pub fn set_enterprise_name(&mut self, enterprise_name: impl Into<String>) {
        self.enterprise_name = enterprise_name.into();
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// First failing rule of a field, if any.
    pub fn field_error(&self, field: SupportField) -> Option<ValidationError> {
        let label = field.label();
        let value = self.value(field);
        let result = match field {
            SupportField::EmailAddress => {
                is_required(label, value).and_then(|_| is_valid_email(label, value))
            }
            SupportField::EnterpriseName | SupportField::Subject => is_required(label, value),
            SupportField::Notes => is_required(label, value)
                .and_then(|_| max_length(label, value, SUPPORT_NOTES_MAX_LENGTH)),
        };
        result.err()
    }

    /// All field errors in field order.
    pub fn validate(&self) -> Vec<ValidationError> {
        SupportField::all()
            .iter()
            .filter_map(|field| self.field_error(*field))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.status != SubmitStatus::Submitting
    }

    /// Start a submission and return the request to send.
    pub fn submit(&mut self) -> Result<SupportRequest, SubmitError> {
        if self.status == SubmitStatus::Submitting {
            return Err(SubmitError::InProgress);
        }
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(SubmitError::Invalid(errors));
        }

        self.status = SubmitStatus::Submitting;
        self.success_dismissed = false;
        log::debug!("Submitting support request '{}'", self.subject);
        Ok(SupportRequest {
            email_address: self.email_address.trim().to_string(),
            enterprise_name: self.enterprise_name.clone(),
            subject: self.subject.trim().to_string(),
            notes: self.notes.clone(),
        })
    }

    pub fn submit_succeeded(&mut self) {
        log::info!("Support request sent");
        self.status = SubmitStatus::Succeeded;
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("Support request failed: {}", message);
        self.status = SubmitStatus::Failed(message);
    }

    /// Hide the success banner.
    pub fn dismiss_alert(&mut self) {
        self.success_dismissed = true;
    }

    /// Banner for the current submission state.
    pub fn alert(&self) -> Option<StatusAlert> {
        match &self.status {
            SubmitStatus::Failed(message) => Some(StatusAlert {
                kind: AlertKind::Danger,
                icon_class: "fa fa-times-circle",
                title: "Unable to send your request to the Customer Success team.",
                message: format!("Try refreshing your screen ({})", message),
                dismissible: false,
            }),
            SubmitStatus::Succeeded if !self.success_dismissed => Some(StatusAlert {
                kind: AlertKind::Success,
                icon_class: "fa fa-check-circle",
                title: "Request received",
                message: "The Customer Success team will contact you soon.".to_string(),
                dismissible: true,
            }),
            _ => None,
        }
    }
}
