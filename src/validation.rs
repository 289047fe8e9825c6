//! Form field validation rules.

use thiserror::Error;

/// A field that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a valid email address")]
    InvalidEmail { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidEmail { field }
            | ValidationError::TooLong { field, .. } => field,
        }
    }
}

/// Reject empty or whitespace-only values.
pub fn is_required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

/// Reject values that are not an email address. Empty values pass; combine
/// with [`is_required`] for mandatory fields.
pub fn is_valid_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || email_address::EmailAddress::is_valid(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail { field })
    }
}

/// Reject values longer than `max` characters.
pub fn max_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(is_required("Subject", "hello").is_ok());
        assert_eq!(
            is_required("Subject", "   "),
            Err(ValidationError::Required { field: "Subject" })
        );
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("Email", "admin@example.com").is_ok());
        assert!(is_valid_email("Email", "").is_ok());
        assert_eq!(
            is_valid_email("Email", "not-an-email"),
            Err(ValidationError::InvalidEmail { field: "Email" })
        );
    }

    #[test]
    fn test_max_length_counts_chars() {
        assert!(max_length("Notes", &"é".repeat(512), 512).is_ok());
        let err = max_length("Notes", &"a".repeat(513), 512).unwrap_err();
        assert_eq!(err.to_string(), "Notes must be at most 512 characters");
        assert_eq!(err.field(), "Notes");
    }
}
