//! Error types for portal data payloads.

use thiserror::Error;

/// Errors raised while reading data returned by the portal API.
#[derive(Error, Debug)]
pub enum ModelError {
    /// JSON parsing error (includes missing required fields)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A coupon claims more redeemed enrollments than it has
    #[error("Coupon {id}: {redeemed} enrollments redeemed out of {total}")]
    RedeemedExceedsTotal {
        /// Coupon id
        id: u64,
        redeemed: u32,
        total: u32,
    },

    /// Two coupons share an id, so detail panel ids would collide
    #[error("Duplicate coupon id: {id}")]
    DuplicateCoupon {
        /// The repeated id
        id: u64,
    },

    /// Required field present but empty
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the empty field
        field: String,
    },
}

impl ModelError {
    /// Create a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
