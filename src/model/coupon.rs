//! Coupon summary as listed on the code management screen.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ModelError;
use crate::constants::COUPON_DETAILS_ID_PREFIX;

/// One coupon row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponData {
    pub id: u64,
    pub title: String,
    pub valid_from_date: String,
    pub valid_to_date: String,
    pub unassigned_codes: u32,
    pub enrollments_redeemed: u32,
    pub total_enrollments: u32,
    /// Upstream error signal for this coupon
    #[serde(default)]
    pub has_error: bool,
}

impl CouponData {
    /// Id of the detail panel the coupon row controls.
    pub fn details_id(&self) -> String {
        format!("{}{}", COUPON_DETAILS_ID_PREFIX, self.id)
    }

    /// Share of enrollments redeemed, rounded half up to a whole percent.
    ///
    /// `None` when the coupon has no enrollments at all; there is no
    /// meaningful ratio to show in that case.
    pub fn redemption_percentage(&self) -> Option<u64> {
        if self.total_enrollments == 0 {
            return None;
        }
        let redeemed = u64::from(self.enrollments_redeemed);
        let total = u64::from(self.total_enrollments);
        // round(redeemed / total * 100) without going through floats
        let pct = (200 * redeemed + total) / (2 * total);
        Some(pct)
    }

    /// Text of the "Enrollments Redeemed" cell, e.g. `3 of 8 (38%)`.
    pub fn redemption_label(&self) -> String {
        let base = format!("{} of {}", self.enrollments_redeemed, self.total_enrollments);
        match self.redemption_percentage() {
            Some(pct) => format!("{} ({}%)", base, pct),
            None => base,
        }
    }

    /// Check the invariants the API is expected to uphold.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.title.trim().is_empty() {
            return Err(ModelError::missing_field("title"));
        }
        if self.enrollments_redeemed > self.total_enrollments {
            return Err(ModelError::RedeemedExceedsTotal {
                id: self.id,
                redeemed: self.enrollments_redeemed,
                total: self.total_enrollments,
            });
        }
        Ok(())
    }
}

/// Parse and validate a coupon list payload.
pub fn parse_coupons(json: &str) -> Result<Vec<CouponData>, ModelError> {
    let coupons: Vec<CouponData> = serde_json::from_str(json)?;
    let mut seen = HashSet::new();
    for coupon in &coupons {
        coupon.validate()?;
        if !seen.insert(coupon.id) {
            return Err(ModelError::DuplicateCoupon { id: coupon.id });
        }
    }
    log::debug!("Parsed {} coupons", coupons.len());
    Ok(coupons)
}
