//! Subscription summary used by the add-users flow.

use serde::{Deserialize, Serialize};

/// Overview of one subscription plan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubscriptionOverview {
    pub uuid: String,
    /// Licenses not yet assigned to a learner
    pub unassigned: u32,
}
