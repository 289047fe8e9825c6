//! Coupon list with sibling coordination.
//!
//! While one coupon shows its details every other coupon is dimmed, and only
//! one coupon can be expanded at a time.

use portal_ui::widgets::DisclosureView;
use portal_ui::{Disclosure, Key, KeyOutcome, TriggerKeys};

use crate::message::Message;
use crate::model::CouponData;

/// Everything a renderer needs for one coupon row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRowView {
    pub title: String,
    pub valid_from_date: String,
    pub valid_to_date: String,
    pub unassigned_codes: u32,
    pub enrollments_redeemed: String,
    pub panel: DisclosureView,
}

struct CouponRow {
    data: CouponData,
    panel: Disclosure<Message>,
}

impl CouponRow {
    fn new(data: CouponData, keys: &TriggerKeys) -> Self {
        let id = data.id;
        let panel = Disclosure::new(data.details_id())
            .label("coupon details")
            .has_error(data.has_error)
            .trigger_keys(keys.clone())
            .on_expand(move || Message::CouponExpanded(id))
            .on_collapse(move || Message::CouponCollapsed(id));
        Self { data, panel }
    }

    fn view(&self) -> CouponRowView {
        CouponRowView {
            title: self.data.title.clone(),
            valid_from_date: self.data.valid_from_date.clone(),
            valid_to_date: self.data.valid_to_date.clone(),
            unassigned_codes: self.data.unassigned_codes,
            enrollments_redeemed: self.data.redemption_label(),
            panel: self.panel.view(),
        }
    }
}

#[derive(Default)]
pub struct CouponList {
    rows: Vec<CouponRow>,
    trigger_keys: TriggerKeys,
}

impl CouponList {
    pub fn new(trigger_keys: TriggerKeys) -> Self {
        Self {
            rows: Vec::new(),
            trigger_keys,
        }
    }

    /// Replace the list. Existing panels are discarded.
    pub fn set_coupons(&mut self, coupons: Vec<CouponData>) {
        self.rows = coupons
            .into_iter()
            .map(|data| CouponRow::new(data, &self.trigger_keys))
            .collect();
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn row_mut(&mut self, id: u64) -> Option<&mut CouponRow> {
        let row = self.rows.iter_mut().find(|row| row.data.id == id);
        if row.is_none() {
            log::warn!("No coupon with id {}", id);
        }
        row
    }

    /// Pointer click on a coupon row.
    pub fn click(&mut self, id: u64) -> Option<Message> {
        self.row_mut(id)?.panel.toggle()
    }

    /// Key press on a focused coupon row.
    pub fn key_down(&mut self, id: u64, key: &Key) -> (KeyOutcome, Option<Message>) {
        match self.row_mut(id) {
            Some(row) => row.panel.handle_key_down(key),
            None => (KeyOutcome::default(), None),
        }
    }

    /// A coupon opened: close any other open coupon and dim the rest.
    pub fn coupon_expanded(&mut self, id: u64) {
        for row in self.rows.iter_mut().filter(|row| row.data.id != id) {
            if row.panel.is_expanded() {
                row.panel.close();
            }
            row.panel.set_dim_opacity(true);
        }
        log::debug!(
            "Coupon {} expanded, {} siblings dimmed",
            id,
            self.rows.len().saturating_sub(1)
        );
    }

    /// A coupon closed: restore every row.
    pub fn coupon_collapsed(&mut self, id: u64) {
        for row in &mut self.rows {
            row.panel.set_dim_opacity(false);
        }
        log::debug!("Coupon {} collapsed", id);
    }

    /// Id of the coupon currently showing details.
    pub fn expanded(&self) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.panel.is_expanded())
            .map(|row| row.data.id)
    }

    pub fn views(&self) -> Vec<CouponRowView> {
        self.rows.iter().map(CouponRow::view).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coupon(id: u64, has_error: bool) -> CouponData {
        CouponData {
            id,
            title: format!("Coupon {}", id),
            valid_from_date: "2026-01-01".to_string(),
            valid_to_date: "2026-12-31".to_string(),
            unassigned_codes: 1,
            enrollments_redeemed: 1,
            total_enrollments: 2,
            has_error,
        }
    }

    fn list() -> CouponList {
        let mut list = CouponList::new(TriggerKeys::default());
        list.set_coupons(vec![coupon(1, false), coupon(2, true), coupon(3, false)]);
        list
    }

    /// Deliver a notification the way the app does.
    fn deliver(list: &mut CouponList, msg: Option<Message>) {
        match msg {
            Some(Message::CouponExpanded(id)) => list.coupon_expanded(id),
            Some(Message::CouponCollapsed(id)) => list.coupon_collapsed(id),
            other => assert!(other.is_none(), "unexpected {:?}", other),
        }
    }

    #[test]
    fn test_expanding_dims_siblings() {
        let mut l = list();
        let msg = l.click(2);
        assert_eq!(msg, Some(Message::CouponExpanded(2)));
        deliver(&mut l, msg);

        let views = l.views();
        assert!(!views[1].panel.dimmed);
        assert!(views[1].panel.expanded);
        assert!(views[0].panel.dimmed && views[2].panel.dimmed);
        // Coupon 2 has an error, but it is hidden while its details are open.
        assert!(!views[1].panel.shows_error_icon);
    }

    #[test]
    fn test_collapsing_restores_all() {
        let mut l = list();
        let msg = l.click(1);
        deliver(&mut l, msg);
        let (outcome, msg) = l.key_down(1, &Key::Escape);
        assert!(outcome.default_prevented);
        assert_eq!(msg, Some(Message::CouponCollapsed(1)));
        deliver(&mut l, msg);
        assert!(l.views().iter().all(|v| !v.panel.dimmed && !v.panel.expanded));
        assert_eq!(l.expanded(), None);
    }

    #[test]
    fn test_only_one_expanded() {
        let mut l = list();
        let msg = l.click(1);
        deliver(&mut l, msg);
        let (_, msg) = l.key_down(3, &Key::Enter);
        deliver(&mut l, msg);
        assert_eq!(l.expanded(), Some(3));
        let views = l.views();
        assert!(!views[0].panel.expanded);
        assert!(views[0].panel.dimmed);
        assert!(!views[2].panel.dimmed);
    }

    #[test]
    fn test_unknown_coupon() {
        let mut l = list();
        assert_eq!(l.click(99), None);
        let (outcome, msg) = l.key_down(99, &Key::Enter);
        assert!(!outcome.default_prevented);
        assert!(msg.is_none());
    }

    #[test]
    fn test_row_view_fields() {
        let l = list();
        let view = &l.views()[1];
        assert_eq!(view.title, "Coupon 2");
        assert_eq!(view.enrollments_redeemed, "1 of 2 (50%)");
        assert_eq!(view.panel.aria_controls, "coupon-details-2");
        assert!(view.panel.shows_error_border);
    }
}
