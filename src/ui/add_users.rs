//! "Add Users" action button and its modal.

use portal_ui::{Callback, Callback0};

use crate::model::SubscriptionOverview;

/// What the add-users modal displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddUsersModalView {
    pub title: &'static str,
    pub available_subscription_count: u32,
    pub subscription_uuid: String,
}

pub struct AddUsersButton<M> {
    modal_open: bool,
    subscription: SubscriptionOverview,
    /// Receives the number of users added
    on_success: Callback<u32, M>,
    /// Optional; invoked after the modal is closed
    on_close: Callback0<M>,
}

impl<M> AddUsersButton<M> {
    pub fn new(subscription: SubscriptionOverview) -> Self {
        Self {
            modal_open: false,
            subscription,
            on_success: Callback::none(),
            on_close: Callback0::none(),
        }
    }

    pub fn on_success<F>(mut self, callback: F) -> Self
    where
        F: Fn(u32) -> M + 'static,
    {
        self.on_success = Callback::new(callback);
        self
    }

    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: Fn() -> M + 'static,
    {
        self.on_close = Callback0::new(move |_| callback());
        self
    }

    pub fn label(&self) -> &'static str {
        "Add Users"
    }

    pub fn is_open(&self) -> bool {
        self.modal_open
    }

    pub fn open(&mut self) {
        self.modal_open = true;
    }

    /// Close the modal, then notify the owner.
    pub fn close(&mut self) -> Option<M> {
        if !self.modal_open {
            return None;
        }
        self.modal_open = false;
        self.on_close.emit()
    }

    /// Users were added; the modal stays open until closed.
    pub fn succeed(&mut self, added: u32) -> Option<M> {
        self.subscription.unassigned = self.subscription.unassigned.saturating_sub(added);
        log::debug!(
            "Added {} users to subscription {}",
            added,
            self.subscription.uuid
        );
        self.on_success.call(added)
    }

    pub fn modal(&self) -> Option<AddUsersModalView> {
        self.modal_open.then(|| AddUsersModalView {
            title: "Add Users",
            available_subscription_count: self.subscription.unassigned,
            subscription_uuid: self.subscription.uuid.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Msg {
        Added(u32),
        Closed,
    }

    fn overview() -> SubscriptionOverview {
        SubscriptionOverview {
            uuid: "sub-1".to_string(),
            unassigned: 10,
        }
    }

    #[test]
    fn test_modal_shows_subscription() {
        let mut button: AddUsersButton<Msg> = AddUsersButton::new(overview());
        assert!(button.modal().is_none());
        button.open();
        let modal = button.modal().unwrap();
        assert_eq!(modal.available_subscription_count, 10);
        assert_eq!(modal.subscription_uuid, "sub-1");
    }

    #[test]
    fn test_close_without_handler() {
        let mut button: AddUsersButton<Msg> = AddUsersButton::new(overview());
        button.open();
        assert_eq!(button.close(), None);
        assert!(!button.is_open());
    }

    #[test]
    fn test_success_then_close() {
        let mut button = AddUsersButton::new(overview())
            .on_success(Msg::Added)
            .on_close(|| Msg::Closed);
        button.open();
        assert_eq!(button.succeed(3), Some(Msg::Added(3)));
        assert_eq!(button.modal().unwrap().available_subscription_count, 7);
        assert_eq!(button.close(), Some(Msg::Closed));
        assert_eq!(button.close(), None);
    }
}
