//! Main portal application.
//!
//! `PortalApp` owns every screen's state and is driven exclusively through
//! [`Message`]s. Components answer a message with at most one follow-up
//! message (a request or notification), which is queued and processed in
//! FIFO order until nothing is left. Work that leaves the process, such as
//! sending a support request, is returned to the caller as a [`Command`].

use std::collections::VecDeque;

use portal_ui::{Key, KeyOutcome, NavItem};

use crate::config::PortalConfig;
use crate::message::Message;
use crate::model::PortalConfiguration;
use crate::ui::{
    menu_items, AddUsersButton, CouponList, PortalLayout, SubmitError, SupportForm,
};

/// Side effects the host must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// POST the request to the support endpoint and answer with
    /// `SupportSubmitSucceeded` or `SupportSubmitFailed`.
    SendSupportRequest(crate::ui::SupportRequest),
}

pub struct PortalApp {
    config: PortalConfig,
    portal: PortalConfiguration,
    layout: PortalLayout,
    coupons: CouponList,
    support: SupportForm,
    add_users: Option<AddUsersButton<Message>>,
}

impl PortalApp {
    pub fn new(
        config: PortalConfig,
        user_email: impl Into<String>,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let portal = PortalConfiguration::default();
        let mut layout =
            PortalLayout::new(config.layout.clone(), viewport_width, viewport_height);
        layout.set_menu(menu_items(&config.base_url, &config.features, &portal));
        Self {
            coupons: CouponList::new(config.trigger_keys.clone()),
            support: SupportForm::new(user_email, String::new()),
            config,
            portal,
            layout,
            add_users: None,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn portal(&self) -> &PortalConfiguration {
        &self.portal
    }

    pub fn layout(&self) -> &PortalLayout {
        &self.layout
    }

    pub fn coupons(&self) -> &CouponList {
        &self.coupons
    }

    pub fn support(&self) -> &SupportForm {
        &self.support
    }

    pub fn add_users(&self) -> Option<&AddUsersButton<Message>> {
        self.add_users.as_ref()
    }

    /// Navigation entries currently rendered.
    pub fn menu(&self) -> Vec<NavItem> {
        self.layout
            .view()
            .sidebar
            .links
            .into_iter()
            .map(|link| NavItem::new(link.title, link.destination, link.icon_class))
            .collect()
    }

    fn base_url(&self) -> String {
        if self.config.base_url.is_empty() && !self.portal.enterprise_slug.is_empty() {
            self.portal.base_url()
        } else {
            self.config.base_url.clone()
        }
    }

    /// First render of the page.
    pub fn mount(&mut self) -> Vec<Command> {
        let follow_up = self.layout.mount();
        self.drain(follow_up)
    }

    /// Process a message and everything it triggers.
    pub fn update(&mut self, message: Message) -> Vec<Command> {
        self.drain(Some(message))
    }

    /// Key press on a focused coupon row. The outcome tells the host whether
    /// to suppress the key's default action.
    pub fn coupon_key_down(&mut self, id: u64, key: &Key) -> (KeyOutcome, Vec<Command>) {
        let (outcome, follow_up) = self.coupons.key_down(id, key);
        (outcome, self.drain(follow_up))
    }

    fn drain(&mut self, first: Option<Message>) -> Vec<Command> {
        let mut queue: VecDeque<Message> = first.into_iter().collect();
        let mut commands = Vec::new();
        while let Some(message) = queue.pop_front() {
            log::trace!("Processing {:?}", message);
            if let Some(next) = self.handle(message, &mut commands) {
                queue.push_back(next);
            }
        }
        commands
    }

    fn handle(&mut self, message: Message, commands: &mut Vec<Command>) -> Option<Message> {
        match message {
            Message::PortalConfigurationLoaded(portal) => {
                self.portal = portal;
                let items = menu_items(&self.base_url(), &self.config.features, &self.portal);
                self.layout.set_menu(items);
                self.support
                    .set_enterprise_name(self.portal.enterprise_name.clone());
                None
            }
            Message::ViewportResized { width, height } => self.layout.resize(width, height),

            Message::Sidebar(event) => self.layout.sidebar_event(&event),
            Message::ExpandSidebar => self.layout.expand(),
            Message::CollapseSidebar => self.layout.collapse(),
            Message::ToggleSidebarPin => self.layout.toggle_pin(),
            Message::SidebarWidthChanged(width) => {
                self.layout.set_sidebar_width(width);
                None
            }

            Message::CouponsLoaded(coupons) => {
                let coupons: Vec<_> = coupons
                    .into_iter()
                    .filter(|coupon| match coupon.validate() {
                        Ok(()) => true,
                        Err(e) => {
                            log::warn!("Dropping coupon {}: {}", coupon.id, e);
                            false
                        }
                    })
                    .collect();
                log::info!("Showing {} coupons", coupons.len());
                self.coupons.set_coupons(coupons);
                None
            }
            Message::CouponClicked(id) => self.coupons.click(id),
            Message::CouponExpanded(id) => {
                self.coupons.coupon_expanded(id);
                None
            }
            Message::CouponCollapsed(id) => {
                self.coupons.coupon_collapsed(id);
                None
            }

            Message::SupportFieldChanged(field, value) => {
                self.support.set_value(field, value);
                None
            }
            Message::SubmitSupport => {
                match self.support.submit() {
                    Ok(request) => commands.push(Command::SendSupportRequest(request)),
                    Err(SubmitError::InProgress) => {
                        log::debug!("Ignoring duplicate support submission");
                    }
                    Err(e @ SubmitError::Invalid(_)) => {
                        log::debug!("Support form not submitted: {}", e);
                    }
                }
                None
            }
            Message::SupportSubmitSucceeded => {
                self.support.submit_succeeded();
                None
            }
            Message::SupportSubmitFailed(reason) => {
                self.support.submit_failed(reason);
                None
            }
            Message::DismissSupportAlert => {
                self.support.dismiss_alert();
                None
            }

            Message::SubscriptionLoaded(overview) => {
                self.add_users = Some(
                    AddUsersButton::new(overview)
                        .on_success(Message::UsersAdded)
                        .on_close(|| Message::AddUsersClosed),
                );
                None
            }
            Message::OpenAddUsers => {
                match self.add_users.as_mut() {
                    Some(button) => button.open(),
                    None => log::warn!("Add users requested before subscription loaded"),
                }
                None
            }
            Message::CloseAddUsers => self.add_users.as_mut().and_then(|b| b.close()),
            Message::AddUsersCompleted(count) => {
                self.add_users.as_mut().and_then(|b| b.succeed(count))
            }
            Message::UsersAdded(count) => {
                log::info!("{} users added", count);
                None
            }
            Message::AddUsersClosed => None,
        }
    }
}
