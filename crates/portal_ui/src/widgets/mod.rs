// Widget implementations

mod disclosure;
mod sidebar;

pub use disclosure::{disclosure, Chevron, Disclosure, DisclosureView};
pub use sidebar::{sidebar, NavItem, NavLinkView, Sidebar, SidebarView};
