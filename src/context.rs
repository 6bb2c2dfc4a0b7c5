//! Context providers for the portfolio page.
//!
//! The [`App`](crate::app::App) component provides the site configuration
//! and the shell's navigation state; sections read them with the hooks
//! below instead of threading props through every level.
//!
//! ```ignore
//! let config = use_site_config();
//! let nav = use_navigation();
//!
//! let title = config.read().contact.header.title.clone();
//!
//! rsx! {
//!     button { onclick: move |_| go_to(nav, SectionId::Contact), "{title}" }
//! }
//! ```

use dioxus::prelude::*;
use portfolio_core::{NavigationState, SectionId, SiteConfig};

use crate::viewport;

/// Get the site configuration loaded at startup.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> Signal<SiteConfig> {
    use_context::<Signal<SiteConfig>>()
}

/// Hook to access the shell's navigation state from context.
pub fn use_navigation() -> Signal<NavigationState> {
    use_context::<Signal<NavigationState>>()
}

/// Scroll to a section and close the mobile menu.
///
/// The menu closes even when the section element is not on the page.
pub fn go_to(mut nav: Signal<NavigationState>, section: SectionId) {
    viewport::scroll_to_section(section);
    nav.write().finish_navigation();
}
