//! Mobile Menu Component
//!
//! Collapsible list of section entries, rendered under the nav bar while
//! the menu is open. Choosing an entry scrolls there and closes the menu.

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant};

use crate::components::{Glyph, LucideIcon};
use crate::context::{go_to, use_navigation, use_site_config};

#[component]
pub fn MobileMenu() -> Element {
    let config = use_site_config();
    let nav = use_navigation();
    let entries = config.read().sections.clone();

    rsx! {
        div { class: "mobile-menu",
            for entry in entries {
                Button {
                    key: "{entry.id}",
                    variant: ButtonVariant::MobileNav,
                    active: nav.read().is_active(entry.id),
                    onclick: move |_| go_to(nav, entry.id),
                    LucideIcon { glyph: Glyph::from(entry.icon), size: 20 }
                    span { "{entry.label}" }
                }
            }
        }
    }
}
