//! Navigation Bar Component
//!
//! Desktop: logo, one entry per configured section, active entry highlighted
//! Mobile: logo and a menu toggle that opens [`MobileMenu`]

use dioxus::prelude::*;
use portfolio_ui::{Button, ButtonVariant, IconButton};

use crate::components::{Glyph, LucideIcon, MobileMenu};
use crate::context::{go_to, use_navigation, use_site_config};

/// Navigation bar
///
/// - Left: code glyph and the owner's name
/// - Center/right: section entries with icons
/// - Mobile: menu/close toggle
#[component]
pub fn NavBar() -> Element {
    let config = use_site_config();
    let mut nav = use_navigation();

    let owner = config.read().identity.owner.clone();
    let entries = config.read().sections.clone();
    let menu_open = nav.read().is_menu_open();
    let toggle_label = if menu_open { "Fechar menu" } else { "Abrir menu" };

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                div { class: "nav-logo",
                    LucideIcon { glyph: Glyph::Code, size: 32 }
                    span { "{owner}" }
                }

                div { class: "nav-menu desktop-menu",
                    for entry in entries {
                        Button {
                            key: "{entry.id}",
                            variant: ButtonVariant::Nav,
                            active: nav.read().is_active(entry.id),
                            onclick: move |_| go_to(nav, entry.id),
                            LucideIcon { glyph: Glyph::from(entry.icon), size: 18 }
                            span { "{entry.label}" }
                        }
                    }
                }

                IconButton {
                    class: "mobile-menu-button".to_string(),
                    aria_label: toggle_label.to_string(),
                    onclick: move |_| {
                        let open = nav.write().toggle_menu();
                        tracing::debug!("mobile menu {}", if open { "opened" } else { "closed" });
                    },
                    if menu_open {
                        LucideIcon { glyph: Glyph::Close, size: 24 }
                    } else {
                        LucideIcon { glyph: Glyph::Menu, size: 24 }
                    }
                }
            }

            if menu_open {
                MobileMenu {}
            }
        }
    }
}
