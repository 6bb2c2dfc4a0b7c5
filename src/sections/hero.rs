//! Hero banner (`#home`): greeting, tagline and the two call-to-action buttons.

use dioxus::prelude::*;
use portfolio_core::SectionId;
use portfolio_ui::{Button, ButtonVariant};

use crate::components::{Glyph, LucideIcon};
use crate::context::{go_to, use_navigation, use_site_config};

#[component]
pub fn HeroSection() -> Element {
    let config = use_site_config();
    let nav = use_navigation();
    let identity = config.read().identity.clone();

    rsx! {
        section { id: SectionId::Home.as_str(), class: "hero-section",
            div { class: "hero-background",
                div { class: "hero-overlay" }
            }

            div { class: "hero-container",
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        "Olá, eu sou "
                        span { class: "hero-name", "{identity.owner}" }
                    }
                    p { class: "hero-subtitle", "{identity.tagline}" }

                    div { class: "hero-buttons",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| go_to(nav, SectionId::About),
                            "Conheça Mais"
                        }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| go_to(nav, SectionId::Contact),
                            "Entre em Contato"
                        }
                    }
                }

                div { class: "hero-scroll-indicator",
                    div { class: "scroll-arrow",
                        LucideIcon { glyph: Glyph::ChevronDown, size: 24 }
                    }
                }
            }
        }
    }
}
