//! Placeholder shown until the shell's loading timer fires.

use dioxus::prelude::*;

use crate::components::{Glyph, LucideIcon};
use crate::context::use_site_config;

#[component]
pub fn LoadingScreen() -> Element {
    let config = use_site_config();
    let title = config.read().identity.site_title.clone();

    rsx! {
        div { class: "loading-screen",
            div { class: "loading-content",
                div { class: "loading-logo",
                    LucideIcon { glyph: Glyph::Code, size: 48 }
                }
                h2 { class: "loading-text", "{title}" }
            }
        }
    }
}
