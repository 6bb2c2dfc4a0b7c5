use dioxus::prelude::*;
use portfolio_core::SectionId;

use crate::components::{Markdown, SectionHeading};
use crate::context::use_site_config;

/// Biography (`#about`). The body comes from configuration as Markdown.
#[component]
pub fn AboutSection() -> Element {
    let config = use_site_config();
    let about = config.read().about.clone();

    rsx! {
        section { id: SectionId::About.as_str(), class: "about-section",
            div { class: "section-container",
                SectionHeading { title: about.header.title, subtitle: about.header.subtitle }

                div { class: "about-content",
                    div { class: "about-card",
                        h3 { "{about.heading}" }
                        Markdown { source: about.body, class: "about-text".to_string() }
                    }
                }
            }
        }
    }
}
