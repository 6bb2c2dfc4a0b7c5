use dioxus::prelude::*;
use portfolio_core::SectionId;

use crate::components::SectionHeading;
use crate::context::use_site_config;

/// Experience summary (`#experience`)
#[component]
pub fn ExperienceSection() -> Element {
    let config = use_site_config();
    let experience = config.read().experience.clone();

    rsx! {
        section { id: SectionId::Experience.as_str(), class: "experience-section",
            div { class: "section-container",
                SectionHeading {
                    title: experience.header.title,
                    subtitle: experience.header.subtitle,
                }

                div { class: "experience-card",
                    h3 { "{experience.heading}" }
                    for (index, item) in experience.items.into_iter().enumerate() {
                        div { key: "{index}", class: "experience-item",
                            h4 { "{item.title}" }
                            p { "{item.description}" }
                        }
                    }
                }
            }
        }
    }
}
