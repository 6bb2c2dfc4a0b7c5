//! Contact section (`#contact`): the form plus the contact info card.

use dioxus::prelude::*;
use portfolio_core::SectionId;

use crate::components::{ContactForm, Glyph, LucideIcon, SectionHeading};
use crate::context::use_site_config;

/// Link target for a social icon; unconfigured profiles keep a placeholder
/// anchor so the row always shows.
fn social_href(url: Option<&str>) -> &str {
    url.filter(|u| !u.is_empty()).unwrap_or("#")
}

#[component]
pub fn ContactSection() -> Element {
    let config = use_site_config();
    let contact = config.read().contact.clone();
    let github = social_href(contact.github_url.as_deref()).to_string();
    let linkedin = social_href(contact.linkedin_url.as_deref()).to_string();

    rsx! {
        section { id: SectionId::Contact.as_str(), class: "contact-section",
            div { class: "contact-overlay" }

            div { class: "section-container",
                SectionHeading { title: contact.header.title, subtitle: contact.header.subtitle }

                div { class: "contact-content",
                    div { class: "contact-form-container",
                        ContactForm {}
                    }

                    div { class: "contact-info",
                        div { class: "contact-info-card",
                            h3 { "Informações de Contato" }
                            div { class: "contact-item",
                                LucideIcon { glyph: Glyph::Mail, size: 20 }
                                span { "{contact.email}" }
                            }
                            div { class: "contact-item",
                                LucideIcon { glyph: Glyph::Phone, size: 20 }
                                span { "{contact.phone}" }
                            }
                            div { class: "contact-item",
                                LucideIcon { glyph: Glyph::MapPin, size: 20 }
                                span { "{contact.location}" }
                            }
                            div { class: "contact-social",
                                a {
                                    class: "social-link",
                                    href: "{github}",
                                    "aria-label": "GitHub",
                                    LucideIcon { glyph: Glyph::Github, size: 24 }
                                }
                                a {
                                    class: "social-link",
                                    href: "{linkedin}",
                                    "aria-label": "LinkedIn",
                                    LucideIcon { glyph: Glyph::Linkedin, size: 24 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn social_links_fall_back_to_placeholder() {
        assert_eq!(social_href(None), "#");
        assert_eq!(social_href(Some("")), "#");
        assert_eq!(
            social_href(Some("https://github.com/ana")),
            "https://github.com/ana"
        );
    }
}
