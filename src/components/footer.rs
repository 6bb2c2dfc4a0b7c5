use chrono::Datelike;
use dioxus::prelude::*;

use crate::context::{go_to, use_navigation, use_site_config};

/// Page footer: site blurb, quick links and company names.
///
/// Quick links cover every configured section except the first, which is
/// the top of the page.
#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let nav = use_navigation();

    let identity = config.read().identity.clone();
    let links: Vec<_> = config.read().sections.iter().skip(1).cloned().collect();
    let companies: Vec<String> = config
        .read()
        .companies
        .entries
        .iter()
        .map(|c| c.name.clone())
        .collect();
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            div { class: "footer-container",
                div { class: "footer-content",
                    div { class: "footer-section",
                        h3 { "{identity.site_title}" }
                        p { "{identity.footer_tagline}" }
                    }
                    div { class: "footer-section",
                        h4 { "Links Rápidos" }
                        ul {
                            for entry in links {
                                li { key: "{entry.id}",
                                    button {
                                        r#type: "button",
                                        onclick: move |_| go_to(nav, entry.id),
                                        "{entry.label}"
                                    }
                                }
                            }
                        }
                    }
                    if !companies.is_empty() {
                        div { class: "footer-section",
                            h4 { "Empresas" }
                            ul {
                                for name in companies {
                                    li { key: "{name}", "{name}" }
                                }
                            }
                        }
                    }
                }
                div { class: "footer-bottom",
                    p { "© {year} {identity.site_title}. Todos os direitos reservados." }
                }
            }
        }
    }
}
