use dioxus::prelude::*;
use portfolio_core::SectionId;

use crate::components::{CompanyCard, SectionHeading};
use crate::context::use_site_config;

/// Affiliated companies grid (`#companies`)
#[component]
pub fn CompaniesSection() -> Element {
    let config = use_site_config();
    let companies = config.read().companies.clone();

    rsx! {
        section { id: SectionId::Companies.as_str(), class: "companies-section",
            div { class: "section-container",
                SectionHeading {
                    title: companies.header.title,
                    subtitle: companies.header.subtitle,
                }

                div { class: "companies-grid",
                    for company in companies.entries {
                        CompanyCard { key: "{company.name}", company: company.clone() }
                    }
                }
            }
        }
    }
}
