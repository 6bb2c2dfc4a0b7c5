//! Company card for the companies grid.

use dioxus::prelude::*;
use portfolio_core::CompanyProfile;

use crate::components::{Glyph, LucideIcon};

#[component]
pub fn CompanyCard(company: CompanyProfile) -> Element {
    rsx! {
        div { class: "company-card",
            div { class: "company-icon",
                LucideIcon { glyph: Glyph::from(company.icon), size: 32 }
            }
            h3 { "{company.name}" }
            p { class: "company-subtitle", "{company.subtitle}" }
            p { class: "company-description", "{company.description}" }
        }
    }
}
