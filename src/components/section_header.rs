use dioxus::prelude::*;

/// Title + subtitle block above each content section.
#[component]
pub fn SectionHeading(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}
