use dioxus::prelude::*;
use portfolio_core::{
    track_scroll, NavigationState, ScrollTracker, SectionId, SiteConfig, ViewportObserver,
};

use crate::components::{Footer, LoadingScreen, NavBar};
use crate::context::get_site_config;
use crate::sections::{
    AboutSection, CompaniesSection, ContactSection, ExperienceSection, HeroSection,
};
use crate::theme::GLOBAL_STYLES;
use crate::viewport::WebviewViewport;

/// Root application component (the page shell).
///
/// Provides global styles, configuration and navigation context, holds the
/// loading timer and owns the viewport observer that drives the active
/// section.
#[component]
pub fn App() -> Element {
    let config: Signal<SiteConfig> = use_signal(get_site_config);
    let mut nav: Signal<NavigationState> = use_signal(NavigationState::new);

    // Provide state to all child components
    use_context_provider(|| config);
    use_context_provider(|| nav);

    // One-shot loading timer; cancelled with the shell
    use_future(move || async move {
        let delay = config.peek().timings.loading_delay();
        tokio::time::sleep(delay).await;
        if nav.write().finish_loading() {
            tracing::info!("Loading screen lifted after {:?}", delay);
        }
    });

    // Scroll listener lives exactly as long as the shell
    let viewport = use_hook(|| WebviewViewport::connect(&config.peek().section_order()));
    use_drop({
        let mut viewport = viewport.clone();
        move || viewport.disconnect()
    });

    use_future(move || {
        let mut observer = viewport.clone();
        async move {
            let tracker = ScrollTracker::from_config(&config.peek());
            track_scroll(&mut observer, &tracker, |section| {
                nav.write().set_active(section);
            })
            .await;
        }
    });

    let loading = nav.read().is_loading();
    let order = config.read().section_order();

    rsx! {
        style { {GLOBAL_STYLES} }
        if loading {
            LoadingScreen {}
        } else {
            div { class: "App",
                NavBar {}
                for section in order {
                    {render_section(section)}
                }
                Footer {}
            }
        }
    }
}

/// Content block for a section id, in the order the configuration lists them.
fn render_section(section: SectionId) -> Element {
    match section {
        SectionId::Home => rsx! { HeroSection { key: "{section}" } },
        SectionId::About => rsx! { AboutSection { key: "{section}" } },
        SectionId::Experience => rsx! { ExperienceSection { key: "{section}" } },
        SectionId::Companies => rsx! { CompaniesSection { key: "{section}" } },
        SectionId::Contact => rsx! { ContactSection { key: "{section}" } },
    }
}
