//! Webview viewport bridge.
//!
//! Scroll events and element geometry only exist inside the webview, so a
//! small script reports them back over the eval channel. The script keeps
//! its `scroll` listener until [`WebviewViewport::disconnect`] sends the
//! stop message.

use dioxus::prelude::*;
use portfolio_core::{SectionId, ViewportObserver, ViewportSnapshot};

/// Scroll observer backed by a listener installed in the webview.
#[derive(Clone)]
pub struct WebviewViewport {
    eval: document::Eval,
    connected: bool,
}

impl WebviewViewport {
    /// Install the scroll listener, reporting bounds for `sections`.
    ///
    /// Must be called from inside a component (it needs the runtime).
    pub fn connect(sections: &[SectionId]) -> Self {
        let ids: Vec<&str> = sections.iter().map(|s| s.as_str()).collect();
        let ids = serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string());

        let script = format!(
            r#"
            const ids = {ids};
            const report = () => {{
                const sections = [];
                for (const id of ids) {{
                    const el = document.getElementById(id);
                    if (el) {{
                        sections.push({{ id, top: el.offsetTop, height: el.offsetHeight }});
                    }}
                }}
                dioxus.send({{ scroll_y: window.scrollY, sections }});
            }};
            window.addEventListener("scroll", report, {{ passive: true }});
            await dioxus.recv();
            window.removeEventListener("scroll", report);
            "#
        );

        tracing::debug!("viewport listener installed for {} sections", sections.len());
        Self {
            eval: document::eval(&script),
            connected: true,
        }
    }
}

impl ViewportObserver for WebviewViewport {
    async fn next_snapshot(&mut self) -> Option<ViewportSnapshot> {
        if !self.connected {
            return None;
        }
        match self.eval.recv::<ViewportSnapshot>().await {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::debug!("viewport channel closed: {:?}", e);
                self.connected = false;
                None
            }
        }
    }

    fn disconnect(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;
        if let Err(e) = self.eval.send(true) {
            tracing::debug!("viewport listener already gone: {:?}", e);
        }
    }
}

/// Smooth-scroll the section into view. Silently does nothing if the
/// element is not rendered.
pub fn scroll_to_section(section: SectionId) {
    let id = serde_json::to_string(section.as_str()).unwrap_or_default();
    document::eval(&format!(
        r#"
        const el = document.getElementById({id});
        if (el) {{
            el.scrollIntoView({{ behavior: "smooth" }});
        }}
        "#
    ));
}
