//! Read-only Markdown rendering for configured copy.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert Markdown to an HTML fragment.
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Markdown(
    source: ReadOnlySignal<String>,
    #[props(default)] class: Option<String>,
) -> Element {
    let rendered = use_memo(move || markdown_to_html(&source()));

    rsx! {
        div {
            class: class.as_deref().unwrap_or("markdown-body"),
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let html = markdown_to_html("first\n\nsecond");
        assert_eq!(html, "<p>first</p>\n<p>second</p>\n");
    }

    #[test]
    fn inline_emphasis() {
        let html = markdown_to_html("**bold** and ~~gone~~");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<del>gone</del>"));
    }
}
