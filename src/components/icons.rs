//! Lucide icons as inline SVG.

use dioxus::prelude::*;
use portfolio_core::Icon;

/// Every icon the page draws.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    User,
    Briefcase,
    Building,
    MessageCircle,
    Users,
    Shield,
    TrendingUp,
    Code,
    Menu,
    Close,
    ChevronDown,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
}

impl From<Icon> for Glyph {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::User => Glyph::User,
            Icon::Briefcase => Glyph::Briefcase,
            Icon::Building => Glyph::Building,
            Icon::MessageCircle => Glyph::MessageCircle,
            Icon::Users => Glyph::Users,
            Icon::Shield => Glyph::Shield,
            Icon::TrendingUp => Glyph::TrendingUp,
        }
    }
}

#[component]
pub fn LucideIcon(glyph: Glyph, #[props(default = 24)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph_paths(glyph)}
        }
    }
}

fn glyph_paths(glyph: Glyph) -> Element {
    match glyph {
        Glyph::User => rsx! {
            circle { cx: "12", cy: "8", r: "5" }
            path { d: "M20 21a8 8 0 0 0-16 0" }
        },
        Glyph::Briefcase => rsx! {
            path { d: "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16" }
            rect { width: "20", height: "14", x: "2", y: "6", rx: "2" }
        },
        Glyph::Building => rsx! {
            rect { width: "16", height: "20", x: "4", y: "2", rx: "2", ry: "2" }
            path { d: "M9 22v-4h6v4" }
            path { d: "M8 6h.01M16 6h.01M12 6h.01M12 10h.01M12 14h.01M16 10h.01M16 14h.01M8 10h.01M8 14h.01" }
        },
        Glyph::MessageCircle => rsx! {
            path { d: "M7.9 20A9 9 0 1 0 4 16.1L2 22Z" }
        },
        Glyph::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        Glyph::Shield => rsx! {
            path { d: "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z" }
        },
        Glyph::TrendingUp => rsx! {
            polyline { points: "22 7 13.5 15.5 8.5 10.5 2 17" }
            polyline { points: "16 7 22 7 22 13" }
        },
        Glyph::Code => rsx! {
            path { d: "m18 16 4-4-4-4" }
            path { d: "m6 8-4 4 4 4" }
            path { d: "m14.5 4-5 16" }
        },
        Glyph::Menu => rsx! {
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        },
        Glyph::Close => rsx! {
            path { d: "M18 6 6 18" }
            path { d: "m6 6 12 12" }
        },
        Glyph::ChevronDown => rsx! {
            path { d: "m6 9 6 6 6-6" }
        },
        Glyph::Mail => rsx! {
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        },
        Glyph::Phone => rsx! {
            path { d: "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" }
        },
        Glyph::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        Glyph::Github => rsx! {
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        },
        Glyph::Linkedin => rsx! {
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        },
    }
}
