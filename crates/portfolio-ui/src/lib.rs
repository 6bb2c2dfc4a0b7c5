//! Portfolio Site UI Widgets
//!
//! Small Dioxus building blocks shared by the page sections: buttons in
//! the hero/nav/submit styles and labelled form inputs.
//!
//! Styling lives in the application's global stylesheet; these widgets only
//! emit class names:
//! - `btn-primary` / `btn-secondary`: hero call-to-action buttons
//! - `nav-item` / `mobile-nav-item`: navigation entries (plus `active`)
//! - `submit-button`: the contact form submit
//! - `form-group`: label + control wrapper

pub mod components;

pub use components::*;
