//! Button Components
//!
//! - Primary / Secondary: hero call-to-action pair
//! - Nav / MobileNav: navigation entries, highlighted when active
//! - Submit: contact form submit

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled call to action
    #[default]
    Primary,
    /// Outlined call to action
    Secondary,
    /// Desktop navigation entry
    Nav,
    /// Entry inside the collapsible mobile menu
    MobileNav,
    /// Form submit
    Submit,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Nav => "nav-item",
            ButtonVariant::MobileNav => "mobile-nav-item",
            ButtonVariant::Submit => "submit-button",
        }
    }
}

/// Join the variant class with the active marker and any extras.
pub fn button_class(variant: ButtonVariant, active: bool, extra: Option<&str>) -> String {
    let mut class = variant.class().to_string();
    if active {
        class.push_str(" active");
    }
    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Marks the entry for the section currently in view
    #[props(default = false)]
    pub active: bool,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Nav,
///         active: nav.read().is_active(SectionId::About),
///         onclick: move |_| go_to(SectionId::About),
///         "Sobre Mim"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.active, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Icon-only button (menu toggle, etc.)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn-secondary");
        assert_eq!(ButtonVariant::Nav.class(), "nav-item");
        assert_eq!(ButtonVariant::MobileNav.class(), "mobile-nav-item");
        assert_eq!(ButtonVariant::Submit.class(), "submit-button");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn active_and_extra_classes() {
        assert_eq!(button_class(ButtonVariant::Nav, false, None), "nav-item");
        assert_eq!(
            button_class(ButtonVariant::Nav, true, None),
            "nav-item active"
        );
        assert_eq!(
            button_class(ButtonVariant::MobileNav, true, Some("wide")),
            "mobile-nav-item active wide"
        );
        assert_eq!(
            button_class(ButtonVariant::Primary, false, Some("")),
            "btn-primary"
        );
    }
}
