//! Input Field Components
//!
//! Labelled text inputs and textareas. The `id` ties the label to the
//! control and the `name` is what the form reports on submit.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    /// Form field name
    pub name: String,
    /// Label text
    pub label: String,
    /// Current input value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, tel, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Whether the browser should block submission while empty
    #[props(default = false)]
    pub required: bool,
    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line labelled input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         name: "name".to_string(),
///         label: "Nome".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-group",
            label { r#for: "{props.id}", "{props.label}" }
            input {
                id: "{props.id}",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used for the label's `for`
    pub id: String,
    /// Form field name
    pub name: String,
    /// Label text
    pub label: String,
    /// Current textarea value
    pub value: String,
    /// Handler called on every keystroke
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    /// Whether the browser should block submission while empty
    #[props(default = false)]
    pub required: bool,
    /// Whether the textarea is disabled
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line labelled input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-group",
            label { r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                name: "{props.name}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}
