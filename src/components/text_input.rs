//! Text input component.

use crate::classes::*;
use crate::hooks::*;
use dioxus::prelude::*;

/// A text input component.
#[component]
pub fn TextInput(
    /// The input state.
    state: Signal<String>,
    /// The input label.
    label: Option<String>,
    /// The input placeholder text.
    placeholder: Option<String>,
    /// Whether the input is disabled.
    #[props(default = false)]
    disabled: bool,
    /// An optional class name.
    class: Option<String>,
) -> Element {
    let id = use_id();
    let label_text = label.unwrap_or_default();
    let placeholder_text = placeholder.unwrap_or_default();

    rsx! {
        div {
            class: classes!(
                "text-input-container",
                disabled.then_some("text-input-container-disabled"),
                class
            ),

            label {
                class: "text-input-label",
                r#for: "{id}",

                "{label_text}"
            }

            input {
                id: "{id}",
                class: "text-input",
                r#type: "text",
                placeholder: "{placeholder_text}",
                disabled: "{disabled}",
                value: "{state}",
                oninput: move |event| state.set(event.value())
            }
        }
    }
}
