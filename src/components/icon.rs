//! Icon components.

use crate::classes::*;
use dioxus::prelude::*;

/// Icon component.
#[component]
pub fn Icon(
    /// The raw icon data.
    data: String,
    /// An optional class name for the icon element.
    class: Option<String>,
) -> Element {
    rsx! {
        div {
            class: classes!("icon", class),
            dangerous_inner_html: data
        }
    }
}

/// Icon button component.
#[component]
pub fn IconButton(
    /// The raw icon data.
    data: String,
    /// Whether the button is disabled.
    #[props(default = false)]
    disabled: bool,
    /// An optional class name for the icon button.
    class: Option<String>,
    /// The on click handler.
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: classes!(
                "icon-button",
                disabled.then_some("icon-button-disabled"),
                class
            ),
            onclick: move |_| if !disabled {
                onclick.call(());
            },

            Icon {
                data: data,
            }
        }
    }
}
