//! Components whose content is swapped for a loading indicator.

use crate::classes::*;
use crate::services::Control;
use dioxus::prelude::*;

/// A button backed by a [`Control`], rendered from its current markup and
/// disabled state. While a loading indicator is shown the click handler
/// is not called.
#[component]
pub fn LoadingButton(
    /// The control state backing the button.
    control: Signal<Control>,
    /// An optional class name.
    class: Option<String>,
    /// The on click handler.
    onclick: EventHandler<()>,
) -> Element {
    let current = control();

    rsx! {
        button {
            r#type: "button",
            class: classes!("button", "button-primary", class),
            disabled: current.disabled,
            onclick: move |_| {
                if !control.peek().disabled {
                    onclick.call(());
                }
            },
            dangerous_inner_html: "{current.markup}",
        }
    }
}

/// A content panel backed by a [`Control`], rendered from its current
/// markup.
#[component]
pub fn LoadingPanel(
    /// The control state backing the panel.
    control: Signal<Control>,
    /// An optional class name.
    class: Option<String>,
) -> Element {
    rsx! {
        div {
            class: classes!("panel", class),
            dangerous_inner_html: "{control().markup}",
        }
    }
}
