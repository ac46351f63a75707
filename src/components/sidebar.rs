//! Sidebar component.

use super::FolderSelect;
use crate::classes::*;
use dioxus::prelude::*;
use std::path::PathBuf;

/// The application sidebar. On narrow windows it is hidden unless
/// expanded through the toggle button.
#[component]
pub fn Sidebar(
    /// Whether the sidebar is expanded.
    open: Signal<bool>,
    /// Whether the narrow-window toggle mode is active.
    mobile: bool,
    /// Tracks whether the pointer is over the sidebar.
    mouse_in: Signal<bool>,
    /// The configured library folder.
    folder: Signal<Option<PathBuf>>,
) -> Element {
    let visible = !mobile || open();

    rsx! {
        aside {
            class: classes!("sidebar", visible.then_some("sidebar-open")),
            onmouseenter: move |_| {
                mouse_in.set(true);
            },
            onmouseleave: move |_| {
                mouse_in.set(false);
            },

            h1 {
                class: "sidebar-title",
                "Video Manager"
            }

            FolderSelect {
                state: folder,
                label: "Library folder",
                empty_text: "No folder selected",
            }
        }
    }
}
