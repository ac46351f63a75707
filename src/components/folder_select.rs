//! Folder selection component.

use crate::classes::*;
use crate::hooks::*;
use dioxus::prelude::*;
use std::path::PathBuf;

/// Folder selection component.
#[component]
pub fn FolderSelect(
    /// The folder selection state.
    state: Signal<Option<PathBuf>>,
    /// The label text.
    label: Option<String>,
    /// Text to display when no folder is selected.
    empty_text: Option<String>,
    /// An optional class name.
    class: Option<String>,
) -> Element {
    let id = use_id();
    let label = label.unwrap_or_default();
    let display_text = state.with(|maybe_path| match maybe_path {
        Some(path) => path.display().to_string(),
        None => empty_text.unwrap_or_else(|| "No folder selected".to_owned()),
    });

    rsx! {
        div {
            class: classes!("folder-select-container", class),

            span {
                class: "folder-select-label",
                "{label}"
            }

            div {
                class: "folder-select",

                div {
                    class: "folder-select-display",
                    "{display_text}"
                }

                label {
                    class: "folder-select-button",
                    r#for: "{id}",
                    "Browse"
                }

                input {
                    id: "{id}",
                    class: "folder-select-input",
                    r#type: "file",
                    directory: true,
                    onchange: move |event| {
                        if let Some(file_engine) = event.files() {
                            if let Some(path) = file_engine.files().first() {
                                state.set(Some(PathBuf::from(path)));
                            }
                        }
                    }
                }
            }
        }
    }
}
