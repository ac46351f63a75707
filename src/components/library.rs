//! The library listing pane.

use super::{show_notification, LoadingButton, LoadingPanel, TextInput};
use crate::format::format_file_size;
use crate::logger::log_debug;
use crate::services::*;
use dioxus::prelude::*;
use std::path::PathBuf;

/// The snapshot key for the rescan button.
const RESCAN_KEY: &str = "library-rescan";

/// The snapshot key for the summary panel.
const SUMMARY_KEY: &str = "library-summary";

/// The summary text for an empty selection.
const NO_FOLDER_SUMMARY: &str = "No library folder selected";

/// The library listing pane. Scans the configured folder for video files
/// and lists them with their formatted sizes.
#[component]
pub fn Library(
    /// The configured library folder.
    folder: Signal<Option<PathBuf>>,
) -> Element {
    let notifications = use_context::<Signal<Notifications>>();
    let mut loading_states = use_context::<Signal<LoadingStates>>();
    let mut entries = use_signal(Vec::<VideoEntry>::new);
    let filter = use_signal(String::new);
    let mut rescan = use_signal(|| Control::button("Rescan library"));
    let mut summary = use_signal(|| Control::panel(NO_FOLDER_SUMMARY));

    let run_scan = move || {
        spawn(async move {
            // A folder change can land while a scan is already in flight.
            if loading_states.peek().is_loading(RESCAN_KEY) {
                return;
            }

            let Some(path) = folder.peek().clone() else {
                entries.set(Vec::new());
                summary.set(Control::panel(NO_FOLDER_SUMMARY));
                return;
            };

            loading_states
                .write()
                .show(RESCAN_KEY, &mut rescan.write(), Some("Scanning…"));
            loading_states.write().show(
                SUMMARY_KEY,
                &mut summary.write(),
                Some("Scanning the library folder…"),
            );

            let result = scan_library(&path).await;

            loading_states.write().hide(RESCAN_KEY, &mut rescan.write());
            loading_states.write().hide(SUMMARY_KEY, &mut summary.write());

            match result {
                Ok(videos) => {
                    log_debug(
                        "library",
                        "scan finished",
                        Some(&serde_json::json!({
                            "path": path.display().to_string(),
                            "videos": videos.len(),
                        })),
                    );

                    let total = videos.iter().map(|video| video.size).sum::<u64>();
                    summary.set(Control::panel(format!(
                        "{} videos ({})",
                        videos.len(),
                        format_file_size(total)
                    )));
                    show_notification(
                        notifications,
                        format!("Library scanned: {} videos found", videos.len()),
                        NotificationKind::Success,
                    );
                    entries.set(videos);
                }
                Err(err) => {
                    log_debug("library", &format!("scan failed: {err}"), None);

                    summary.set(Control::panel("The library folder could not be read"));
                    show_notification(
                        notifications,
                        format!("Failed to scan the library: {err}"),
                        NotificationKind::Error,
                    );
                    entries.set(Vec::new());
                }
            }
        });
    };

    // Rescan whenever a different library folder is chosen.
    use_effect(move || {
        let _ = folder();
        run_scan();
    });

    let filter_text = filter();
    let visible = entries()
        .into_iter()
        .filter(|entry| matches_filter(&entry.name, &filter_text))
        .collect::<Vec<_>>();

    rsx! {
        section {
            class: "library",

            div {
                class: "library-controls",

                TextInput {
                    state: filter,
                    label: "Filter",
                    placeholder: "Filter by file name",
                }

                LoadingButton {
                    control: rescan,
                    class: "library-rescan",
                    onclick: move |_| run_scan(),
                }
            }

            LoadingPanel {
                control: summary,
                class: "library-summary",
            }

            if visible.is_empty() {
                p {
                    class: "library-empty",
                    "No videos to show"
                }
            } else {
                ul {
                    class: "library-list",

                    for entry in visible {
                        li {
                            key: "{entry.name}",
                            class: "library-entry",

                            span {
                                class: "library-entry-name",
                                "{entry.name}"
                            }

                            span {
                                class: "library-entry-size",
                                "{format_file_size(entry.size)}"
                            }
                        }
                    }
                }
            }
        }
    }
}
