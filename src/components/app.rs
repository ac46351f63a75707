//! Root-level application component.

use super::{
    setup_alert_auto_hide, show_notification, AlertStack, IconButton, Library, Sidebar, ToastStack,
};
use crate::constants::*;
use crate::icons::LIST;
use crate::logger::log_debug;
use crate::services::{startup_alerts, LoadingStates, NotificationKind, Notifications, UiConfig};
use dioxus::desktop::use_window;
use dioxus::prelude::*;
use std::path::PathBuf;

/// The global stylesheet asset.
const STYLES: &str = include_str!("../../assets/css/main.css");

/// The root application component.
#[component]
pub fn App() -> Element {
    let notifications = use_context_provider(|| Signal::new(Notifications::default()));
    use_context_provider(|| Signal::new(LoadingStates::default()));

    let mut config = use_signal(UiConfig::default);
    let mut config_revision = use_signal(|| 0usize);
    let mut folder = use_signal(|| None::<PathBuf>);
    let alerts = use_signal(startup_alerts);
    let sidebar_mouse_in = use_signal(|| false);
    let mut toggle_mouse_in = use_signal(|| false);

    let window = use_window();

    // One-shot bootstrap: schedule alert auto-hiding for the banners
    // present now, then check the window width once to pick the sidebar
    // mode. Neither is re-evaluated later.
    let mobile = use_hook(|| {
        setup_alert_auto_hide(alerts);

        let width = window
            .inner_size()
            .to_logical::<f64>(window.scale_factor())
            .width;
        width < SIDEBAR_BREAKPOINT
    });

    let mut sidebar_open = use_signal(|| !mobile);

    use_future(move || async move {
        match UiConfig::load().await {
            Ok(loaded) => {
                log_debug("config", "configuration loaded", None);
                folder.set(loaded.library_folder.clone());

                if !mobile {
                    sidebar_open.set(loaded.sidebar_open);
                }

                config.set(loaded);
            }
            Err(err) => {
                log_debug("config", &format!("failed to load the configuration: {err}"), None);
                show_notification(
                    notifications,
                    "Failed to load the saved settings",
                    NotificationKind::Error,
                );
            }
        }
    });

    use_effect(move || {
        let folder = folder();

        if config.peek().library_folder != folder {
            config.write().library_folder = folder;
            *config_revision.write() += 1;
        }
    });

    use_effect(move || {
        let open = sidebar_open();

        if config.peek().sidebar_open != open {
            config.write().sidebar_open = open;
            *config_revision.write() += 1;
        }
    });

    // Save the configuration once it stops changing. A new change while
    // the sleep is pending restarts the wait.
    use_future(move || async move {
        let revision = config_revision();

        if revision == 0 {
            return;
        }

        tokio::time::sleep(SAVE_CONFIG_SLEEP_DURATION).await;

        let snapshot = config.peek().clone();

        match snapshot.save().await {
            Ok(()) => log_debug("config", "configuration saved", None),
            Err(err) => {
                log_debug("config", &format!("failed to save the configuration: {err}"), None);
                show_notification(
                    notifications,
                    "Failed to save the settings",
                    NotificationKind::Error,
                );
            }
        }
    });

    rsx! {
        div {
            class: "app",
            onclick: move |_| {
                if mobile && sidebar_open() && !sidebar_mouse_in() && !toggle_mouse_in() {
                    sidebar_open.set(false);
                }
            },

            style {
                "{STYLES}"
            }

            if mobile {
                div {
                    class: "sidebar-toggle",
                    onmouseenter: move |_| {
                        toggle_mouse_in.set(true);
                    },
                    onmouseleave: move |_| {
                        toggle_mouse_in.set(false);
                    },

                    IconButton {
                        data: LIST,
                        onclick: move |_| {
                            sidebar_open.set(!sidebar_open());
                        }
                    }
                }
            }

            AlertStack {
                alerts: alerts,
            }

            div {
                class: "shell",

                Sidebar {
                    open: sidebar_open,
                    mobile: mobile,
                    mouse_in: sidebar_mouse_in,
                    folder: folder,
                }

                Library {
                    folder: folder,
                }
            }

            ToastStack {}
        }
    }
}
