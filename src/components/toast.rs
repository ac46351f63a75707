//! Notification toast components.

use super::{Icon, IconButton};
use crate::classes::*;
use crate::constants::*;
use crate::icons::{CHECK_CIRCLE, EXCLAMATION_TRIANGLE, XMARK};
use crate::services::{NotificationKind, Notifications};
use dioxus::prelude::*;

/// The icon shown for a notification kind.
const fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => CHECK_CIRCLE,
        NotificationKind::Error => EXCLAMATION_TRIANGLE,
    }
}

/// Pushes a notification toast and schedules its fade-out and removal.
/// The toast fades after the auto-hide delay and is removed once the fade
/// completes. The schedule cannot be canceled, but removal of an already
/// dismissed toast is a no-op.
pub fn show_notification(
    mut notifications: Signal<Notifications>,
    message: impl Into<String>,
    kind: NotificationKind,
) {
    let id = notifications.write().push(message, kind);

    spawn(async move {
        tokio::time::sleep(AUTO_HIDE_DELAY).await;
        notifications.write().begin_fade(id);
        tokio::time::sleep(FADE_OUT_DURATION).await;
        notifications.write().remove(id);
    });
}

/// The stack of active notification toasts, anchored to the bottom right
/// corner of the window.
#[component]
pub fn ToastStack() -> Element {
    let mut notifications = use_context::<Signal<Notifications>>();

    rsx! {
        div {
            class: "toast-stack",

            for toast in notifications().toasts {
                div {
                    key: "{toast.id}",
                    class: classes!(
                        "toast",
                        format!("toast-{}", toast.kind.class_name()),
                        toast.fading.then_some("fade-out"),
                    ),

                    Icon {
                        data: kind_icon(toast.kind),
                        class: "toast-icon",
                    }

                    span {
                        class: "toast-message",
                        "{toast.message}"
                    }

                    IconButton {
                        data: XMARK,
                        class: "toast-close",
                        onclick: move |_| {
                            notifications.write().remove(toast.id);
                        }
                    }
                }
            }
        }
    }
}
