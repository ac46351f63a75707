//! Alert banner components.

use crate::classes::*;
use crate::constants::*;
use crate::services::{auto_hide_targets, begin_fade, finish_hide, Alert};
use dioxus::prelude::*;

/// Schedules fade-then-hide for every alert present that is not marked
/// permanent and not already hidden. Each alert runs on its own timer.
/// Alerts added after this runs are unaffected.
pub fn setup_alert_auto_hide(mut alerts: Signal<Vec<Alert>>) {
    let targets = auto_hide_targets(&alerts.peek());

    for id in targets {
        spawn(async move {
            tokio::time::sleep(AUTO_HIDE_DELAY).await;
            begin_fade(&mut alerts.write(), id);
            tokio::time::sleep(FADE_OUT_DURATION).await;
            finish_hide(&mut alerts.write(), id);
        });
    }
}

/// The stack of alert banners at the top of the window.
#[component]
pub fn AlertStack(
    /// The alerts to display.
    alerts: Signal<Vec<Alert>>,
) -> Element {
    rsx! {
        div {
            class: "alert-stack",

            for alert in alerts() {
                div {
                    key: "{alert.id}",
                    class: classes!(
                        "alert",
                        format!("alert-{}", alert.style.class_name()),
                        alert.permanent.then_some("alert-permanent"),
                        alert.phase.class(),
                    ),

                    "{alert.message}"
                }
            }
        }
    }
}
