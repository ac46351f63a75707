//! Alert banner state.

use crate::constants::DEBUG;
use crate::services::default_library_folder;

/// The identity of an alert banner.
pub type AlertId = usize;

/// The visual style of an alert banner.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertStyle {
    /// A success alert.
    Success,
    /// An error alert.
    Error,
    /// A warning alert.
    Warning,
    /// An informational alert.
    Info,
}

impl AlertStyle {
    /// Returns the class name representation of the current style.
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// The lifecycle phase of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AlertPhase {
    /// The alert is fully visible.
    Shown,
    /// The alert is fading out.
    Fading,
    /// The alert has been hidden.
    Hidden,
}

impl AlertPhase {
    /// Returns the class name contributed by the current phase, if any.
    pub const fn class(&self) -> Option<&'static str> {
        match self {
            Self::Shown => None,
            Self::Fading => Some("fade-out"),
            Self::Hidden => Some("hidden"),
        }
    }
}

/// An alert banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// The alert's identity.
    pub id: AlertId,
    /// The message text.
    pub message: String,
    /// The visual style.
    pub style: AlertStyle,
    /// Whether the alert is exempt from auto-hiding.
    pub permanent: bool,
    /// The current lifecycle phase.
    pub phase: AlertPhase,
}

impl Alert {
    /// Creates a visible alert with the given identity, message, and style.
    pub fn new(id: AlertId, message: impl Into<String>, style: AlertStyle) -> Self {
        Self {
            id,
            message: message.into(),
            style,
            permanent: false,
            phase: AlertPhase::Shown,
        }
    }

    /// Marks the alert as exempt from auto-hiding.
    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }
}

/// Returns the identities of the alerts that should be scheduled for
/// auto-hiding: those not marked permanent and not already hidden.
pub fn auto_hide_targets(alerts: &[Alert]) -> Vec<AlertId> {
    alerts
        .iter()
        .filter(|alert| !alert.permanent && alert.phase != AlertPhase::Hidden)
        .map(|alert| alert.id)
        .collect()
}

/// Moves the alert with the given identity into the fading phase.
pub fn begin_fade(alerts: &mut [Alert], id: AlertId) {
    if let Some(alert) = alerts.iter_mut().find(|alert| alert.id == id) {
        alert.phase = AlertPhase::Fading;
    }
}

/// Moves the alert with the given identity into the hidden phase, leaving
/// the fading phase behind.
pub fn finish_hide(alerts: &mut [Alert], id: AlertId) {
    if let Some(alert) = alerts.iter_mut().find(|alert| alert.id == id) {
        alert.phase = AlertPhase::Hidden;
    }
}

/// Builds the banners shown when the window first opens.
pub fn startup_alerts() -> Vec<Alert> {
    let mut alerts = Vec::new();

    let default_folder_missing =
        default_library_folder().map_or(true, |folder| !folder.exists());

    if default_folder_missing {
        alerts.push(Alert::new(
            alerts.len(),
            "No default video folder was found. Choose a library folder in the sidebar.",
            AlertStyle::Warning,
        ));
    }

    if DEBUG {
        alerts.push(
            Alert::new(
                alerts.len(),
                "Debug build: verbose logging is enabled.",
                AlertStyle::Info,
            )
            .permanent(),
        );
    }

    alerts
}

/// Alert state tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_hide_targets_skip_permanent_and_hidden() {
        let mut alerts = vec![
            Alert::new(0, "saved", AlertStyle::Success),
            Alert::new(1, "always visible", AlertStyle::Info).permanent(),
            Alert::new(2, "failed", AlertStyle::Error),
        ];
        alerts[2].phase = AlertPhase::Hidden;

        assert_eq!(auto_hide_targets(&alerts), vec![0]);
    }

    #[test]
    fn test_auto_hide_targets_include_fading_alerts() {
        let mut alerts = vec![Alert::new(0, "going", AlertStyle::Warning)];
        alerts[0].phase = AlertPhase::Fading;

        assert_eq!(auto_hide_targets(&alerts), vec![0]);
    }

    #[test]
    fn test_phase_transitions_in_order() {
        let mut alerts = vec![Alert::new(0, "saved", AlertStyle::Success)];
        assert_eq!(alerts[0].phase, AlertPhase::Shown);
        assert_eq!(alerts[0].phase.class(), None);

        begin_fade(&mut alerts, 0);
        assert_eq!(alerts[0].phase, AlertPhase::Fading);
        assert_eq!(alerts[0].phase.class(), Some("fade-out"));

        finish_hide(&mut alerts, 0);
        assert_eq!(alerts[0].phase, AlertPhase::Hidden);
        assert_eq!(alerts[0].phase.class(), Some("hidden"));
    }

    #[test]
    fn test_transitions_ignore_unknown_ids() {
        let mut alerts = vec![Alert::new(0, "saved", AlertStyle::Success)];

        begin_fade(&mut alerts, 7);
        finish_hide(&mut alerts, 7);

        assert_eq!(alerts[0].phase, AlertPhase::Shown);
    }
}
