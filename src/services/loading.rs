//! Loading-state swapping for controls.
//!
//! While a control shows a loading indicator, its original markup is held
//! in a store keyed by control identity and restored verbatim afterwards.

use crate::constants::DEFAULT_LOADING_MESSAGE;
use std::collections::HashMap;

/// The kinds of control the loading helpers can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ControlKind {
    /// A clickable button, disabled while loading.
    Button,
    /// A non-interactive content panel.
    Panel,
}

/// A control whose visible content can be swapped for a loading indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    /// The kind of control.
    pub kind: ControlKind,
    /// The control's current inner markup.
    pub markup: String,
    /// Whether the control is disabled.
    pub disabled: bool,
}

impl Control {
    /// Creates an enabled button control with the given markup.
    pub fn button(markup: impl Into<String>) -> Self {
        Self {
            kind: ControlKind::Button,
            markup: markup.into(),
            disabled: false,
        }
    }

    /// Creates a panel control with the given markup.
    pub fn panel(markup: impl Into<String>) -> Self {
        Self {
            kind: ControlKind::Panel,
            markup: markup.into(),
            disabled: false,
        }
    }
}

/// Builds the spinner markup shown while a control is loading.
fn loading_markup(message: &str) -> String {
    format!(r#"<span class="spinner"></span><span class="loading-message">{message}</span>"#)
}

/// Saved control markup, keyed by control identity.
///
/// At most one snapshot is held per control. A second `show` before the
/// matching `hide` overwrites the earlier snapshot, so the most recent
/// content wins on restore.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadingStates {
    /// The saved markup snapshots.
    snapshots: HashMap<String, String>,
}

impl LoadingStates {
    /// Swaps the control's content for a loading indicator with the given
    /// message, saving the current markup under the key. Buttons are
    /// disabled while loading.
    pub fn show(&mut self, key: &str, control: &mut Control, message: Option<&str>) {
        let message = message.unwrap_or(DEFAULT_LOADING_MESSAGE);
        self.snapshots.insert(key.to_owned(), control.markup.clone());
        control.markup = loading_markup(message);

        if control.kind == ControlKind::Button {
            control.disabled = true;
        }
    }

    /// Restores the control's saved markup, if any, and clears the slot.
    /// Buttons are re-enabled even when no snapshot was saved.
    pub fn hide(&mut self, key: &str, control: &mut Control) {
        if let Some(saved) = self.snapshots.remove(key) {
            control.markup = saved;
        }

        if control.kind == ControlKind::Button {
            control.disabled = false;
        }
    }

    /// Whether a snapshot is currently held for the given key.
    pub fn is_loading(&self, key: &str) -> bool {
        self.snapshots.contains_key(key)
    }
}
