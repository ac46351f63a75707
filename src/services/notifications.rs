//! Notification toast state.

/// The visual kind of a notification toast.
///
/// Only two branches exist: anything that is not a success renders as an
/// error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NotificationKind {
    /// A success notification.
    #[default]
    Success,
    /// An error notification.
    Error,
}

impl NotificationKind {
    /// Returns the class name representation of the current kind.
    pub const fn class_name(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl From<&str> for NotificationKind {
    fn from(kind: &str) -> Self {
        match kind {
            "success" => Self::Success,
            _ => Self::Error,
        }
    }
}

/// A notification toast.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// The toast's identity.
    pub id: usize,
    /// The message text.
    pub message: String,
    /// The visual kind.
    pub kind: NotificationKind,
    /// Whether the toast is currently fading out.
    pub fading: bool,
}

/// The set of active notification toasts, in creation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Notifications {
    /// The next toast identity.
    next_id: usize,
    /// The active toasts.
    pub toasts: Vec<Notification>,
}

impl Notifications {
    /// Appends a toast and returns its identity.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Notification {
            id,
            message: message.into(),
            kind,
            fading: false,
        });
        id
    }

    /// Starts fading the toast with the given identity.
    pub fn begin_fade(&mut self, id: usize) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.fading = true;
        }
    }

    /// Removes the toast with the given identity.
    pub fn remove(&mut self, id: usize) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Notification state tests.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_kinds_collapse_to_error() {
        assert_eq!(NotificationKind::from("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from("error"), NotificationKind::Error);
        assert_eq!(NotificationKind::from("warning"), NotificationKind::Error);
        assert_eq!(NotificationKind::from(""), NotificationKind::Error);
    }

    #[test]
    fn test_toasts_stack_in_creation_order() {
        let mut notifications = Notifications::default();
        let first = notifications.push("saved", NotificationKind::Success);
        let second = notifications.push("failed", NotificationKind::Error);

        assert_ne!(first, second);
        let messages = notifications
            .toasts
            .iter()
            .map(|toast| toast.message.as_str())
            .collect::<Vec<_>>();
        assert_eq!(messages, vec!["saved", "failed"]);
    }

    #[test]
    fn test_fade_then_remove() {
        let mut notifications = Notifications::default();
        let id = notifications.push("saved", NotificationKind::Success);
        assert!(!notifications.toasts[0].fading);

        notifications.begin_fade(id);
        assert!(notifications.toasts[0].fading);

        notifications.remove(id);
        assert!(notifications.toasts.is_empty());
    }

    #[test]
    fn test_remove_ignores_unknown_ids() {
        let mut notifications = Notifications::default();
        notifications.push("saved", NotificationKind::Success);

        notifications.remove(42);
        assert_eq!(notifications.toasts.len(), 1);
    }

    #[test]
    fn test_identities_are_not_reused() {
        let mut notifications = Notifications::default();
        let first = notifications.push("one", NotificationKind::Success);
        notifications.remove(first);

        let second = notifications.push("two", NotificationKind::Success);
        assert_ne!(first, second);
    }
}
