//! Toast notifications.

use std::cell::RefCell;

/// Most toasts shown at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Visible toast queue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationsSlice {
    /// Toasts in display order, oldest first.
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NotificationsSlice {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
        });
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            let drain = self.toasts.len() - MAX_VISIBLE_TOASTS;
            self.toasts.drain(0..drain);
        }
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Emits user-facing notifications.
pub trait Notifier {
    /// Report a completed action.
    fn success(&self, message: &str);
    /// Report a failed action.
    fn error(&self, message: &str);
}

impl Notifier for RefCell<NotificationsSlice> {
    fn success(&self, message: &str) {
        self.borrow_mut().push(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.borrow_mut().push(ToastKind::Error, message);
    }
}
