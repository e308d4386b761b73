//! Archive dialog state.
//!
//! # Design
//! - Each dialog instance owns its in-flight flag; nothing is global.
//! - Visibility belongs to whoever renders the dialog and is closed through [`DialogHandle`].
//! - The in-flight flag is only ever set through [`InFlightGuard`], which clears
//!   it on drop so every exit path re-enables the confirm control.

use crate::features::archive::logic::ArchiveDirection;
use std::cell::Cell;

/// Flags a toggle needs from the dialog that started it.
pub trait DialogHandle {
    /// Whether a toggle request is outstanding.
    fn in_flight(&self) -> bool;
    /// Set the in-flight flag.
    fn set_in_flight(&self, value: bool);
    /// Dismiss the dialog.
    fn close(&self);
}

/// Scoped hold on a dialog's in-flight flag.
pub struct InFlightGuard<'a, D: DialogHandle + ?Sized> {
    dialog: &'a D,
}

impl<'a, D: DialogHandle + ?Sized> InFlightGuard<'a, D> {
    /// Set the flag, or return `None` when a request is already outstanding.
    pub fn acquire(dialog: &'a D) -> Option<Self> {
        if dialog.in_flight() {
            return None;
        }
        dialog.set_in_flight(true);
        Some(Self { dialog })
    }
}

impl<D: DialogHandle + ?Sized> Drop for InFlightGuard<'_, D> {
    fn drop(&mut self) {
        self.dialog.set_in_flight(false);
    }
}

/// In-flight flag for one dialog instance.
///
/// Read synchronously by the toggle guard, so it lives outside render state.
#[derive(Debug, Default)]
pub struct ArchiveDialogState {
    in_flight: Cell<bool>,
}

impl ArchiveDialogState {
    /// An idle dialog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a toggle request is outstanding.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Set the in-flight flag.
    pub fn set_in_flight(&self, value: bool) {
        self.in_flight.set(value);
    }
}

/// Render state of the confirm button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmControl {
    /// Button text.
    pub label: String,
    /// Whether clicks are ignored.
    pub disabled: bool,
    /// Whether the busy spinner shows.
    pub loading: bool,
}

/// Confirm button state for `direction` given the in-flight flag.
#[must_use]
pub fn confirm_control(direction: ArchiveDirection, in_flight: bool) -> ConfirmControl {
    ConfirmControl {
        label: direction.confirm_label(),
        disabled: in_flight,
        loading: in_flight,
    }
}
