//! Snackbar (transient notification) state store

use dioxus::prelude::*;
use tome_common::ReadingListItem;

/// How long a snackbar stays up before auto-dismissing (in milliseconds)
pub const SNACKBAR_DURATION_MS: u64 = 2000;

/// Inverse intent carried by a snackbar's action button
#[derive(Clone, Debug, PartialEq)]
pub enum SnackbarAction {
    /// Undo an add: remove the book again
    UndoAdd { book_id: String },
    /// Undo a remove: restore the snapshot, finished flag included
    UndoRemove { item: ReadingListItem },
}

impl SnackbarAction {
    pub fn label(&self) -> &'static str {
        "Undo"
    }
}

/// A transient notification with an optional action
#[derive(Clone, Debug, PartialEq)]
pub struct Snackbar {
    pub id: u64,
    pub message: String,
    pub action: Option<SnackbarAction>,
}

/// Snackbar stack state
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SnackbarState {
    /// Open snackbars, oldest first
    pub snackbars: Vec<Snackbar>,
    /// Next snackbar id (ids are unique for the lifetime of the state)
    pub next_id: u64,
}

impl SnackbarState {
    /// Open a snackbar. Returns its id so the caller can schedule dismissal.
    pub fn push(&mut self, message: impl Into<String>, action: Option<SnackbarAction>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.snackbars.push(Snackbar {
            id,
            message: message.into(),
            action,
        });
        id
    }

    /// Close a snackbar. Closing one that already auto-dismissed is a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.snackbars.retain(|s| s.id != id);
    }

    /// Close a snackbar and hand back its action, if it was still open.
    pub fn take_action(&mut self, id: u64) -> Option<SnackbarAction> {
        let index = self.snackbars.iter().position(|s| s.id == id)?;
        self.snackbars.remove(index).action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_assigns_increasing_ids() {
        let mut state = SnackbarState::default();
        let a = state.push("added", None);
        let b = state.push("removed", None);
        assert!(b > a);
        assert_eq!(state.snackbars.len(), 2);
    }

    #[test]
    fn test_dismiss_removes_only_the_target() {
        let mut state = SnackbarState::default();
        let a = state.push("added", None);
        let b = state.push("removed", None);
        state.dismiss(a);
        assert_eq!(state.snackbars.len(), 1);
        assert_eq!(state.snackbars[0].id, b);
    }

    #[test]
    fn test_dismiss_after_auto_dismiss_is_noop() {
        let mut state = SnackbarState::default();
        let a = state.push("added", None);
        state.dismiss(a);
        state.dismiss(a);
        assert!(state.snackbars.is_empty());
    }

    #[test]
    fn test_take_action_returns_inverse_intent() {
        let mut state = SnackbarState::default();
        let id = state.push(
            "added",
            Some(SnackbarAction::UndoAdd {
                book_id: "b1".to_string(),
            }),
        );
        let action = state.take_action(id);
        assert_eq!(
            action,
            Some(SnackbarAction::UndoAdd {
                book_id: "b1".to_string()
            })
        );
        assert!(state.snackbars.is_empty());
    }

    #[test]
    fn test_take_action_on_dismissed_snackbar_returns_none() {
        let mut state = SnackbarState::default();
        let id = state.push("added", None);
        state.dismiss(id);
        assert_eq!(state.take_action(id), None);
    }
}
