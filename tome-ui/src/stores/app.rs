//! Top-level application state store
//!
//! Combines all sub-states into a single Store. Components access state via
//! lensing: `app.state.books().term()`.

use super::books::BooksState;
use super::reading_list::ReadingListState;
use super::ui::SnackbarState;
use dioxus::prelude::*;

/// Top-level application state combining all sub-states
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Book search state (results, current term)
    pub books: BooksState,
    /// Reading list state
    pub reading_list: ReadingListState,
    /// Snackbar stack
    pub snackbars: SnackbarState,
}
