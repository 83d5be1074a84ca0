//! Reading list state store

use dioxus::prelude::*;
use tome_common::ReadingList;

/// State for the reading list sidebar
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ReadingListState {
    /// The user's reading list
    pub list: ReadingList,
    /// Whether the list is loading
    pub loading: bool,
    /// Error message if loading failed
    pub error: Option<String>,
}
