//! Shared UI components

pub mod book_card;
pub mod book_search;
pub mod button;
pub mod helpers;
pub mod icons;
pub mod reading_list;
pub mod snackbar;
pub mod text_input;

pub use book_card::BookCard;
pub use book_search::BookSearchView;
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use helpers::{ErrorDisplay, LoadingSpinner};
pub use icons::{BookOpenIcon, CheckIcon, SearchIcon, XIcon};
pub use reading_list::ReadingListView;
pub use snackbar::SnackbarHost;
pub use text_input::{TextInput, TextInputSize};
