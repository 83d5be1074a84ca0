//! Book search state store

use crate::display_types::Book;
use dioxus::prelude::*;

/// What a submitted search term should dispatch.
///
/// The form always hands over the raw term; this mapping decides whether
/// that means running a search or resetting the results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchIntent {
    /// Run a search with the given term
    Search(String),
    /// Empty term - reset results instead of searching
    Clear,
}

impl SearchIntent {
    pub fn from_term(term: &str) -> Self {
        if term.is_empty() {
            SearchIntent::Clear
        } else {
            SearchIntent::Search(term.to_string())
        }
    }
}

/// State for the book search view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BooksState {
    /// Search results for the current term
    pub books: Vec<Book>,
    /// The most recently dispatched search term (empty after a clear)
    pub term: String,
    /// Whether a search is in flight
    pub loading: bool,
    /// Error message if the search failed
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_maps_to_clear() {
        assert_eq!(SearchIntent::from_term(""), SearchIntent::Clear);
    }

    #[test]
    fn test_non_empty_term_maps_to_search() {
        assert_eq!(
            SearchIntent::from_term("javascript"),
            SearchIntent::Search("javascript".to_string())
        );
    }

    #[test]
    fn test_whitespace_term_is_still_a_search() {
        // Matches form semantics: only the truly empty string clears.
        assert_eq!(
            SearchIntent::from_term(" "),
            SearchIntent::Search(" ".to_string())
        );
    }
}
