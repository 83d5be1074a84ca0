//! Demo book catalog
//!
//! Stands in for the external search API: static fixture data compiled into
//! the binary, searched with a case-insensitive substring match over title
//! and authors.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use tome_ui::Book;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/books.json");

#[derive(Debug, Deserialize)]
struct FixtureData {
    books: Vec<FixtureBook>,
}

#[derive(Debug, Deserialize)]
struct FixtureBook {
    title: String,
    authors: Vec<String>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    published_date: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

/// Parsed demo catalog, lazily initialized
struct Catalog {
    books: Vec<Book>,
    books_by_id: HashMap<String, Book>,
}

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Generate a stable ID from a string (for consistent IDs across runs)
fn stable_id(s: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(|| {
        let fixture: FixtureData =
            serde_json::from_str(FIXTURE_JSON).expect("Failed to parse fixture JSON");

        let books: Vec<Book> = fixture
            .books
            .into_iter()
            .map(|b| Book {
                id: stable_id(&format!("book:{}:{}", b.authors.join("/"), b.title)),
                title: b.title,
                authors: b.authors,
                description: b.description,
                publisher: b.publisher,
                published_date: b.published_date,
                cover_url: None,
            })
            .collect();

        let books_by_id = books.iter().map(|b| (b.id.clone(), b.clone())).collect();

        Catalog { books, books_by_id }
    })
}

/// Search the catalog. Case-insensitive substring match on title and authors.
pub fn search_books(term: &str) -> Vec<Book> {
    let needle = term.to_lowercase();
    catalog()
        .books
        .iter()
        .filter(|b| {
            b.title.to_lowercase().contains(&needle)
                || b.authors.iter().any(|a| a.to_lowercase().contains(&needle))
                || b.description
                    .as_deref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Full catalog keyed by book id (for rendering reading-list entries).
pub fn books_by_id() -> HashMap<String, Book> {
    catalog().books_by_id.clone()
}

/// Look up a single book.
pub fn book_by_id(id: &str) -> Option<Book> {
    catalog().books_by_id.get(id).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let results = search_books("JAVASCRIPT");
        assert!(!results.is_empty());
        assert!(results
            .iter()
            .any(|b| b.title == "JavaScript: The Good Parts"));
    }

    #[test]
    fn test_search_matches_author() {
        let results = search_books("kleppmann");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Designing Data-Intensive Applications");
    }

    #[test]
    fn test_search_no_results() {
        assert!(search_books("xyzzy").is_empty());
    }

    #[test]
    fn test_ids_are_stable_and_unique() {
        let ids: Vec<String> = search_books("").iter().map(|b| b.id.clone()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(ids.len(), deduped.len());

        let again: Vec<String> = search_books("").iter().map(|b| b.id.clone()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_book_by_id_round_trip() {
        let book = &search_books("rust programming language")[0];
        assert_eq!(book_by_id(&book.id).as_ref(), Some(book));
    }
}
