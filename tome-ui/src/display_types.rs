//! Display types for UI components
//!
//! Lightweight view models containing only the fields needed for display.
//! They enable props-based components that can work with either real or
//! demo data.

use tome_common::ReadingList;

/// Book display info
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub description: Option<String>,
    pub publisher: Option<String>,
    /// Publication date as reported by the catalog (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub published_date: Option<String>,
    pub cover_url: Option<String>,
}

impl Book {
    /// Authors joined for display ("A. Author, B. Author")
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

/// A book annotated with its reading-list status.
///
/// Always derived from the book collection and the reading list via
/// [`annotate_books`]; never stored, so the status cannot drift from the
/// list itself.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadingListBook {
    pub book: Book,
    pub in_reading_list: bool,
    pub finished: bool,
    pub finished_date: Option<String>,
}

/// Join books with the reading list.
///
/// Pure function of both collections; the single source of truth for
/// per-book reading-list status shown in the UI.
pub fn annotate_books(books: &[Book], list: &ReadingList) -> Vec<ReadingListBook> {
    books
        .iter()
        .map(|book| {
            let item = list.get(&book.id);
            ReadingListBook {
                book: book.clone(),
                in_reading_list: item.is_some(),
                finished: item.map(|i| i.finished).unwrap_or(false),
                finished_date: item.and_then(|i| i.finished_date.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Book {id}"),
            ..Default::default()
        }
    }

    #[test]
    fn test_annotate_books_marks_list_membership() {
        let books = vec![book("a"), book("b")];
        let mut list = ReadingList::new();
        list.add("b");

        let annotated = annotate_books(&books, &list);
        assert!(!annotated[0].in_reading_list);
        assert!(annotated[1].in_reading_list);
        assert!(!annotated[1].finished);
    }

    #[test]
    fn test_annotate_books_mirrors_finished_status() {
        let books = vec![book("a")];
        let mut list = ReadingList::new();
        list.add("a");
        list.mark_finished("a", "2024-02-10");

        let annotated = annotate_books(&books, &list);
        assert!(annotated[0].finished);
        assert_eq!(annotated[0].finished_date.as_deref(), Some("2024-02-10"));
    }

    #[test]
    fn test_annotate_books_ignores_list_entries_without_results() {
        let books = vec![book("a")];
        let mut list = ReadingList::new();
        list.add("z");

        let annotated = annotate_books(&books, &list);
        assert_eq!(annotated.len(), 1);
        assert!(!annotated[0].in_reading_list);
    }
}
