/// A single entry on the reading list.
///
/// Holds only the book id plus read-status bookkeeping. Book metadata lives
/// with whoever owns the book collection; entries reference it by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadingListItem {
    pub book_id: String,
    pub finished: bool,
    /// ISO date (YYYY-MM-DD) the book was marked finished
    pub finished_date: Option<String>,
}

impl ReadingListItem {
    pub fn new(book_id: impl Into<String>) -> Self {
        Self {
            book_id: book_id.into(),
            finished: false,
            finished_date: None,
        }
    }
}

/// Pure data structure for the user's reading list.
///
/// Handles add/remove/finish bookkeeping without any I/O. `remove` returns
/// the removed item so callers can offer an undo that restores the finished
/// flag, and `restore` puts such a snapshot back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadingList {
    items: Vec<ReadingListItem>,
}

impl ReadingList {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a book to the end of the list. Returns false if the book is
    /// already on the list (adding is idempotent).
    pub fn add(&mut self, book_id: &str) -> bool {
        if self.contains(book_id) {
            return false;
        }
        self.items.push(ReadingListItem::new(book_id));
        true
    }

    /// Put a previously removed item back, status intact. Returns false if
    /// an entry for the same book already exists.
    pub fn restore(&mut self, item: ReadingListItem) -> bool {
        if self.contains(&item.book_id) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove a book from the list. Returns the removed item (the undo
    /// snapshot) if it was present.
    pub fn remove(&mut self, book_id: &str) -> Option<ReadingListItem> {
        let index = self.items.iter().position(|i| i.book_id == book_id)?;
        Some(self.items.remove(index))
    }

    /// Mark a book finished as of the given date. Returns false if the book
    /// is not on the list.
    pub fn mark_finished(&mut self, book_id: &str, date: impl Into<String>) -> bool {
        match self.items.iter_mut().find(|i| i.book_id == book_id) {
            Some(item) => {
                item.finished = true;
                item.finished_date = Some(date.into());
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, book_id: &str) -> bool {
        self.items.iter().any(|i| i.book_id == book_id)
    }

    pub fn get(&self, book_id: &str) -> Option<&ReadingListItem> {
        self.items.iter().find(|i| i.book_id == book_id)
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[ReadingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let mut list = ReadingList::new();
        assert!(list.add("a"));
        assert!(list.add("b"));
        assert_eq!(list.len(), 2);
        assert!(list.contains("a"));
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut list = ReadingList::new();
        assert!(list.add("a"));
        assert!(!list.add("a"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_returns_snapshot() {
        let mut list = ReadingList::new();
        list.add("a");
        let removed = list.remove("a").unwrap();
        assert_eq!(removed.book_id, "a");
        assert!(!removed.finished);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_missing() {
        let mut list = ReadingList::new();
        list.add("a");
        assert_eq!(list.remove("b"), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_mark_finished() {
        let mut list = ReadingList::new();
        list.add("a");
        assert!(list.mark_finished("a", "2024-06-01"));
        let item = list.get("a").unwrap();
        assert!(item.finished);
        assert_eq!(item.finished_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_mark_finished_missing() {
        let mut list = ReadingList::new();
        assert!(!list.mark_finished("a", "2024-06-01"));
    }

    #[test]
    fn test_undo_remove_restores_finished_flag() {
        let mut list = ReadingList::new();
        list.add("a");
        list.mark_finished("a", "2024-06-01");

        let snapshot = list.remove("a").unwrap();
        assert!(list.is_empty());

        assert!(list.restore(snapshot));
        let item = list.get("a").unwrap();
        assert!(item.finished);
        assert_eq!(item.finished_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_restore_existing_is_ignored() {
        let mut list = ReadingList::new();
        list.add("a");
        assert!(!list.restore(ReadingListItem::new("a")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_items_preserve_insertion_order() {
        let mut list = ReadingList::new();
        list.add("b");
        list.add("a");
        list.add("c");
        let ids: Vec<&str> = list.items().iter().map(|i| i.book_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
