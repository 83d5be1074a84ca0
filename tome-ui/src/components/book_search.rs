//! Book search view - pure rendering plus form/debounce wiring
//!
//! ## Reactive State Pattern
//! Accepts `ReadStore<BooksState>` and `ReadStore<ReadingListState>` and
//! uses lenses for granular reactivity. Results are joined with the reading
//! list through `annotate_books` at render time; per-book status is never
//! stored on the books themselves.
//!
//! Typing dispatches `on_search` through a 500 ms debounce; submitting the
//! form dispatches immediately and cancels any pending debounced dispatch.
//! The caller decides what an empty term means (see `SearchIntent`).

use crate::components::book_card::BookCard;
use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::{BookOpenIcon, SearchIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, TextInput, TextInputSize};
use crate::debounce::use_debounce;
use crate::display_types::{annotate_books, Book};
use crate::stores::books::{BooksState, BooksStateStoreExt};
use crate::stores::reading_list::{ReadingListState, ReadingListStateStoreExt};
use dioxus::prelude::*;

/// Search form plus results grid.
#[component]
pub fn BookSearchView(
    state: ReadStore<BooksState>,
    reading_list: ReadStore<ReadingListState>,
    // Called with the raw term, immediately on submit and debounced while typing
    on_search: EventHandler<String>,
    on_add_to_reading_list: EventHandler<Book>,
) -> Element {
    let mut term = use_signal(String::new);
    let debounce = use_debounce(on_search);

    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let books = state.books().read().clone();
    let committed_term = state.term().read().clone();
    let annotated = annotate_books(&books, &reading_list.list().read());

    rsx! {
        div { class: "flex flex-col",
            form {
                class: "flex gap-2",
                onsubmit: move |e| {
                    e.prevent_default();
                    debounce.cancel();
                    on_search.call(term());
                },
                div { class: "flex-1",
                    TextInput {
                        value: term(),
                        size: TextInputSize::Medium,
                        placeholder: "Search for books to add to your reading list",
                        aria_label: Some("Search books".to_string()),
                        on_input: move |value: String| {
                            term.set(value.clone());
                            debounce.update(value);
                        },
                    }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    onclick: |_| {},
                    SearchIcon {}
                    "Search"
                }
            }
            p { class: "text-sm text-gray-500 mt-2",
                "Try searching for a topic, for example "
                Button {
                    variant: ButtonVariant::Ghost,
                    size: ButtonSize::Small,
                    class: Some("px-0 py-0".to_string()),
                    onclick: move |_| {
                        term.set("javascript".to_string());
                        debounce.cancel();
                        on_search.call("javascript".to_string());
                    },
                    "\"javascript\""
                }
            }
            div { class: "mt-6",
                if loading {
                    LoadingSpinner { message: "Searching books...".to_string() }
                } else if let Some(err) = error {
                    ErrorDisplay { message: err }
                } else if annotated.is_empty() && !committed_term.is_empty() {
                    p { class: "text-gray-500 py-8 text-center",
                        "No books found for \"{committed_term}\"."
                    }
                } else if annotated.is_empty() {
                    div { class: "text-center py-12 text-gray-500",
                        BookOpenIcon { class: "w-12 h-12 mx-auto mb-3" }
                        p { "Search above to discover your next book." }
                    }
                } else {
                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                        for book in annotated {
                            BookCard {
                                key: "{book.book.id}",
                                book,
                                on_add: on_add_to_reading_list,
                            }
                        }
                    }
                }
            }
        }
    }
}
