//! Reading list sidebar - pure rendering, no data fetching

use crate::components::helpers::{ErrorDisplay, LoadingSpinner};
use crate::components::icons::{BookOpenIcon, CheckIcon, XIcon};
use crate::components::ChromelessButton;
use crate::display_types::Book;
use crate::stores::reading_list::{ReadingListState, ReadingListStateStoreExt};
use crate::utils::format_date;
use dioxus::prelude::*;
use std::collections::HashMap;

/// The user's reading list with per-item finish and remove actions.
///
/// Entries reference books by id; `books_by_id` supplies the metadata to
/// render them.
#[component]
pub fn ReadingListView(
    state: ReadStore<ReadingListState>,
    books_by_id: HashMap<String, Book>,
    on_finish: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let loading = *state.loading().read();
    let error = state.error().read().clone();
    let items = state.list().read().items().to_vec();

    rsx! {
        div { class: "bg-gray-900 rounded-lg p-4",
            h2 { class: "text-lg font-semibold text-gray-100 mb-3",
                "My Reading List"
                span { class: "ml-2 text-sm font-normal text-gray-500", "({items.len()})" }
            }
            if loading {
                LoadingSpinner { message: "Loading your list...".to_string() }
            } else if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if items.is_empty() {
                div { class: "text-center py-8 text-gray-500",
                    BookOpenIcon { class: "w-10 h-10 mx-auto mb-2" }
                    p { class: "text-sm", "Nothing here yet. Search for a book to add it." }
                }
            } else {
                ul { class: "flex flex-col gap-3",
                    for item in items {
                        ReadingListRow {
                            key: "{item.book_id}",
                            book_id: item.book_id.clone(),
                            title: books_by_id
                                .get(&item.book_id)
                                .map(|b| b.title.clone())
                                .unwrap_or_else(|| "Unknown book".to_string()),
                            author_line: books_by_id
                                .get(&item.book_id)
                                .map(|b| b.author_line())
                                .unwrap_or_default(),
                            finished: item.finished,
                            finished_date: item.finished_date.clone(),
                            on_finish,
                            on_remove,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ReadingListRow(
    book_id: String,
    title: String,
    author_line: String,
    finished: bool,
    finished_date: Option<String>,
    on_finish: EventHandler<String>,
    on_remove: EventHandler<String>,
) -> Element {
    let finished_line = format_date(finished_date.as_deref());

    rsx! {
        li { class: "flex items-start gap-2",
            div { class: "flex-1 min-w-0",
                p { class: "text-sm text-gray-200 truncate", "{title}" }
                if !author_line.is_empty() {
                    p { class: "text-xs text-gray-500 truncate", "{author_line}" }
                }
                if finished {
                    p { class: "text-xs text-green-400 mt-0.5",
                        if let Some(date) = finished_line.as_deref() {
                            "Finished {date}"
                        } else {
                            "Finished"
                        }
                    }
                }
            }
            if !finished {
                ChromelessButton {
                    class: Some("text-gray-500 hover:text-green-400".to_string()),
                    title: Some("Mark as finished".to_string()),
                    aria_label: Some(format!("Mark {title} as finished")),
                    onclick: {
                        let book_id = book_id.clone();
                        move |_| on_finish.call(book_id.clone())
                    },
                    CheckIcon {}
                }
            }
            ChromelessButton {
                class: Some("text-gray-500 hover:text-red-400".to_string()),
                title: Some("Remove from list".to_string()),
                aria_label: Some(format!("Remove {title} from your reading list")),
                onclick: move |_| on_remove.call(book_id.clone()),
                XIcon {}
            }
        }
    }
}
