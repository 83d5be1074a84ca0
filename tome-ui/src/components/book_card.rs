//! Search result card for a single book

use crate::components::icons::{BookOpenIcon, CheckIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::{Book, ReadingListBook};
use crate::utils::format_date;
use dioxus::prelude::*;

/// One book in the search results grid.
///
/// Reading-list status arrives pre-joined in `ReadingListBook`; the card
/// never inspects the list itself.
#[component]
pub fn BookCard(book: ReadingListBook, on_add: EventHandler<Book>) -> Element {
    let published = format_date(book.book.published_date.as_deref());
    let author_line = book.book.author_line();

    rsx! {
        div { class: "flex gap-4 bg-gray-900 rounded-lg p-4",
            div { class: "flex-shrink-0 w-20",
                if let Some(cover) = book.book.cover_url.as_deref() {
                    img {
                        class: "w-20 h-28 object-cover rounded",
                        src: cover,
                        alt: "Cover of {book.book.title}",
                    }
                } else {
                    div { class: "w-20 h-28 rounded bg-gray-800 flex items-center justify-center text-gray-600",
                        BookOpenIcon { class: "w-8 h-8" }
                    }
                }
            }
            div { class: "flex-1 min-w-0",
                h3 { class: "font-semibold text-gray-100 truncate", "{book.book.title}" }
                if !author_line.is_empty() {
                    p { class: "text-sm text-gray-400 truncate", "{author_line}" }
                }
                p { class: "text-xs text-gray-500 mt-1",
                    if let Some(publisher) = book.book.publisher.as_deref() {
                        "{publisher}"
                    }
                    if book.book.publisher.is_some() && published.is_some() {
                        " · "
                    }
                    if let Some(date) = published.as_deref() {
                        "{date}"
                    }
                }
                if let Some(description) = book.book.description.as_deref() {
                    p { class: "text-sm text-gray-400 mt-2 line-clamp-2", "{description}" }
                }
                div { class: "mt-3",
                    if book.finished {
                        span { class: "inline-flex items-center gap-1.5 text-sm text-green-400",
                            CheckIcon {}
                            "Finished"
                        }
                    } else if book.in_reading_list {
                        Button {
                            variant: ButtonVariant::Secondary,
                            size: ButtonSize::Small,
                            disabled: true,
                            onclick: |_| {},
                            "On your list"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Small,
                            onclick: {
                                let book = book.book.clone();
                                move |_| on_add.call(book.clone())
                            },
                            "Want to Read"
                        }
                    }
                }
            }
        }
    }
}
