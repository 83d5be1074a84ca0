//! Search page - wires the AppService to the pure views

use crate::app_service::use_app;
use crate::demo_data;
use dioxus::prelude::*;
use tome_ui::stores::AppStateStoreExt;
use tome_ui::{BookSearchView, ReadingListView, SnackbarHost};

#[component]
pub fn Search() -> Element {
    let app = use_app();
    let state = app.state;

    rsx! {
        div { class: "min-h-screen bg-gray-950 text-gray-100",
            header { class: "border-b border-gray-800",
                div { class: "container mx-auto px-4 py-4",
                    h1 { class: "text-2xl font-bold", "tome" }
                    p { class: "text-sm text-gray-500", "Find your next book." }
                }
            }
            main { class: "container mx-auto px-4 py-8 flex flex-col lg:flex-row gap-8",
                section { class: "flex-1 min-w-0",
                    BookSearchView {
                        state: state.books(),
                        reading_list: state.reading_list(),
                        on_search: move |term| app.search_books(term),
                        on_add_to_reading_list: move |book| app.add_to_reading_list(book),
                    }
                }
                aside { class: "w-full lg:w-96 flex-shrink-0",
                    ReadingListView {
                        state: state.reading_list(),
                        books_by_id: demo_data::books_by_id(),
                        on_finish: move |book_id: String| app.finish_reading(&book_id),
                        on_remove: move |book_id: String| app.remove_from_reading_list(&book_id),
                    }
                }
            }
            SnackbarHost {
                state: state.snackbars(),
                on_action: move |id| app.snackbar_action(id),
                on_dismiss: move |id| app.dismiss_snackbar(id),
            }
        }
    }
}
