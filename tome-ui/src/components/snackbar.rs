//! Snackbar notifications with an optional action button
//!
//! Renders the snackbar stack from `SnackbarState`. Lifetimes (auto-dismiss
//! timers) are owned by whoever pushes snackbars; this component only
//! reports action and dismiss clicks by id.

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;
use crate::stores::ui::{SnackbarState, SnackbarStateStoreExt};
use dioxus::prelude::*;

/// Fixed-position stack of open snackbars.
#[component]
pub fn SnackbarHost(
    state: ReadStore<SnackbarState>,
    on_action: EventHandler<u64>,
    on_dismiss: EventHandler<u64>,
) -> Element {
    let snackbars = state.snackbars().read().clone();

    rsx! {
        div { class: "fixed bottom-4 right-4 flex flex-col gap-2 z-50",
            for snackbar in snackbars {
                div {
                    key: "{snackbar.id}",
                    class: "bg-gray-800 text-gray-100 px-4 py-3 rounded-lg shadow-lg flex items-center gap-4 max-w-md",
                    role: "status",
                    span { class: "flex-1", "{snackbar.message}" }
                    if let Some(action) = snackbar.action.as_ref() {
                        ChromelessButton {
                            class: Some(
                                "text-indigo-400 hover:text-indigo-300 font-medium uppercase text-sm"
                                    .to_string(),
                            ),
                            onclick: {
                                let id = snackbar.id;
                                move |_| on_action.call(id)
                            },
                            "{action.label()}"
                        }
                    }
                    ChromelessButton {
                        class: Some("text-gray-400 hover:text-gray-200".to_string()),
                        aria_label: Some("Dismiss".to_string()),
                        onclick: {
                            let id = snackbar.id;
                            move |_| on_dismiss.call(id)
                        },
                        XIcon {}
                    }
                }
            }
        }
    }
}
