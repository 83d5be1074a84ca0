//! Small shared helper components

use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    #[props(default = "Loading...".to_string())] message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-10",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-indigo-400" }
            p { class: "ml-4 text-gray-400", "{message}" }
        }
    }
}

/// Generic error display box
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div { class: "bg-red-900/60 border border-red-700 text-red-100 px-4 py-3 rounded-lg mb-4",
            p { "{message}" }
        }
    }
}
