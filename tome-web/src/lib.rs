//! tome web demo
//!
//! A minimal web app that renders the book search and reading-list UI
//! against an embedded fixture catalog.

pub mod app_service;
pub mod demo_data;
pub mod pages;

use app_service::AppService;
use dioxus::prelude::*;
use pages::Search;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Search {},
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppService::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
