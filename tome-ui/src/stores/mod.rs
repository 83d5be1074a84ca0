//! Store types for UI state management
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.
//! Shells own a `Store<AppState>` and pass lenses into view components.

pub mod app;
pub mod books;
pub mod reading_list;
pub mod ui;

pub use app::*;
pub use books::*;
pub use reading_list::*;
pub use ui::*;
