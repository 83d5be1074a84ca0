//! tome-ui - Shared UI types and components for tome
//!
//! Contains display types, stores, and pure view components for the book
//! search and reading-list UI. Components render from props and callbacks
//! only; all data loading happens in the shell that wires them up.

pub mod components;
pub mod debounce;
pub mod display_types;
pub mod stores;
pub mod utils;

pub use components::*;
pub use display_types::*;
