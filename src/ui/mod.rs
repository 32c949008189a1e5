//! UI components for tapdeck
//!
//! Dioxus views. They read the platform state from context and change it
//! only through store actions.

pub mod analysis;
pub mod components;
pub mod editor;
pub mod layout;
pub mod sidebar;

pub use layout::Layout;
