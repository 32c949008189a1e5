//! tapdeck library
//!
//! Desktop front end for the Text Analysis Platform backend.

pub mod api;
pub mod app;
pub mod format;
pub mod storage;
pub mod store;
pub mod types;
pub mod ui;
pub mod validation;
