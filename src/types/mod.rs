//! Shared type definitions
//!
//! The data model the store and the views work with.

pub mod analysis;
pub mod config;
pub mod model;
pub mod prompt;
