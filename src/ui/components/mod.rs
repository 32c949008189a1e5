//! Shared UI building blocks

pub mod error_banner;
pub mod loading;
pub mod metric_card;

pub use error_banner::ErrorBanner;
pub use loading::Spinner;
pub use metric_card::{MetricCard, MetricTone};
