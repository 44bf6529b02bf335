//! UI Components for the LexiCare application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Title bar
//! - [`EmptyState`] / [`UnsavedBanner`] - Shell placeholders and banners
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - PDF selection with drag & drop and the analyze call
//! - [`ResultsSection`] - Analysis results list
//! - [`ResultCard`] - One analyzed report with its feedback form
//! - [`ComparisonPanel`] - Comparison summary and worsened-report alert

mod header;
mod placeholders;
mod upload;
mod results;
mod result_card;
mod comparison;
mod footer;

pub use header::*;
pub use placeholders::*;
pub use upload::*;
pub use results::*;
pub use result_card::*;
pub use comparison::*;
pub use footer::*;
