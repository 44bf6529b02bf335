//! Framework-free UI state.
//!
//! Everything here is plain Rust so it can be exercised by native unit
//! tests; components wrap these types in signals.
//!
//! - [`selection`] - Picked/dropped PDFs and count validation
//! - [`upload`] - Analyze orchestration
//! - [`feedback`] - Per-row feedback drafts and submit state machine
//! - [`comparison`] - Comparison summary and derived alert flags
//! - [`rows`] - Expanded result cards

pub mod comparison;
pub mod feedback;
pub mod rows;
pub mod selection;
pub mod upload;

pub use comparison::*;
pub use feedback::*;
pub use rows::ExpandedRows;
pub use selection::{validate_file_count, DragPhase, FileSelection, PendingFile};
pub use upload::*;
