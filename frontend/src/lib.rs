//! LexiCare - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading PDF medical reports, reviewing
//! the AI analysis returned by the backend and sending clinician
//! corrections.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header                                                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (owns the result list)                          │
//! │  ├── UploadSection (selection, analyze call)                │
//! │  ├── UnsavedBanner (when some report was not saved)         │
//! │  ├── ResultsSection                                          │
//! │  │   ├── ComparisonPanel (derived from the result list)     │
//! │  │   └── ResultCard × N (feedback form when saved)          │
//! │  └── EmptyState (when no results)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire types, presentation enums and errors
//! - [`state`] - Framework-free UI state (selection, feedback, comparison)
//! - [`components`] - UI components
//! - [`services`] - Backend communication and alerts

use leptos::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    AnalysisResult, AnalyzeResponse, FeedbackRequest,
    // Presentation
    ComparisonSummary, ReportStatus, Severity, Trend,
    // Rows
    row_keys, RowKey,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Session-wide result list, replaced on every successful analysis
    let (results, set_results) = create_signal(Vec::<AnalysisResult>::new());

    view! {
        <Header/>

        <div class="container">
            <UploadSection set_results=set_results/>

            <Show
                when=move || results.with(|r| state::any_unsaved(r))
                fallback=|| view! { }
            >
                <UnsavedBanner/>
            </Show>

            <ResultsSection results=results/>

            <Show
                when=move || results.with(Vec::is_empty)
                fallback=|| view! { }
            >
                <EmptyState/>
            </Show>
        </div>

        <Footer/>
    }
}
