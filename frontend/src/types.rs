//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Backend request/response structures
//! - **Presentation Types** - Status, severity and trend derived from a row
//! - **Row Keys** - Stable identity for per-row UI state
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// API Types
// =============================================================================

/// One analyzed report as returned by `POST /analyze/`.
///
/// Every field is optional on the wire: the backend sends `null` for
/// reports it could not persist.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Server identifier, present only for persisted reports
    pub report_id: Option<String>,
    /// Whether the backend stored the report
    pub salvato: bool,
    /// Optional marker, e.g. "duplicate"
    pub status: Option<String>,
    /// Informational message from the backend
    pub messaggio: Option<String>,
    pub tipo_referto: Option<String>,
    pub data_referto: Option<String>,
    pub codice_fiscale: Option<String>,
    pub nome_paziente: Option<String>,
    pub diagnosi_ai: Option<String>,
    pub classificazione_ai: Option<String>,
    /// Verdict of the comparison with prior reports
    pub situazione: Option<String>,
    /// Rationale of the comparison verdict
    pub spiegazione: Option<String>,
}

impl AnalysisResult {
    /// Report identifier, treating an empty string as absent.
    pub fn report_id(&self) -> Option<&str> {
        non_empty(&self.report_id)
    }

    /// Fiscal code, treating an empty string as absent.
    pub fn codice_fiscale(&self) -> Option<&str> {
        non_empty(&self.codice_fiscale)
    }

    pub fn situazione(&self) -> Option<&str> {
        non_empty(&self.situazione)
    }

    pub fn spiegazione(&self) -> Option<&str> {
        non_empty(&self.spiegazione)
    }

    /// Feedback can only reference a persisted report.
    pub fn accepts_feedback(&self) -> bool {
        self.salvato && self.report_id().is_some()
    }

    /// Label used for the patient in summaries: name, then fiscal code.
    pub fn patient_label(&self) -> String {
        non_empty(&self.nome_paziente)
            .or_else(|| self.codice_fiscale())
            .unwrap_or("Paziente sconosciuto")
            .to_string()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Response body of `POST /analyze/`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Analyzed reports, in server order
    pub risultati: Vec<AnalysisResult>,
}

/// Request body of `POST /feedback/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub report_id: String,
    pub diagnosi_corretta: String,
    pub classificazione_corretta: String,
    pub commento: String,
}

// =============================================================================
// Presentation Types
// =============================================================================

/// Persistence status of a result row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportStatus {
    Saved,
    Duplicate,
    MissingFiscalCode,
    NotSaved,
}

impl ReportStatus {
    /// Derive the status of a row; the first matching rule wins.
    pub fn of(result: &AnalysisResult) -> Self {
        if result.salvato {
            ReportStatus::Saved
        } else if result.status.as_deref() == Some("duplicate") {
            ReportStatus::Duplicate
        } else if result.codice_fiscale().is_none() {
            ReportStatus::MissingFiscalCode
        } else {
            ReportStatus::NotSaved
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Saved => "✓ REFERTO SALVATO",
            ReportStatus::Duplicate => "⧉ REFERTO GIÀ PRESENTE",
            ReportStatus::MissingFiscalCode => "⚠ NON SALVATO (CODICE FISCALE MANCANTE)",
            ReportStatus::NotSaved => "⚠ NON SALVATO",
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ReportStatus::Saved => "status-saved",
            ReportStatus::Duplicate => "status-duplicate",
            ReportStatus::MissingFiscalCode => "status-missing-cf",
            ReportStatus::NotSaved => "status-not-saved",
        }
    }
}

/// AI severity tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Lieve,
    Moderato,
    Grave,
    Unknown,
}

impl Severity {
    /// Tiers a clinician may pick when correcting a classification.
    pub const TIERS: [Severity; 3] = [Severity::Lieve, Severity::Moderato, Severity::Grave];

    /// Case-insensitive parse; anything outside the three tiers is `Unknown`.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::to_lowercase).as_deref() {
            Some("lieve") => Severity::Lieve,
            Some("moderato") => Severity::Moderato,
            Some("grave") => Severity::Grave,
            _ => Severity::Unknown,
        }
    }

    /// Wire value, as sent back in `classificazione_corretta`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Lieve => "lieve",
            Severity::Moderato => "moderato",
            Severity::Grave => "grave",
            Severity::Unknown => "non disponibile",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Severity::Lieve => "Lieve",
            Severity::Moderato => "Moderato",
            Severity::Grave => "Grave",
            Severity::Unknown => "Non disponibile",
        }
    }

    /// Badge color class: low, medium, high or neutral.
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Lieve => "severity-low",
            Severity::Moderato => "severity-medium",
            Severity::Grave => "severity-high",
            Severity::Unknown => "severity-unknown",
        }
    }

    /// Fixed explanatory text for each tier.
    pub fn rationale(&self) -> &'static str {
        match self {
            Severity::Lieve => "Reperto di scarsa rilevanza clinica, non richiede interventi urgenti.",
            Severity::Moderato => "Reperto da monitorare, indicato un controllo o approfondimento a breve.",
            Severity::Grave => "Reperto clinicamente rilevante, richiede attenzione medica prioritaria.",
            Severity::Unknown => "Classificazione non disponibile per questo referto.",
        }
    }
}

/// Outcome of comparing a report with the patient's prior reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trend {
    Improved,
    Worsened,
    Unchanged,
    /// Any unrecognized verdict, kept verbatim for display
    Other(String),
}

impl Trend {
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "migliorata" => Trend::Improved,
            "peggiorata" => Trend::Worsened,
            "invariata" => Trend::Unchanged,
            _ => Trend::Other(value.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Trend::Improved => "Migliorata",
            Trend::Worsened => "Peggiorata",
            Trend::Unchanged => "Invariata",
            Trend::Other(raw) => raw,
        }
    }

    /// Icon for recognized verdicts only.
    pub fn icon(&self) -> Option<&'static str> {
        match self {
            Trend::Improved => Some("📈"),
            Trend::Worsened => Some("📉"),
            Trend::Unchanged => Some("➖"),
            Trend::Other(_) => None,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Trend::Improved => "trend-improved",
            Trend::Worsened => "trend-worsened",
            Trend::Unchanged => "trend-unchanged",
            Trend::Other(_) => "trend-other",
        }
    }

    /// Left border of a comparison entry: green, red or neutral.
    pub fn border_class(&self) -> &'static str {
        match self {
            Trend::Improved => "border-green",
            Trend::Worsened => "border-red",
            Trend::Unchanged | Trend::Other(_) => "border-neutral",
        }
    }
}

/// Projection of a row that carries a real comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonSummary {
    pub row: RowKey,
    pub patient: String,
    pub tipo_referto: Option<String>,
    pub data_referto: Option<String>,
    pub situazione: String,
    pub spiegazione: String,
}

impl ComparisonSummary {
    pub fn trend(&self) -> Trend {
        Trend::parse(&self.situazione)
    }

    /// Link target of the card this entry summarizes.
    pub fn card_anchor(&self) -> String {
        format!("#{}", self.row.card_id())
    }
}

// =============================================================================
// Row Keys
// =============================================================================

/// Stable identity of a displayed row.
///
/// Persisted rows are keyed by `report_id`; unsaved rows fall back to
/// their position (they never show the feedback form).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKey {
    Report(String),
    Position(usize),
}

impl RowKey {
    pub fn for_row(index: usize, result: &AnalysisResult) -> Self {
        match result.report_id() {
            Some(id) => RowKey::Report(id.to_string()),
            None => RowKey::Position(index),
        }
    }

    /// DOM-safe suffix for element ids.
    pub fn dom_id(&self) -> String {
        match self {
            RowKey::Report(id) => format!("r-{}", id),
            RowKey::Position(idx) => format!("p-{}", idx),
        }
    }

    /// Element id of the result card for this row.
    pub fn card_id(&self) -> String {
        format!("card-{}", self.dom_id())
    }
}

/// Keys of every row of a result list, in list order.
pub fn row_keys(results: &[AnalysisResult]) -> Vec<RowKey> {
    results
        .iter()
        .enumerate()
        .map(|(idx, r)| RowKey::for_row(idx, r))
        .collect()
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations. Components collapse
/// every variant into one generic user message and log the detail.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AppError {
    /// Client-side validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request could not be built.
    #[error("Request error: {0}")]
    Request(String),

    /// Transport failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
