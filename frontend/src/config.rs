//! Application configuration.
//!
//! Centralized configuration for the LexiCare frontend.
//! The backend base URL is resolved at build time: `LEXICARE_API_BASE`
//! overrides it, otherwise debug builds talk to the local development
//! server and release builds use a relative path behind the same origin.

/// Backend API base URL.
pub const API_BASE_URL: &str = match option_env!("LEXICARE_API_BASE") {
    Some(url) => url,
    None => DEFAULT_API_BASE_URL,
};

#[cfg(debug_assertions)]
const DEFAULT_API_BASE_URL: &str = "http://localhost:8006/api";

#[cfg(not(debug_assertions))]
const DEFAULT_API_BASE_URL: &str = "/api";

/// Minimum number of reports per analysis request.
pub const MIN_FILES: usize = 1;

/// Maximum number of reports per analysis request.
pub const MAX_FILES: usize = 5;

/// The only MIME type accepted by the drop zone.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Multipart field name for every uploaded report.
pub const UPLOAD_FIELD_NAME: &str = "files";

// =============================================================================
// User-facing messages
// =============================================================================

/// Shown when the selection holds fewer than 1 or more than 5 files.
pub const MSG_FILE_COUNT: &str = "Seleziona da 1 a 5 file PDF.";

/// Shown when the analyze call fails for any reason.
pub const MSG_ANALYZE_FAILED: &str = "Errore durante l'analisi dei referti.";

/// Shown after a feedback has been accepted by the backend.
pub const MSG_FEEDBACK_SENT: &str = "Feedback inviato correttamente. Grazie per il contributo!";

/// Shown when the feedback call fails for any reason.
pub const MSG_FEEDBACK_FAILED: &str = "Errore nell'invio del feedback. Riprova più tardi.";

/// Urgency text repeated by the worsened-comparison banners.
pub const MSG_WORSENED_ALERT: &str =
    "Uno o più referti mostrano un peggioramento rispetto ai precedenti. Si consiglia una revisione clinica immediata.";
