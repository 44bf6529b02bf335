//! Analyze orchestration for the upload form.

use super::FileSelection;
use crate::config::{MSG_ANALYZE_FAILED, MSG_FILE_COUNT};
use crate::services::ReportBackend;
use crate::{AnalysisResult, AppError, AppResult};

/// Validate the selection, then send it for analysis.
///
/// An out-of-range count fails before the backend is contacted. On
/// success the server's `risultati` are returned as-is, ready to replace
/// the displayed list wholesale.
pub async fn analyze_selection<B: ReportBackend>(
    backend: &B,
    selection: &FileSelection<B::File>,
) -> AppResult<Vec<AnalysisResult>> {
    selection.validate()?;

    log::info!("🔬 Analyzing {} report(s): {:?}", selection.len(), selection.names());
    let response = backend.analyze(selection.files()).await?;
    log::info!("✅ Analysis complete: {} result(s)", response.risultati.len());

    Ok(response.risultati)
}

/// Apply an analyze outcome to the displayed list.
///
/// Success replaces `results` wholesale. Any failure leaves them as they
/// were and returns the alert to show: the count message for a rejected
/// selection, one generic message for everything else.
pub fn settle(
    outcome: AppResult<Vec<AnalysisResult>>,
    results: &mut Vec<AnalysisResult>,
) -> Option<&'static str> {
    match outcome {
        Ok(risultati) => {
            *results = risultati;
            None
        }
        Err(AppError::Validation(_)) => Some(MSG_FILE_COUNT),
        Err(e) => {
            log::error!("❌ Analysis failed: {}", e);
            Some(MSG_ANALYZE_FAILED)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use futures::executor::block_on;

    use super::*;
    use crate::state::selection::tests::{selection_of, FakeFile};
    use crate::{AnalyzeResponse, FeedbackRequest};

    /// In-memory backend returning queued analyze outcomes.
    struct FakeBackend {
        calls: Cell<usize>,
        replies: RefCell<Vec<AppResult<AnalyzeResponse>>>,
    }

    impl FakeBackend {
        fn replying(replies: Vec<AppResult<AnalyzeResponse>>) -> Self {
            Self {
                calls: Cell::new(0),
                replies: RefCell::new(replies),
            }
        }
    }

    impl ReportBackend for FakeBackend {
        type File = FakeFile;

        async fn analyze(&self, _files: &[FakeFile]) -> AppResult<AnalyzeResponse> {
            self.calls.set(self.calls.get() + 1);
            self.replies.borrow_mut().remove(0)
        }

        async fn submit_feedback(&self, _request: &FeedbackRequest) -> AppResult<()> {
            Ok(())
        }
    }

    fn result(id: &str) -> AnalysisResult {
        AnalysisResult {
            report_id: Some(id.to_string()),
            salvato: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_out_of_range_selection_never_reaches_backend() {
        let backend = FakeBackend::replying(vec![]);

        for count in [0, 6, 9] {
            let outcome = block_on(analyze_selection(&backend, &selection_of(count)));
            assert!(matches!(outcome, Err(AppError::Validation(_))));
        }
        assert_eq!(backend.calls.get(), 0);
    }

    #[test]
    fn test_results_keep_server_order() {
        let risultati = vec![result("r3"), result("r1"), AnalysisResult::default(), result("r2")];
        let backend = FakeBackend::replying(vec![Ok(AnalyzeResponse {
            risultati: risultati.clone(),
        })]);

        let outcome = block_on(analyze_selection(&backend, &selection_of(4))).unwrap();
        assert_eq!(outcome, risultati);
        assert_eq!(backend.calls.get(), 1);
    }

    #[test]
    fn test_repeated_calls_replace_instead_of_merge() {
        let backend = FakeBackend::replying(vec![
            Ok(AnalyzeResponse { risultati: vec![result("r1")] }),
            Ok(AnalyzeResponse { risultati: vec![result("r2")] }),
        ]);
        let selection = selection_of(1);

        let first = block_on(analyze_selection(&backend, &selection)).unwrap();
        assert_eq!(first, vec![result("r1")]);

        let second = block_on(analyze_selection(&backend, &selection)).unwrap();
        assert_eq!(second, vec![result("r2")]);
    }

    #[test]
    fn test_rejected_analysis_keeps_previous_results() {
        let backend = FakeBackend::replying(vec![
            Err(AppError::Network("connection refused".into())),
            Err(AppError::Server { status: 500, body: "boom".into() }),
        ]);
        let selection = selection_of(1);

        // First attempt: nothing displayed yet
        let mut displayed = Vec::new();
        let outcome = block_on(analyze_selection(&backend, &selection));
        assert_eq!(settle(outcome, &mut displayed), Some(MSG_ANALYZE_FAILED));
        assert!(displayed.is_empty());

        let mut displayed = vec![result("r1")];
        let outcome = block_on(analyze_selection(&backend, &selection));
        assert_eq!(settle(outcome, &mut displayed), Some(MSG_ANALYZE_FAILED));
        assert_eq!(displayed, vec![result("r1")]);
    }

    #[test]
    fn test_six_files_alert_without_request() {
        let backend = FakeBackend::replying(vec![]);
        let mut displayed = vec![result("r1")];

        let outcome = block_on(analyze_selection(&backend, &selection_of(6)));

        assert_eq!(settle(outcome, &mut displayed), Some(MSG_FILE_COUNT));
        assert_eq!(backend.calls.get(), 0);
        assert_eq!(displayed, vec![result("r1")]);
    }

    #[test]
    fn test_successful_analysis_replaces_results() {
        let backend = FakeBackend::replying(vec![Ok(AnalyzeResponse {
            risultati: vec![result("r2"), result("r3")],
        })]);
        let mut displayed = vec![result("r1")];

        let outcome = block_on(analyze_selection(&backend, &selection_of(2)));

        assert_eq!(settle(outcome, &mut displayed), None);
        assert_eq!(displayed, vec![result("r2"), result("r3")]);
    }

    #[test]
    fn test_backend_failure_is_propagated() {
        let backend = FakeBackend::replying(vec![Err(AppError::Network("connection refused".into()))]);

        let outcome = block_on(analyze_selection(&backend, &selection_of(1)));
        assert_eq!(outcome, Err(AppError::Network("connection refused".into())));
    }
}
