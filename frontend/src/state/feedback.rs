//! Clinician feedback drafts and the per-row submit state machine.
//!
//! Each row is either idle or submitting. A row may enter `submitting`
//! only when it references a persisted report, its draft carries both a
//! diagnosis and a classification, and it is not already submitting.
//! Completion always returns the row to idle; success also drops the
//! draft, failure keeps it for a retry.

use std::collections::{HashMap, HashSet};

use crate::{AnalysisResult, FeedbackRequest, RowKey, Severity};

/// Editable field of a feedback draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Diagnosi,
    Classificazione,
    Commento,
}

/// Unsent correction for one row. Created on the first keystroke.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackDraft {
    pub diagnosi: Option<String>,
    pub classificazione: Option<Severity>,
    pub commento: Option<String>,
}

impl FeedbackDraft {
    fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Diagnosi => self.diagnosi = Some(value).filter(|v| !v.is_empty()),
            DraftField::Classificazione => {
                self.classificazione =
                    Some(Severity::parse(Some(value.as_str()))).filter(|s| *s != Severity::Unknown)
            }
            DraftField::Commento => self.commento = Some(value).filter(|v| !v.is_empty()),
        }
    }

    fn get(&self, field: DraftField) -> String {
        match field {
            DraftField::Diagnosi => self.diagnosi.clone().unwrap_or_default(),
            DraftField::Classificazione => self
                .classificazione
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            DraftField::Commento => self.commento.clone().unwrap_or_default(),
        }
    }

    /// Diagnosis and classification are both filled in.
    pub fn is_complete(&self) -> bool {
        self.diagnosi.is_some() && self.classificazione.is_some()
    }

    /// Wire payload; unset text fields become empty strings.
    pub fn to_request(&self, report_id: &str) -> FeedbackRequest {
        FeedbackRequest {
            report_id: report_id.to_string(),
            diagnosi_corretta: self.get(DraftField::Diagnosi),
            classificazione_corretta: self.get(DraftField::Classificazione),
            commento: self.get(DraftField::Commento),
        }
    }
}

/// Drafts and in-flight flags for every displayed row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackBook {
    drafts: HashMap<RowKey, FeedbackDraft>,
    submitting: HashSet<RowKey>,
}

impl FeedbackBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self, key: &RowKey) -> Option<&FeedbackDraft> {
        self.drafts.get(key)
    }

    /// Current input value, empty when the draft or field is unset.
    pub fn value(&self, key: &RowKey, field: DraftField) -> String {
        self.drafts.get(key).map(|d| d.get(field)).unwrap_or_default()
    }

    pub fn edit(&mut self, key: &RowKey, field: DraftField, value: String) {
        self.drafts.entry(key.clone()).or_default().set(field, value);
    }

    pub fn is_submitting(&self, key: &RowKey) -> bool {
        self.submitting.contains(key)
    }

    /// Whether the submit control of `row` is enabled.
    pub fn can_submit(&self, key: &RowKey, row: &AnalysisResult) -> bool {
        row.accepts_feedback()
            && !self.is_submitting(key)
            && self.drafts.get(key).is_some_and(FeedbackDraft::is_complete)
    }

    /// Enter `submitting` and return the payload, or `None` when the
    /// preconditions do not hold.
    pub fn begin_submit(&mut self, key: &RowKey, row: &AnalysisResult) -> Option<FeedbackRequest> {
        if !self.can_submit(key, row) {
            return None;
        }
        let report_id = row.report_id()?;
        let request = self.drafts.get(key)?.to_request(report_id);
        self.submitting.insert(key.clone());
        Some(request)
    }

    /// Return to idle. Success drops the draft entirely.
    pub fn finish_submit(&mut self, key: &RowKey, succeeded: bool) {
        self.submitting.remove(key);
        if succeeded {
            self.drafts.remove(key);
        }
    }

    /// Forget drafts of rows no longer displayed. In-flight flags are
    /// kept until their request completes.
    pub fn retain_rows(&mut self, keys: &[RowKey]) {
        self.drafts.retain(|key, _| keys.contains(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved_row(id: &str) -> AnalysisResult {
        AnalysisResult {
            report_id: Some(id.to_string()),
            salvato: true,
            codice_fiscale: Some("RSSMRA80A01H501U".to_string()),
            ..Default::default()
        }
    }

    fn filled_book(key: &RowKey) -> FeedbackBook {
        let mut book = FeedbackBook::new();
        book.edit(key, DraftField::Diagnosi, "Polmonite lobare".to_string());
        book.edit(key, DraftField::Classificazione, "grave".to_string());
        book
    }

    #[test]
    fn test_submit_requires_diagnosis_and_classification() {
        let row = saved_row("r1");
        let key = RowKey::for_row(0, &row);
        let mut book = FeedbackBook::new();
        assert!(!book.can_submit(&key, &row));

        book.edit(&key, DraftField::Diagnosi, "Polmonite".to_string());
        assert!(!book.can_submit(&key, &row));

        book.edit(&key, DraftField::Classificazione, "moderato".to_string());
        assert!(book.can_submit(&key, &row));

        book.edit(&key, DraftField::Diagnosi, String::new());
        assert!(!book.can_submit(&key, &row));
    }

    #[test]
    fn test_unsaved_row_never_submits() {
        let row = AnalysisResult::default();
        let key = RowKey::for_row(0, &row);
        let mut book = filled_book(&key);

        assert!(!book.can_submit(&key, &row));
        assert_eq!(book.begin_submit(&key, &row), None);
        assert!(!book.is_submitting(&key));
    }

    #[test]
    fn test_classification_outside_tiers_is_unset() {
        let key = RowKey::Position(0);
        let mut book = FeedbackBook::new();
        book.edit(&key, DraftField::Classificazione, "critico".to_string());
        assert_eq!(book.draft(&key).unwrap().classificazione, None);
        assert_eq!(book.value(&key, DraftField::Classificazione), "");
    }

    #[test]
    fn test_submitting_is_reentrancy_guarded() {
        let row = saved_row("r1");
        let key = RowKey::for_row(0, &row);
        let mut book = filled_book(&key);

        let request = book.begin_submit(&key, &row).unwrap();
        assert_eq!(request.report_id, "r1");
        assert_eq!(request.diagnosi_corretta, "Polmonite lobare");
        assert_eq!(request.classificazione_corretta, "grave");
        assert_eq!(request.commento, "");

        assert!(book.is_submitting(&key));
        assert!(!book.can_submit(&key, &row));
        assert_eq!(book.begin_submit(&key, &row), None);
    }

    #[test]
    fn test_success_clears_draft() {
        let row = saved_row("r1");
        let key = RowKey::for_row(0, &row);
        let mut book = filled_book(&key);
        book.begin_submit(&key, &row).unwrap();

        book.finish_submit(&key, true);

        assert!(!book.is_submitting(&key));
        assert_eq!(book.draft(&key), None);
        assert_eq!(book.value(&key, DraftField::Diagnosi), "");
        assert!(!book.can_submit(&key, &row));
    }

    #[test]
    fn test_failure_keeps_draft_for_retry() {
        let row = saved_row("r1");
        let key = RowKey::for_row(0, &row);
        let mut book = filled_book(&key);
        book.edit(&key, DraftField::Commento, "Rivedere TC".to_string());
        book.begin_submit(&key, &row).unwrap();

        book.finish_submit(&key, false);

        assert!(!book.is_submitting(&key));
        assert!(book.can_submit(&key, &row));
        assert_eq!(book.value(&key, DraftField::Commento), "Rivedere TC");
    }

    #[test]
    fn test_rows_submit_independently() {
        let first = saved_row("r1");
        let second = saved_row("r2");
        let k1 = RowKey::for_row(0, &first);
        let k2 = RowKey::for_row(1, &second);
        let mut book = filled_book(&k1);
        book.edit(&k2, DraftField::Diagnosi, "Frattura".to_string());
        book.edit(&k2, DraftField::Classificazione, "lieve".to_string());

        assert!(book.begin_submit(&k1, &first).is_some());
        assert!(book.begin_submit(&k2, &second).is_some());

        book.finish_submit(&k1, false);
        assert!(!book.is_submitting(&k1));
        assert!(book.is_submitting(&k2));
    }

    #[test]
    fn test_drafts_follow_report_id_not_position() {
        let row = saved_row("r1");
        let mut book = filled_book(&RowKey::for_row(0, &row));

        // Same report now displayed second after a new upload
        let moved = RowKey::for_row(1, &row);
        assert!(book.can_submit(&moved, &row));

        book.retain_rows(&[RowKey::Report("r9".to_string())]);
        assert_eq!(book.draft(&moved), None);
    }
}
