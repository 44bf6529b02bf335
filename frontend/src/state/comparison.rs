//! Comparison summary derived from the result list.

use crate::{AnalysisResult, ComparisonSummary, RowKey, Trend};

/// Verdicts the backend emits when no real comparison took place.
const NO_COMPARISON: [&str; 2] = ["nessun confronto disponibile", "errore"];

/// Rows carrying an actual comparison, in list order.
pub fn comparison_summary(results: &[AnalysisResult]) -> Vec<ComparisonSummary> {
    results
        .iter()
        .enumerate()
        .filter_map(|(idx, result)| {
            let situazione = result.situazione()?;
            let spiegazione = result.spiegazione()?;
            if NO_COMPARISON.iter().any(|v| v.eq_ignore_ascii_case(situazione)) {
                return None;
            }
            Some(ComparisonSummary {
                row: RowKey::for_row(idx, result),
                patient: result.patient_label(),
                tipo_referto: result.tipo_referto.clone(),
                data_referto: result.data_referto.clone(),
                situazione: situazione.to_string(),
                spiegazione: spiegazione.to_string(),
            })
        })
        .collect()
}

/// True when at least one summarized comparison is a worsening.
pub fn any_worsened(summary: &[ComparisonSummary]) -> bool {
    summary.iter().any(|entry| entry.trend() == Trend::Worsened)
}

/// True when some analyzed report was not persisted.
pub fn any_unsaved(results: &[AnalysisResult]) -> bool {
    results.iter().any(|r| !r.salvato)
}
