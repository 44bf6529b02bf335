//! Results list shown after an analysis.

use leptos::*;

use crate::state::{any_worsened, comparison_summary, ExpandedRows, FeedbackBook};
use crate::{row_keys, AnalysisResult, ComparisonPanel, ResultCard, RowKey};

#[component]
pub fn ResultsSection(results: ReadSignal<Vec<AnalysisResult>>) -> impl IntoView {
    // Per-row UI state, keyed by report id
    let book = create_rw_signal(FeedbackBook::new());
    let expanded = create_rw_signal(ExpandedRows::default());

    let summary = create_memo(move |_| results.with(|r| comparison_summary(r)));
    let worsened = create_memo(move |_| summary.with(|s| any_worsened(s)));

    // Drop state of rows that left the list. A failed analysis notifies
    // without changing the rows, so compare with the previous keys.
    create_effect(move |prev: Option<Vec<RowKey>>| {
        let keys = results.with(|r| row_keys(r));
        if prev.as_ref() != Some(&keys) {
            book.update(|b| b.retain_rows(&keys));
            expanded.update(|e| e.on_list_replaced(&keys));
        }
        keys
    });

    view! {
        <Show
            when=move || !results.with(Vec::is_empty)
            fallback=|| view! { }
        >
            <div class="results-section">
                <ComparisonPanel summary=summary worsened=worsened/>

                <h2 class="section-title">
                    "Risultati Analisi (" {move || results.with(Vec::len)} ")"
                </h2>

                {move || {
                    results
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, result)| view! {
                            <ResultCard index=index result=result book=book expanded=expanded/>
                        })
                        .collect_view()
                }}
            </div>
        </Show>
    }
}
