//! Comparison of the new reports with the patients' history.

use leptos::*;

use crate::config::MSG_WORSENED_ALERT;
use crate::{ComparisonSummary, Trend};

/// Summary of every real comparison, with the worsened-report alert.
#[component]
pub fn ComparisonPanel(
    summary: Memo<Vec<ComparisonSummary>>,
    worsened: Memo<bool>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !summary.with(Vec::is_empty)
            fallback=|| view! { }
        >
            <section class="comparison-panel">
                <h2 class="section-title">"Confronto con referti precedenti"</h2>

                <Show when=move || worsened.get() fallback=|| view! { }>
                    <div class="alert alert-danger" role="alert">
                        <strong>"⚠ Attenzione: "</strong>
                        {MSG_WORSENED_ALERT}
                    </div>
                </Show>

                <div class="comparison-list">
                    {move || {
                        summary
                            .get()
                            .into_iter()
                            .map(|entry| view! { <ComparisonEntry entry=entry/> })
                            .collect_view()
                    }}
                </div>
            </section>
        </Show>
    }
}

#[component]
fn ComparisonEntry(entry: ComparisonSummary) -> impl IntoView {
    let trend = entry.trend();
    let is_worsened = trend == Trend::Worsened;
    let border = trend.border_class();
    let anchor = entry.card_anchor();
    let report = match (&entry.tipo_referto, &entry.data_referto) {
        (Some(tipo), Some(data)) => format!("{} del {}", tipo, data),
        (Some(tipo), None) => tipo.clone(),
        (None, Some(data)) => format!("Referto del {}", data),
        (None, None) => "Referto".to_string(),
    };

    view! {
        <div class=format!("comparison-entry {}", border)>
            <div class="comparison-entry-header">
                <a href=anchor class="comparison-patient">{entry.patient}</a>
                <span class="comparison-report">{report}</span>
            </div>
            <TrendBadge trend=trend/>
            <p class="comparison-explanation">{entry.spiegazione}</p>
            {is_worsened.then(|| view! {
                <div class="alert alert-danger alert-nested" role="alert">
                    "🚨 " {MSG_WORSENED_ALERT}
                </div>
            })}
        </div>
    }
}

/// Icon and label of a comparison verdict; unrecognized verdicts show
/// their raw text only.
#[component]
pub fn TrendBadge(trend: Trend) -> impl IntoView {
    let icon = trend.icon();
    let label = trend.label().to_string();

    view! {
        <span class=format!("trend {}", trend.css_class())>
            {icon.map(|icon| view! { <span class="trend-icon">{icon}</span> })}
            {label}
        </span>
    }
}
