//! Card for one analyzed report, with the clinician feedback form.

use leptos::*;

use crate::config::{MSG_FEEDBACK_FAILED, MSG_FEEDBACK_SENT};
use crate::services::{alert, LexicareApi, ReportBackend};
use crate::state::{DraftField, ExpandedRows, FeedbackBook};
use crate::{AnalysisResult, ReportStatus, RowKey, Severity, Trend, TrendBadge};

#[component]
pub fn ResultCard(
    index: usize,
    result: AnalysisResult,
    book: RwSignal<FeedbackBook>,
    expanded: RwSignal<ExpandedRows>,
) -> impl IntoView {
    let key = RowKey::for_row(index, &result);
    let status = ReportStatus::of(&result);
    let severity = Severity::parse(result.classificazione_ai.as_deref());
    let trend = result.situazione().map(Trend::parse);

    let is_expanded = {
        let key = key.clone();
        move || expanded.with(|e| e.is_expanded(&key))
    };
    let toggle_expand = {
        let key = key.clone();
        move |_| {
            expanded.update(|e| e.toggle(&key))
        }
    };

    let title = result.tipo_referto.clone().unwrap_or_else(|| "Referto".to_string());
    let severity_label = result
        .classificazione_ai
        .clone()
        .unwrap_or_else(|| "non disponibile".to_string());

    view! {
        <div id=key.card_id() class="result-card" class:expanded=is_expanded.clone()>
            <div class=format!("result-card-header {}", status.css_class())>
                <div>
                    <p class="report-status">{status.label()}</p>
                    <h3 class="report-title">
                        {title}
                        {result.data_referto.clone().map(|data| view! {
                            <span class="report-date">" del " {data}</span>
                        })}
                    </h3>
                    {result.messaggio.clone().map(|msg| view! {
                        <p class="report-message">{msg}</p>
                    })}
                </div>
                <button class="expand-toggle" on:click=toggle_expand>
                    {move || if is_expanded() { "▲" } else { "▼" }}
                </button>
            </div>

            <div class="result-card-body">
                <div class="result-column">
                    <div class="result-block">
                        <p class="block-label">"Dati paziente"</p>
                        <div class="block-content">
                            <p>
                                <span class="field-name">"Codice Fiscale: "</span>
                                {result.codice_fiscale().unwrap_or("—").to_string()}
                            </p>
                            <p>
                                <span class="field-name">"Nome: "</span>
                                {result.nome_paziente.clone().unwrap_or_else(|| "—".to_string())}
                            </p>
                        </div>
                    </div>

                    <div class="result-block">
                        <p class="block-label">"Risultato analisi AI"</p>
                        <div class="block-content">
                            <p>
                                <span class="field-name">"Diagnosi: "</span>
                                {result.diagnosi_ai.clone().unwrap_or_default()}
                            </p>
                            <p>
                                <span class="field-name">"Classificazione: "</span>
                                <span class=format!("severity-badge {}", severity.css_class())>
                                    {severity_label}
                                </span>
                            </p>
                            <p class="severity-rationale">{severity.rationale()}</p>
                        </div>
                    </div>

                    {trend.map(|trend| view! {
                        <div class="result-block">
                            <p class="block-label">"Confronto con precedenti"</p>
                            <div class="block-content">
                                <p>
                                    <span class="field-name">"Situazione: "</span>
                                    <TrendBadge trend=trend/>
                                </p>
                                <p>
                                    <span class="field-name">"Spiegazione: "</span>
                                    {result.spiegazione.clone().unwrap_or_default()}
                                </p>
                            </div>
                        </div>
                    })}
                </div>

                {result.accepts_feedback().then(|| view! {
                    <FeedbackForm row_key=key.clone() result=result.clone() book=book/>
                })}
            </div>
        </div>
    }
}

/// Correction form for a persisted report.
#[component]
fn FeedbackForm(row_key: RowKey, result: AnalysisResult, book: RwSignal<FeedbackBook>) -> impl IntoView {
    let dom_id = row_key.dom_id();

    let can_submit = {
        let key = row_key.clone();
        let row = result.clone();
        move || book.with(|b| b.can_submit(&key, &row))
    };
    let submitting = {
        let key = row_key.clone();
        move || book.with(|b| b.is_submitting(&key))
    };

    let on_submit = {
        let key = row_key.clone();
        let row = result.clone();
        move |_| {
            let request = book.try_update(|b| b.begin_submit(&key, &row)).flatten();
            let Some(request) = request else {
                return;
            };

            let key = key.clone();
            spawn_local(async move {
                let api = LexicareApi::new();
                let outcome = api.submit_feedback(&request).await;
                book.update(|b| b.finish_submit(&key, outcome.is_ok()));

                match outcome {
                    Ok(()) => {
                        log::info!("✅ Feedback saved for report {}", request.report_id);
                        alert(MSG_FEEDBACK_SENT);
                    }
                    Err(e) => {
                        log::error!("❌ Feedback failed for report {}: {}", request.report_id, e);
                        alert(MSG_FEEDBACK_FAILED);
                    }
                }
            });
        }
    };

    view! {
        <div class="feedback-form">
            <p class="block-label">"Feedback del medico"</p>

            <label for=format!("diagnosi-{}", dom_id) class="form-label">"Diagnosi corretta"</label>
            <input
                id=format!("diagnosi-{}", dom_id)
                type="text"
                class="form-input"
                placeholder="Inserisci diagnosi corretta"
                prop:value=field_value(book, row_key.clone(), DraftField::Diagnosi)
                on:input=field_input(book, row_key.clone(), DraftField::Diagnosi)
            />

            <label for=format!("class-{}", dom_id) class="form-label">"Classificazione corretta"</label>
            <select
                id=format!("class-{}", dom_id)
                class="form-input"
                prop:value=field_value(book, row_key.clone(), DraftField::Classificazione)
                on:change=field_input(book, row_key.clone(), DraftField::Classificazione)
            >
                <option value="">"Seleziona gravità"</option>
                {Severity::TIERS
                    .into_iter()
                    .map(|tier| view! { <option value=tier.as_str()>{tier.display_name()}</option> })
                    .collect_view()}
            </select>

            <label for=format!("commento-{}", dom_id) class="form-label">"Note aggiuntive"</label>
            <textarea
                id=format!("commento-{}", dom_id)
                class="form-input"
                rows="3"
                placeholder="Commenti opzionali"
                prop:value=field_value(book, row_key.clone(), DraftField::Commento)
                on:input=field_input(book, row_key.clone(), DraftField::Commento)
            ></textarea>

            <button
                class="btn btn-primary btn-block"
                disabled=move || !can_submit()
                on:click=on_submit
            >
                {move || if submitting() { "⏳ Invio in corso..." } else { "Invia feedback" }}
            </button>
        </div>
    }
}

fn field_value(book: RwSignal<FeedbackBook>, key: RowKey, field: DraftField) -> impl Fn() -> String {
    move || book.with(|b| b.value(&key, field))
}

fn field_input(book: RwSignal<FeedbackBook>, key: RowKey, field: DraftField) -> impl Fn(ev::Event) {
    move |ev| {
        let value = event_target_value(&ev);
        book.update(|b| b.edit(&key, field, value));
    }
}
