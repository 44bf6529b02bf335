//! PDF upload form with drag & drop support.
//!
//! Handles file selection, count validation, the analyze call and
//! publishing the returned results to the shell.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::config::MSG_FILE_COUNT;
use crate::services::{alert, LexicareApi};
use crate::state::{analyze_selection, settle, DragPhase, FileSelection};
use crate::AnalysisResult;

#[component]
pub fn UploadSection(set_results: WriteSignal<Vec<AnalysisResult>>) -> impl IntoView {
    let selection = create_rw_signal(FileSelection::<File>::new());
    let (loading, set_loading) = create_signal(false);
    let (drag_active, set_drag_active) = create_signal(false);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            selection.update(|s| {
                s.replace_with(file_list(&files));
            });
        }
    };

    let on_drag = move |ev: DragEvent, phase: DragPhase| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drag_active.set(phase.highlight());
    };

    let on_drop = move |ev: DragEvent| {
        on_drag(ev.clone(), DragPhase::Drop);
        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() > 0 {
            let count = selection
                .try_update(|s| s.replace_with(file_list(&files)))
                .unwrap_or_default();
            log::info!("📥 {} PDF(s) selected from drop", count);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let current = selection.get_untracked();
        if let Err(e) = current.validate() {
            log::warn!("⚠️ {}", e);
            alert(MSG_FILE_COUNT);
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            let api = LexicareApi::new();
            let outcome = analyze_selection(&api, &current).await;
            if let Some(message) = set_results.try_update(|r| settle(outcome, r)).flatten() {
                alert(message);
            }
            set_loading.set(false);
        });
    };

    view! {
        <form class="upload-section" on:submit=on_submit>
            <h2 class="section-title">"Carica Referti Medici (PDF)"</h2>

            <div
                class="drop-zone"
                class:active=move || drag_active.get()
                on:dragenter=move |ev| on_drag(ev, DragPhase::Enter)
                on:dragover=move |ev| on_drag(ev, DragPhase::Over)
                on:dragleave=move |ev| on_drag(ev, DragPhase::Leave)
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <p class="upload-text">"Trascina qui i file PDF oppure"</p>

                <input
                    type="file"
                    id="file-upload"
                    accept=".pdf"
                    multiple=true
                    style="display:none"
                    on:change=on_file_change
                />
                <label for="file-upload" class="upload-button">
                    "Seleziona file"
                </label>

                <Show
                    when=move || !selection.with(FileSelection::is_empty)
                    fallback=|| view! { }
                >
                    <div class="selected-files">
                        <p class="selected-files-title">
                            "File selezionati (" {move || selection.with(FileSelection::len)} "):"
                        </p>
                        <ul>
                            {move || {
                                selection
                                    .with(FileSelection::names)
                                    .into_iter()
                                    .map(|name| view! { <li>{name}</li> })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </Show>
            </div>

            <div class="upload-actions">
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() {
                        "⏳ Analisi in corso..."
                    } else {
                        "Analizza Referti"
                    }}
                </button>
                <p class="upload-hint">
                    "Solo referti con Codice Fiscale valido verranno salvati nel sistema."
                </p>
            </div>
        </form>
    }
}

fn file_list(files: &FileList) -> Vec<File> {
    (0..files.length()).filter_map(|idx| files.get(idx)).collect()
}
