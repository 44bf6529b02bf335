//! Placeholder shown before any report has been analyzed.

use leptos::*;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">"📄"</div>
            <h2>"Nessun referto analizzato"</h2>
            <p class="subtitle">
                "Carica i tuoi referti in formato PDF per ottenere un'analisi semantica automatica "
                "e confrontare l'evoluzione nel tempo."
            </p>
        </div>
    }
}

/// Warning shown when part of the batch was not persisted.
#[component]
pub fn UnsavedBanner() -> impl IntoView {
    view! {
        <div class="alert alert-warning" role="status">
            "⚠ Non tutti i referti sono stati salvati. "
            "Solo i referti con Codice Fiscale valido vengono archiviati e possono ricevere feedback."
        </div>
    }
}
