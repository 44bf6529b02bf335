use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <span class="logo-icon">"⚕"</span>
                <a href="#" class="logo">"LexiCare"</a>
            </div>
            <div class="header-right">
                <span class="tagline">"Sistema AI per Referti Clinici"</span>
            </div>
        </header>
    }
}
