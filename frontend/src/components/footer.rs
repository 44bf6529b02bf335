//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer>
            <div>
                "© " {year} " LexiCare - Sistema AI per supporto decisionale clinico • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                <a href="#" class="footer-link">"Documentazione"</a>
                <a href="#" class="footer-link">"Supporto"</a>
                <a href="#" class="footer-link">"Privacy"</a>
            </div>
        </footer>
    }
}
