// =============================================================================
// CaseDesk Web - Footer Component
// =============================================================================

use chrono::Datelike;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <span class="footer-copyright">{format!("© {} CaseDesk", year)}</span>
            <span class="footer-note">"Win likelihood and brand impact are model estimates, not legal advice."</span>
        </footer>
    }
}
