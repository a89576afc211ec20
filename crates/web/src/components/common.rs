// =============================================================================
// CaseDesk Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Badge
// 2. Card
// 3. Loading Spinner
// 4. Error Display
// =============================================================================

use casedesk_common::format::Tone;
use leptos::prelude::*;

// -----------------------------------------------------------------------------
// 1. Badge
// -----------------------------------------------------------------------------

/// Coloured pill label.
#[component]
pub fn Badge(#[prop(into)] label: String, tone: Tone) -> impl IntoView {
    view! {
        <span class=tone.class()>{label}</span>
    }
}

// -----------------------------------------------------------------------------
// 2. Card
// -----------------------------------------------------------------------------

/// Card container component.
#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=format!("card {}", class)>
            {title.map(|t| view! {
                <div class="card-header">
                    <h3 class="card-title">{t}</h3>
                </div>
            })}
            <div class="card-body">
                {children()}
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Loading Spinner
// -----------------------------------------------------------------------------

#[component]
pub fn LoadingSpinner(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <div class="spinner"></div>
            {message.map(|m| view! { <p class="loading-message">{m}</p> })}
        </div>
    }
}

// -----------------------------------------------------------------------------
// 4. Error Display
// -----------------------------------------------------------------------------

/// Load failure message, with the underlying error as detail.
#[component]
pub fn ErrorDisplay(
    #[prop(into)] message: String,
    #[prop(optional, into)] detail: Option<String>,
) -> impl IntoView {
    view! {
        <div class="error-display">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
            {detail.map(|d| view! { <span class="error-detail">{d}</span> })}
        </div>
    }
}
