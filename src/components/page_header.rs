//! Page Header Component
//!
//! Title bar with plain links back to the admin index and the home page.

use leptos::prelude::*;

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header class="page-header">
            <nav class="page-header-nav">
                <a href="/admin" class="icon-link" aria-label="Back to Admin">"←"</a>
                <a href="/" class="icon-link" aria-label="Go home">"⌂"</a>
            </nav>
            <h1>"Add Device"</h1>
            <div class="page-header-spacer"></div>
        </header>
    }
}
