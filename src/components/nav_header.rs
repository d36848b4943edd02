//! Navigation Header Component
//!
//! Links to the two pages.

use leptos::prelude::*;
use leptos_router::components::A;

/// Top navigation bar
#[component]
pub fn NavHeader() -> impl IntoView {
    view! {
        <nav class="nav-header">
            <A href="/forms">"Form Constructor"</A>
            <A href="/board">"Kanban"</A>
        </nav>
    }
}
