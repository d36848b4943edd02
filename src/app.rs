//! Form & Board App
//!
//! Navigation shell and routes. The two pages share nothing.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::NavHeader;
use crate::pages::{BoardPage, FormBuilderPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <NavHeader />
            <main class="main-content">
                <Routes fallback=|| "Not found.">
                    <Route path=path!("/") view=|| view! { <Redirect path="/forms" /> } />
                    <Route path=path!("/forms") view=FormBuilderPage />
                    <Route path=path!("/board") view=BoardPage />
                    // Older links point here
                    <Route path=path!("/kanban") view=BoardPage />
                </Routes>
            </main>
        </Router>
    }
}
