//! Card Form Component
//!
//! "Create card" form beside the card list.

use leptos::prelude::*;

use crate::components::CategorySelector;
use crate::models::{CardDraft, Category};

/// Form for creating new cards. Blank titles are ignored by the board.
#[component]
pub fn CardForm(
    #[prop(into)] draft: Signal<CardDraft>,
    #[prop(into)] on_change: Callback<CardDraft>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    // Apply one edit to a copy of the current draft
    let edit = move |apply: &dyn Fn(&mut CardDraft)| {
        let mut next = draft.get_untracked();
        apply(&mut next);
        on_change.run(next);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_add.run(());
    };

    view! {
        <form class="card-form" on:submit=on_submit>
            <h3>"New card"</h3>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit(&|d| d.title = value.clone());
                }
            />
            <textarea
                rows="2"
                placeholder="Description"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit(&|d| d.description = value.clone());
                }
            />
            <CategorySelector
                current=Signal::derive(move || draft.with(|d| d.category))
                on_change=move |category: Category| edit(&|d| d.category = category)
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
