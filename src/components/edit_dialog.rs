//! Edit Dialog Component
//!
//! Modal editor for one card. Changes stay on a working copy until saved.

use leptos::prelude::*;

use crate::components::CategorySelector;
use crate::models::{Card, Category};

/// Card edit dialog; hidden while `card` is None
#[component]
pub fn EditDialog(
    #[prop(into)] card: Signal<Option<Card>>,
    #[prop(into)] on_change: Callback<Card>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_save: Callback<()>,
) -> impl IntoView {
    let edit = move |apply: &dyn Fn(&mut Card)| {
        if let Some(mut next) = card.get_untracked() {
            apply(&mut next);
            on_change.run(next);
        }
    };
    let title = move || card.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let description = move || card.with(|c| c.as_ref().map(|c| c.description.clone()).unwrap_or_default());
    let category = move || card.with(|c| c.as_ref().map(|c| c.category).unwrap_or_default());

    view! {
        <Show when=move || card.with(Option::is_some)>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <h3>"Edit card"</h3>
                    <input
                        type="text"
                        placeholder="Title"
                        prop:value=title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(&|c| c.title = value.clone());
                        }
                    />
                    <textarea
                        rows="2"
                        placeholder="Description"
                        prop:value=description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(&|c| c.description = value.clone());
                        }
                    />
                    <CategorySelector
                        current=Signal::derive(category)
                        on_change=move |next: Category| edit(&|c| c.category = next)
                    />
                    <div class="dialog-actions">
                        <button type="button" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                        <button type="button" class="primary" on:click=move |_| on_save.run(())>"Save"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
