//! Validated Input Component
//!
//! Text input bound to one form editor path. Shows the first failing rule
//! once the input was blurred or the form submitted.

use leptos::prelude::*;

use crate::form::FieldPath;
use crate::store::{store_edit_form, FormStateStoreFields, FormStore};

#[component]
pub fn ValidatedInput(
    store: FormStore,
    path: FieldPath,
    #[prop(into)] label: String,
) -> impl IntoView {
    let value = move || store.editor().with(|e| e.value(path).unwrap_or_default().to_string());
    let error = move || store.editor().with(|e| e.error(path));

    view! {
        <label class=move || if error().is_some() { "validated-input invalid" } else { "validated-input" }>
            <span class="input-label">{label}</span>
            <input
                type="text"
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    store_edit_form(&store, |e| e.set_value(path, text));
                }
                on:blur=move |_| store_edit_form(&store, |e| e.blur(path))
            />
            {move || error().map(|err| view! { <span class="input-error">{err.to_string()}</span> })}
        </label>
    }
}
