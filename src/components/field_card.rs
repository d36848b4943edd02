//! Field Card Component
//!
//! Editor for one field definition: name, type and (for options fields)
//! the choices.

use leptos::prelude::*;

use crate::components::{OptionsEditor, ValidatedInput};
use crate::form::FieldPath;
use crate::models::FieldType;
use crate::store::{store_edit_form, FormStateStoreFields, FormStore};

#[component]
pub fn FieldCard(store: FormStore, index: usize) -> impl IntoView {
    let field_type = move || store.editor().with(|e| e.field_type(index)).unwrap_or_default();

    let on_type_change = move |ev: web_sys::Event| {
        match FieldType::parse(&event_target_value(&ev)) {
            Some(next) => store_edit_form(&store, |e| e.set_field_type(index, next)),
            None => log::warn!("[FORM] unknown field type selected"),
        }
    };

    view! {
        <div class="field-card">
            <div class="field-card-header">
                <span class="field-card-title">{format!("Field {}", index + 1)}</span>
                <button
                    type="button"
                    class="remove-field-btn"
                    on:click=move |_| store_edit_form(&store, |e| e.remove_field(index))
                >
                    "×"
                </button>
            </div>
            <div class="field-card-body">
                <ValidatedInput store=store path=FieldPath::FieldName(index) label="Field name" />
                <select class="field-type-select" on:change=on_type_change>
                    {FieldType::ALL.into_iter().map(|t| view! {
                        <option value=t.as_str() prop:selected=move || field_type() == t>{t.label()}</option>
                    }).collect_view()}
                </select>
                <Show when=move || field_type() == FieldType::Options>
                    <OptionsEditor store=store field_index=index />
                </Show>
            </div>
        </div>
    }
}
