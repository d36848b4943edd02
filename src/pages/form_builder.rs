//! Form Builder Page
//!
//! Edits a form schema: title plus field definitions. A valid submit logs
//! the schema and shows it below the form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FieldCard, ValidatedInput};
use crate::form::{FieldPath, FormEditor};
use crate::store::{store_edit_form, store_submit_form, FormState, FormStateStoreFields, FormStore};

#[component]
pub fn FormBuilderPage() -> impl IntoView {
    let store: FormStore = Store::new(FormState::default());

    let field_count = move || store.editor().with(|e| e.fields().len());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Errors are rendered by the inputs themselves
        let _ = store_submit_form(&store);
    };

    let submitted_json = move || {
        store.submitted().with(|schema| {
            schema.as_ref().and_then(|schema| serde_json::to_string_pretty(schema).ok())
        })
    };

    view! {
        <section class="form-builder">
            <form class="form-builder-form" on:submit=on_submit>
                <ValidatedInput store=store path=FieldPath::Title label="Form title" />

                <For
                    each=move || 0..field_count()
                    key=|index| *index
                    children=move |index| view! { <FieldCard store=store index=index /> }
                />

                <div class="form-actions">
                    <button type="button" on:click=move |_| store_edit_form(&store, FormEditor::add_field)>
                        "+ Add field"
                    </button>
                    <button type="submit" class="primary" disabled=move || field_count() == 0>
                        "Submit to console"
                    </button>
                </div>
            </form>

            {move || submitted_json().map(|json| view! { <pre class="schema-preview">{json}</pre> })}
        </section>
    }
}
