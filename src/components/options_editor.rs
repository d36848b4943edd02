//! Options Editor Component
//!
//! Name/value pairs of an options field.

use leptos::prelude::*;

use crate::components::ValidatedInput;
use crate::form::FieldPath;
use crate::store::{store_edit_form, FormStateStoreFields, FormStore};

#[component]
pub fn OptionsEditor(store: FormStore, field_index: usize) -> impl IntoView {
    let option_count = move || store.editor().with(|e| e.options(field_index).len());

    view! {
        <div class="options-editor">
            <span class="options-label">"Choices"</span>
            <For
                each=move || 0..option_count()
                key=|option_index| *option_index
                children=move |option_index| {
                    view! {
                        <div class="option-row">
                            <ValidatedInput
                                store=store
                                path=FieldPath::OptionName(field_index, option_index)
                                label="Name"
                            />
                            <ValidatedInput
                                store=store
                                path=FieldPath::OptionValue(field_index, option_index)
                                label="Value"
                            />
                            <button
                                type="button"
                                class="remove-option-btn"
                                on:click=move |_| store_edit_form(&store, |e| e.remove_option(field_index, option_index))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
            <button
                type="button"
                class="add-option-btn"
                on:click=move |_| store_edit_form(&store, |e| e.add_option(field_index))
            >
                "+ Add option"
            </button>
        </div>
    }
}
