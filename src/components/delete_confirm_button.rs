//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows "Delete?" with ✓/✗ buttons.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    move || {
        if asking.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">"Delete?"</span>
                    <button
                        type="button"
                        class="confirm-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                            on_confirm.run(());
                        }
                    >
                        "✓"
                    </button>
                    <button
                        type="button"
                        class="cancel-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(false);
                        }
                    >
                        "✗"
                    </button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    type="button"
                    class=button_class.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(true);
                    }
                >
                    {label.clone()}
                </button>
            }
            .into_any()
        }
    }
}
