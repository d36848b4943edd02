//! Category Selector Component
//!
//! Button group for picking a card's category.

use leptos::prelude::*;

use crate::models::Category;

/// Category buttons; the active one is highlighted
#[component]
pub fn CategorySelector(
    #[prop(into)] current: Signal<Category>,
    #[prop(into)] on_change: Callback<Category>,
) -> impl IntoView {
    view! {
        <div class="type-selector">
            {Category::ALL.into_iter().map(|category| {
                let is_selected = move || current.get() == category;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn active" } else { "type-btn" }
                        on:click=move |_| on_change.run(category)
                    >
                        <span class=format!("card-icon {}", category.as_str())>{category.icon()}</span>
                        {category.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
