//! Sortable Card Component
//!
//! One board card. It is both a drag source and a drop target.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::DeleteConfirmButton;
use crate::models::Card;

/// A draggable card with edit and delete actions
#[component]
pub fn SortableCard(
    card: Card,
    dnd: DndSignals<String>,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let Card { id, title, description, category } = card;

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let card_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("board-card");
            if dnd.is_dragging_item(&id) { c.push_str(" dragging"); }
            if dnd.is_drop_target(&id) { c.push_str(" drop-target"); }
            c
        }
    };

    let edit_id = id.clone();
    let on_edit_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        // The mouseup that ends a drag also produces a click
        if dnd.drag_just_ended() { return; }
        on_edit.run(edit_id.clone());
    };

    view! {
        <div
            class=card_class
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <div class="card-header">
                <span class="card-title">{title}</span>
                <span class=format!("card-icon {}", category.as_str()) title=category.label()>
                    {category.icon()}
                </span>
            </div>
            <p class="card-description">{description}</p>
            <div class="card-actions">
                <button type="button" class="edit-btn" on:click=on_edit_click>"Edit"</button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_: ()| on_delete.run(id.clone())
                />
            </div>
        </div>
    }
}
