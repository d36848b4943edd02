//! Board Page
//!
//! Card list with drag-and-drop reordering, the create form, the edit
//! dialog, and JSON export/import.
//! Uses leptos-dragdrop: dropping a card on another moves it there.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CardForm, EditDialog, SortableCard};
use crate::config::IMPORT_ACCEPT;
use crate::board::CardBoard;
use crate::models::{Card, CardDraft};
use crate::store::*;
use crate::transfer::{export_board, import_board};

use leptos_dragdrop::*;

#[component]
pub fn BoardPage() -> impl IntoView {
    let store: BoardStore = Store::new(BoardState::new());

    // Create DnD signals
    let dnd = create_dnd_signals::<String>();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged_id: String, target_id: String| {
        log::debug!("[DND] Drop on card: dragged={}, target={}", dragged_id, target_id);
        store_reorder(&store, &dragged_id, &target_id);
    });

    let on_export = move |_| {
        if let Err(err) = export_board(&store) {
            log::error!("[TRANSFER] export failed: {}", err);
        }
    };

    let on_import = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        // Allow picking the same file again
        input.set_value("");
        let Some(file) = file else { return; };

        spawn_local(async move {
            if let Err(err) = import_board(store, file).await {
                log::warn!("[TRANSFER] import ignored: {}", err);
            }
        });
    };

    let cards = move || store.board().with(|board| board.cards().to_vec());

    view! {
        <section class="board-page">
            <div class="board-toolbar">
                <h2>"Board"</h2>
                <div class="board-toolbar-actions">
                    <button type="button" on:click=on_export>"Export"</button>
                    <label class="import-btn">
                        "Import"
                        <input type="file" accept=IMPORT_ACCEPT hidden=true on:change=on_import />
                    </label>
                </div>
            </div>

            <div class="board-layout">
                <div class="card-list" class:dragging=move || dnd.is_dragging()>
                    <For
                        each=cards
                        key=|card| {
                            // Any content change must re-render the card
                            (card.id.clone(), card.title.clone(), card.description.clone(), card.category)
                        }
                        children=move |card| {
                            view! {
                                <SortableCard
                                    card=card
                                    dnd=dnd
                                    on_edit=move |id: String| store_begin_edit(&store, &id)
                                    on_delete=move |id: String| store_remove_card(&store, &id)
                                />
                            }
                        }
                    />
                    <p class="item-count">{move || format!("{} cards", store.board().with(CardBoard::len))}</p>
                </div>

                <CardForm
                    draft=Signal::derive(move || store.draft().get())
                    on_change=move |draft: CardDraft| { *store.draft().write() = draft; }
                    on_add=move |_: ()| { store_add_draft(&store); }
                />
            </div>

            <EditDialog
                card=Signal::derive(move || store.editing().get())
                on_change=move |card: Card| { *store.editing().write() = Some(card); }
                on_cancel=move |_: ()| store_cancel_edit(&store)
                on_save=move |_: ()| store_save_edit(&store)
            />
        </section>
    }
}
