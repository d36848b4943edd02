//! Page State Stores
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each page owns
//! its own store; the two features never share state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{CardBoard, ImportError};
use crate::form::{FormEditor, SubmitError};
use crate::models::{Card, CardDraft, FormSchema};

// ========================
// Board
// ========================

/// Card board page state
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// The ordered cards
    pub board: CardBoard,
    /// Contents of the "create card" form
    pub draft: CardDraft,
    /// Working copy of the card open in the edit dialog
    pub editing: Option<Card>,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            board: CardBoard::with_sample_cards(),
            ..Default::default()
        }
    }
}

pub type BoardStore = Store<BoardState>;

/// Add the draft as a new card and clear the form
pub fn store_add_draft(store: &BoardStore) -> Option<String> {
    let draft = store.draft().get_untracked();
    let id = store.board().write().add(draft);
    match &id {
        Some(id) => {
            log::debug!("[BOARD] added card {}", id);
            *store.draft().write() = CardDraft::default();
        }
        None => log::debug!("[BOARD] ignored card without title"),
    }
    id
}

/// Remove a card by id
pub fn store_remove_card(store: &BoardStore, id: &str) {
    if store.board().write().remove(id).is_some() {
        log::debug!("[BOARD] removed card {}", id);
    }
}

/// Move a dropped card onto the target's position
pub fn store_reorder(store: &BoardStore, source_id: &str, target_id: &str) {
    if store.board().write().reorder(source_id, target_id) {
        log::debug!("[BOARD] moved card {} to position of {}", source_id, target_id);
    }
}

/// Open the edit dialog on a copy of the card
pub fn store_begin_edit(store: &BoardStore, id: &str) {
    let card = store.board().with_untracked(|board| board.get(id).cloned());
    *store.editing().write() = card;
}

/// Close the edit dialog, dropping unsaved changes
pub fn store_cancel_edit(store: &BoardStore) {
    *store.editing().write() = None;
}

/// Apply the edit dialog's copy to the board and close the dialog
pub fn store_save_edit(store: &BoardStore) {
    let Some(card) = store.editing().get_untracked() else {
        return;
    };
    if !store.board().write().update(&card.id, CardDraft::from(&card)) {
        log::warn!("[BOARD] card {} vanished while being edited", card.id);
    }
    *store.editing().write() = None;
}

/// Export document of the current board
pub fn store_export(store: &BoardStore) -> Result<String, serde_json::Error> {
    store.board().with_untracked(CardBoard::export)
}

/// Replace the board with an imported document. On error the board is kept.
pub fn store_import(store: &BoardStore, document: &str) -> Result<usize, ImportError> {
    // Parse against a scratch board so a rejected document never
    // touches (or notifies) the live one
    let mut imported = CardBoard::default();
    let count = imported.import(document)?;
    *store.board().write() = imported;
    *store.editing().write() = None;
    log::info!("[BOARD] imported {} cards", count);
    Ok(count)
}

// ========================
// Form builder
// ========================

/// Form builder page state
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub editor: FormEditor,
    /// Last schema that passed validation
    pub submitted: Option<FormSchema>,
}

pub type FormStore = Store<FormState>;

/// Apply an edit to the form editor
pub fn store_edit_form(store: &FormStore, edit: impl FnOnce(&mut FormEditor)) {
    edit(&mut store.editor().write());
}

/// Validate and emit the schema
pub fn store_submit_form(store: &FormStore) -> Result<FormSchema, SubmitError> {
    let result = store.editor().write().submit();
    match &result {
        Ok(schema) => {
            match serde_json::to_string_pretty(schema) {
                Ok(json) => log::info!("[FORM] submitted schema:\n{}", json),
                Err(err) => log::warn!("[FORM] could not render schema: {}", err),
            }
            *store.submitted().write() = Some(schema.clone());
        }
        Err(err) => log::debug!("[FORM] submit blocked: {}", err),
    }
    result
}
