//! Card Board State
//!
//! Ordered card list. List order is display order; every change goes
//! through the methods below.

use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Card, CardDraft, Category};

/// Rejected import document. The board is left untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("import must be a JSON array of cards")]
    NotAnArray,
    #[error("card #{index} is malformed: {source}")]
    InvalidCard {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("card id {0:?} appears more than once")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardBoard {
    cards: Vec<Card>,
}

impl CardBoard {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Board as first shown: three cards, one per category
    pub fn with_sample_cards() -> Self {
        let cards = [(1, Category::Created), (2, Category::InProgress), (3, Category::Done)]
            .into_iter()
            .map(|(n, category)| Card {
                id: n.to_string(),
                title: format!("Card {}", n),
                description: format!("Description {}", n),
                category,
            })
            .collect();
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a card built from `draft`. Blank titles are ignored.
    /// Returns the new card's id.
    pub fn add(&mut self, draft: CardDraft) -> Option<String> {
        if !draft.has_title() {
            return None;
        }
        let id = self.fresh_id();
        self.cards.push(Card {
            id: id.clone(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
        });
        Some(id)
    }

    /// Replace a card's contents in place. Unknown ids are ignored.
    pub fn update(&mut self, id: &str, patch: CardDraft) -> bool {
        let Some(card) = self.cards.iter_mut().find(|card| card.id == id) else {
            return false;
        };
        card.title = patch.title;
        card.description = patch.description;
        card.category = patch.category;
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Card> {
        let index = self.position(id)?;
        Some(self.cards.remove(index))
    }

    /// Move the source card to the target card's index, shifting the cards
    /// in between by one. Not a swap.
    pub fn reorder(&mut self, source_id: &str, target_id: &str) -> bool {
        if source_id == target_id {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(source_id), self.position(target_id)) else {
            return false;
        };
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        true
    }

    /// The whole list as a JSON array document
    pub fn export(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.cards)
    }

    /// Replace the whole list with the cards in `document`.
    /// Every element must be a well-formed card and ids must be unique;
    /// on any error the current list is kept.
    pub fn import(&mut self, document: &str) -> Result<usize, ImportError> {
        let cards = parse_cards(document)?;
        self.cards = cards;
        Ok(self.cards.len())
    }
}

fn parse_cards(document: &str) -> Result<Vec<Card>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(document).map_err(ImportError::Parse)?;
    let serde_json::Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    let mut seen = HashSet::with_capacity(items.len());
    let mut cards = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let card: Card =
            serde_json::from_value(item).map_err(|source| ImportError::InvalidCard { index, source })?;
        if !seen.insert(card.id.clone()) {
            return Err(ImportError::DuplicateId(card.id));
        }
        cards.push(card);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            title: format!("Card {}", id),
            description: String::new(),
            category: Category::Created,
        }
    }

    fn board_of(ids: &[&str]) -> CardBoard {
        CardBoard::new(ids.iter().map(|id| make_card(id)).collect())
    }

    fn ids(board: &CardBoard) -> Vec<&str> {
        board.cards().iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_add_blank_title_is_ignored() {
        let mut board = board_of(&["1", "2"]);
        assert_eq!(board.add(CardDraft::new("", "d", Category::Done)), None);
        assert_eq!(board.add(CardDraft::new("  \t\n", "d", Category::Done)), None);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_add_appends_with_unique_id() {
        let mut board = CardBoard::with_sample_cards();
        let before: Vec<String> = board.cards().iter().map(|c| c.id.clone()).collect();

        let id = board.add(CardDraft::new("X", "", Category::InProgress)).unwrap();

        assert_eq!(board.len(), before.len() + 1);
        let last = board.cards().last().unwrap();
        assert_eq!(last.id, id);
        assert_eq!(last.title, "X");
        assert_eq!(last.category, Category::InProgress);
        assert!(!before.contains(&id));
    }

    #[test]
    fn test_update_in_place() {
        let mut board = board_of(&["1", "2", "3"]);
        assert!(board.update("2", CardDraft::new("New", "Body", Category::Done)));
        assert_eq!(ids(&board), ["1", "2", "3"]);
        let card = board.get("2").unwrap();
        assert_eq!(card.title, "New");
        assert_eq!(card.description, "Body");
        assert_eq!(card.category, Category::Done);

        let snapshot = board.clone();
        assert!(!board.update("missing", CardDraft::new("Z", "", Category::Done)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_remove() {
        let mut board = board_of(&["1", "2", "3"]);
        assert_eq!(board.remove("2").map(|c| c.id), Some("2".to_string()));
        assert_eq!(ids(&board), ["1", "3"]);
        assert!(board.remove("2").is_none());
        assert_eq!(ids(&board), ["1", "3"]);
    }

    #[test]
    fn test_reorder_is_a_move_not_a_swap() {
        let mut board = board_of(&["1", "2", "3", "4"]);
        assert!(board.reorder("1", "3"));
        assert_eq!(ids(&board), ["2", "3", "1", "4"]);

        // "2" sits at index 0 now, so "1" goes back to the front
        assert!(board.reorder("1", "2"));
        assert_eq!(ids(&board), ["1", "2", "3", "4"]);
    }

    #[test]
    fn test_reorder_backwards_shifts_intermediate() {
        let mut board = board_of(&["2", "3", "1", "4"]);
        assert!(board.reorder("3", "1"));
        assert_eq!(ids(&board), ["2", "1", "3", "4"]);

        let mut board = board_of(&["1", "2", "3", "4"]);
        assert!(board.reorder("4", "1"));
        assert_eq!(ids(&board), ["4", "1", "2", "3"]);
    }

    #[test]
    fn test_reorder_noops() {
        let mut board = board_of(&["1", "2", "3"]);
        assert!(!board.reorder("2", "2"));
        assert!(!board.reorder("9", "2"));
        assert!(!board.reorder("2", "9"));
        assert_eq!(ids(&board), ["1", "2", "3"]);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut board = CardBoard::with_sample_cards();
        board.add(CardDraft::new("Extra", "with \"quotes\"\nand lines", Category::Done));
        let document = board.export().unwrap();

        let mut other = board_of(&["z"]);
        assert_eq!(other.import(&document).unwrap(), 4);
        assert_eq!(other, board);
    }

    #[test]
    fn test_import_rejects_non_array() {
        let mut board = board_of(&["1", "2"]);
        let snapshot = board.clone();
        assert!(matches!(board.import(r#"{"id":"1"}"#), Err(ImportError::NotAnArray)));
        assert!(matches!(board.import("42"), Err(ImportError::NotAnArray)));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_import_rejects_bad_json() {
        let mut board = board_of(&["1"]);
        let snapshot = board.clone();
        assert!(matches!(board.import("[{"), Err(ImportError::Parse(_))));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_import_rejects_malformed_card() {
        let mut board = board_of(&["1"]);
        let snapshot = board.clone();
        let document = r#"[
            {"id":"a","title":"A","description":"","icon":"done"},
            {"id":"b","title":"B"}
        ]"#;
        assert!(matches!(board.import(document), Err(ImportError::InvalidCard { index: 1, .. })));
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_import_rejects_duplicate_ids() {
        let mut board = board_of(&["1"]);
        let document = r#"[
            {"id":"a","title":"A","description":"","icon":"done"},
            {"id":"a","title":"B","description":"","icon":"created"}
        ]"#;
        match board.import(document) {
            Err(ImportError::DuplicateId(id)) => assert_eq!(id, "a"),
            other => panic!("unexpected: {:?}", other),
        }
        assert_eq!(ids(&board), ["1"]);
    }

    #[test]
    fn test_import_empty_array_clears() {
        let mut board = board_of(&["1", "2"]);
        assert_eq!(board.import("[]").unwrap(), 0);
        assert!(board.is_empty());
    }
}
