//! Frontend Models
//!
//! Card board and form schema data structures.

use serde::{Deserialize, Serialize};

// ========================
// Board
// ========================

/// Card status, rendered as the card's icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    #[default]
    Created,
    InProgress,
    Done,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Created, Category::InProgress, Category::Done];

    /// Wire value, also used as `<option>` value
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Created => "created",
            Category::InProgress => "inProgress",
            Category::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Created => "Created",
            Category::InProgress => "In progress",
            Category::Done => "Done",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Created => "✎",
            Category::InProgress => "◔",
            Category::Done => "✔",
        }
    }
}

/// A card on the board. Wire format uses `icon` for the category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "icon", alias = "category")]
    pub category: Category,
}

/// Card contents without an id: the "create card" form and the edit patch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
}

impl CardDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
        }
    }

    /// Blank titles are never accepted
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

impl From<&Card> for CardDraft {
    fn from(card: &Card) -> Self {
        Self::new(card.title.clone(), card.description.clone(), card.category)
    }
}

// ========================
// Form schema
// ========================

/// Selectable field type, without payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldType {
    #[default]
    String,
    Number,
    Options,
}

impl FieldType {
    pub const ALL: [FieldType; 3] = [FieldType::String, FieldType::Number, FieldType::Options];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Options => "options",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Options => "Options",
        }
    }
}

/// A selectable name/value pair of an options field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub name: String,
    pub value: String,
}

/// Field type with its payload. Only options fields carry options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Options { options: Vec<FieldOption> },
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::String => FieldType::String,
            FieldKind::Number => FieldType::Number,
            FieldKind::Options { .. } => FieldType::Options,
        }
    }

    /// Fresh payload for a type; options start empty
    pub fn empty(field_type: FieldType) -> Self {
        match field_type {
            FieldType::String => FieldKind::String,
            FieldType::Number => FieldKind::Number,
            FieldType::Options => FieldKind::Options { options: Vec::new() },
        }
    }

    pub fn options(&self) -> Option<&[FieldOption]> {
        match self {
            FieldKind::Options { options } => Some(options),
            _ => None,
        }
    }

    pub fn options_mut(&mut self) -> Option<&mut Vec<FieldOption>> {
        match self {
            FieldKind::Options { options } => Some(options),
            _ => None,
        }
    }
}

/// One field definition of a form schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Default for FormField {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: FieldKind::String,
        }
    }
}

/// The schema emitted on submit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: String,
    pub fields: Vec<FormField>,
}
