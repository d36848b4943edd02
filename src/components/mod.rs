//! UI Components
//!
//! Presentational Leptos components for the two pages.

mod nav_header;
mod category_selector;
mod delete_confirm_button;
mod sortable_card;
mod card_form;
mod edit_dialog;
mod validated_input;
mod options_editor;
mod field_card;

pub use nav_header::NavHeader;
pub use category_selector::CategorySelector;
pub use delete_confirm_button::DeleteConfirmButton;
pub use sortable_card::SortableCard;
pub use card_form::CardForm;
pub use edit_dialog::EditDialog;
pub use validated_input::ValidatedInput;
pub use options_editor::OptionsEditor;
pub use field_card::FieldCard;
