//! Form Schema Editor State
//!
//! Title plus ordered field definitions, with the bookkeeping needed to show
//! validation errors on blur and on submit.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::models::{FieldKind, FieldOption, FieldType, FormField, FormSchema};
use crate::validation::{FieldRules, ValidationError, Validator, FIELD_NAME_RULES, OPTION_RULES, TITLE_RULES};

/// Address of one text input in the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    Title,
    FieldName(usize),
    OptionName(usize, usize),
    OptionValue(usize, usize),
}

impl FieldPath {
    pub fn rules(self) -> FieldRules {
        match self {
            FieldPath::Title => TITLE_RULES,
            FieldPath::FieldName(_) => FIELD_NAME_RULES,
            FieldPath::OptionName(..) | FieldPath::OptionValue(..) => OPTION_RULES,
        }
    }

    /// Where this path points once field `removed` is gone
    fn after_field_removed(self, removed: usize) -> Option<Self> {
        let shift = |index: usize| match index.cmp(&removed) {
            std::cmp::Ordering::Less => Some(index),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(index - 1),
        };
        match self {
            FieldPath::Title => Some(self),
            FieldPath::FieldName(f) => shift(f).map(FieldPath::FieldName),
            FieldPath::OptionName(f, o) => shift(f).map(|f| FieldPath::OptionName(f, o)),
            FieldPath::OptionValue(f, o) => shift(f).map(|f| FieldPath::OptionValue(f, o)),
        }
    }

    /// Where this path points once option `removed` of `field` is gone
    fn after_option_removed(self, field: usize, removed: usize) -> Option<Self> {
        let shift = |index: usize| match index.cmp(&removed) {
            std::cmp::Ordering::Less => Some(index),
            std::cmp::Ordering::Equal => None,
            std::cmp::Ordering::Greater => Some(index - 1),
        };
        match self {
            FieldPath::OptionName(f, o) if f == field => shift(o).map(|o| FieldPath::OptionName(f, o)),
            FieldPath::OptionValue(f, o) if f == field => shift(o).map(|o| FieldPath::OptionValue(f, o)),
            other => Some(other),
        }
    }

    fn is_option_of(self, field: usize) -> bool {
        matches!(self, FieldPath::OptionName(f, _) | FieldPath::OptionValue(f, _) if f == field)
    }
}

/// Why a submit produced no schema
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("form has no fields")]
    NoFields,
    #[error("{} input(s) failed validation", .0.len())]
    Invalid(Vec<(FieldPath, ValidationError)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormEditor {
    title: String,
    fields: Vec<FormField>,
    /// Inputs that lost focus at least once
    touched: BTreeSet<FieldPath>,
    /// A submit was attempted; every error is visible from now on
    submitted: bool,
}

impl Default for FormEditor {
    /// Empty title and one blank string field
    fn default() -> Self {
        Self {
            title: String::new(),
            fields: vec![FormField::default()],
            touched: BTreeSet::new(),
            submitted: false,
        }
    }
}

impl FormEditor {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn field_type(&self, index: usize) -> Option<FieldType> {
        self.field(index).map(|f| f.kind.field_type())
    }

    pub fn options(&self, field_index: usize) -> &[FieldOption] {
        self.field(field_index).and_then(|f| f.kind.options()).unwrap_or_default()
    }

    fn option_mut(&mut self, field_index: usize, option_index: usize) -> Option<&mut FieldOption> {
        self.fields.get_mut(field_index)?.kind.options_mut()?.get_mut(option_index)
    }

    // ========================
    // Edits
    // ========================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_field_name(&mut self, index: usize, name: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.name = name.into();
        }
    }

    pub fn add_field(&mut self) {
        self.fields.push(FormField::default());
    }

    pub fn remove_field(&mut self, index: usize) {
        if index >= self.fields.len() {
            return;
        }
        self.fields.remove(index);
        self.touched = std::mem::take(&mut self.touched)
            .into_iter()
            .filter_map(|path| path.after_field_removed(index))
            .collect();
    }

    /// Change a field's type. Leaving "options" drops the options;
    /// entering it starts with none.
    pub fn set_field_type(&mut self, index: usize, field_type: FieldType) {
        let Some(field) = self.fields.get_mut(index) else {
            return;
        };
        if field.kind.field_type() == field_type {
            return;
        }
        field.kind = FieldKind::empty(field_type);
        self.touched.retain(|path| !path.is_option_of(index));
    }

    /// Append a blank option. Only options fields have options.
    pub fn add_option(&mut self, field_index: usize) {
        if let Some(options) = self.fields.get_mut(field_index).and_then(|f| f.kind.options_mut()) {
            options.push(FieldOption::default());
        }
    }

    pub fn remove_option(&mut self, field_index: usize, option_index: usize) {
        let Some(options) = self.fields.get_mut(field_index).and_then(|f| f.kind.options_mut()) else {
            return;
        };
        if option_index >= options.len() {
            return;
        }
        options.remove(option_index);
        self.touched = std::mem::take(&mut self.touched)
            .into_iter()
            .filter_map(|path| path.after_option_removed(field_index, option_index))
            .collect();
    }

    pub fn set_option_name(&mut self, field_index: usize, option_index: usize, name: impl Into<String>) {
        if let Some(option) = self.option_mut(field_index, option_index) {
            option.name = name.into();
        }
    }

    pub fn set_option_value(&mut self, field_index: usize, option_index: usize, value: impl Into<String>) {
        if let Some(option) = self.option_mut(field_index, option_index) {
            option.value = value.into();
        }
    }

    /// Set the text of the input at `path`
    pub fn set_value(&mut self, path: FieldPath, value: impl Into<String>) {
        match path {
            FieldPath::Title => self.set_title(value),
            FieldPath::FieldName(f) => self.set_field_name(f, value),
            FieldPath::OptionName(f, o) => self.set_option_name(f, o, value),
            FieldPath::OptionValue(f, o) => self.set_option_value(f, o, value),
        }
    }

    // ========================
    // Validation
    // ========================

    /// Current text of an input, if it exists
    pub fn value(&self, path: FieldPath) -> Option<&str> {
        match path {
            FieldPath::Title => Some(&self.title),
            FieldPath::FieldName(f) => self.field(f).map(|field| field.name.as_str()),
            FieldPath::OptionName(f, o) => self.options(f).get(o).map(|opt| opt.name.as_str()),
            FieldPath::OptionValue(f, o) => self.options(f).get(o).map(|opt| opt.value.as_str()),
        }
    }

    /// Every input in display order
    pub fn paths(&self) -> Vec<FieldPath> {
        let mut paths = vec![FieldPath::Title];
        for (f, field) in self.fields.iter().enumerate() {
            paths.push(FieldPath::FieldName(f));
            for o in 0..field.kind.options().map_or(0, <[FieldOption]>::len) {
                paths.push(FieldPath::OptionName(f, o));
                paths.push(FieldPath::OptionValue(f, o));
            }
        }
        paths
    }

    /// Check an input regardless of whether its error is shown
    pub fn check(&self, path: FieldPath) -> Result<(), ValidationError> {
        match self.value(path) {
            Some(value) => path.rules().validate(value),
            None => Ok(()),
        }
    }

    pub fn blur(&mut self, path: FieldPath) {
        if self.value(path).is_some() {
            self.touched.insert(path);
        }
    }

    /// Error to display under an input: only once touched or submitted
    pub fn error(&self, path: FieldPath) -> Option<ValidationError> {
        if !self.submitted && !self.touched.contains(&path) {
            return None;
        }
        self.check(path).err()
    }

    pub fn failures(&self) -> Vec<(FieldPath, ValidationError)> {
        self.paths()
            .into_iter()
            .filter_map(|path| self.check(path).err().map(|err| (path, err)))
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.fields.is_empty()
    }

    pub fn schema(&self) -> FormSchema {
        FormSchema {
            title: self.title.clone(),
            fields: self.fields.clone(),
        }
    }

    /// Validate everything and emit the schema if it passes
    pub fn submit(&mut self) -> Result<FormSchema, SubmitError> {
        self.submitted = true;
        if !self.can_submit() {
            return Err(SubmitError::NoFields);
        }
        let failures = self.failures();
        if !failures.is_empty() {
            return Err(SubmitError::Invalid(failures));
        }
        Ok(self.schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_editor() -> FormEditor {
        let mut editor = FormEditor::default();
        editor.set_title("Form");
        editor.set_field_name(0, "Name");
        editor
    }

    #[test]
    fn test_default_has_one_string_field() {
        let editor = FormEditor::default();
        assert_eq!(editor.title(), "");
        assert_eq!(editor.fields(), &[FormField::default()]);
        assert_eq!(editor.field_type(0), Some(FieldType::String));
    }

    #[test]
    fn test_submit_title_length_boundaries() {
        let mut editor = valid_editor();

        editor.set_title("F");
        assert_eq!(
            editor.submit(),
            Err(SubmitError::Invalid(vec![(FieldPath::Title, ValidationError::TooShort(2))]))
        );
        assert_eq!(editor.error(FieldPath::Title), Some(ValidationError::TooShort(2)));

        editor.set_title("Fo");
        assert!(editor.submit().is_ok());

        editor.set_title("x".repeat(64));
        assert_eq!(editor.submit().unwrap().title.len(), 64);

        editor.set_title("x".repeat(65));
        assert!(matches!(editor.submit(), Err(SubmitError::Invalid(_))));
        assert_eq!(editor.error(FieldPath::Title), Some(ValidationError::TooLong(64)));
    }

    #[test]
    fn test_errors_hidden_until_blur() {
        let mut editor = FormEditor::default();
        assert_eq!(editor.error(FieldPath::Title), None);
        assert_eq!(editor.check(FieldPath::Title), Err(ValidationError::Required));

        editor.blur(FieldPath::Title);
        assert_eq!(editor.error(FieldPath::Title), Some(ValidationError::Required));
        assert_eq!(editor.error(FieldPath::FieldName(0)), None);
    }

    #[test]
    fn test_submit_reveals_all_errors() {
        let mut editor = FormEditor::default();
        editor.set_field_type(0, FieldType::Options);
        editor.add_option(0);

        let Err(SubmitError::Invalid(failures)) = editor.submit() else {
            panic!("empty form must not submit");
        };
        let paths: Vec<FieldPath> = failures.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            paths,
            [FieldPath::Title, FieldPath::FieldName(0), FieldPath::OptionName(0, 0), FieldPath::OptionValue(0, 0)]
        );
        assert_eq!(editor.error(FieldPath::OptionValue(0, 0)), Some(ValidationError::Required));
    }

    #[test]
    fn test_submit_blocked_without_fields() {
        let mut editor = valid_editor();
        editor.remove_field(0);
        assert!(!editor.can_submit());
        assert_eq!(editor.submit(), Err(SubmitError::NoFields));
    }

    #[test]
    fn test_submit_emits_schema() {
        let mut editor = valid_editor();
        editor.add_field();
        editor.set_field_name(1, "Gender");
        editor.set_field_type(1, FieldType::Options);
        editor.add_option(1);
        editor.set_option_name(1, 0, "Male");
        editor.set_option_value(1, 0, "male");

        let schema = editor.submit().unwrap();
        assert_eq!(schema.title, "Form");
        assert_eq!(schema.fields.len(), 2);
        assert_eq!(
            schema.fields[1].kind,
            FieldKind::Options {
                options: vec![FieldOption { name: "Male".to_string(), value: "male".to_string() }]
            }
        );
    }

    #[test]
    fn test_set_value_by_path() {
        let mut editor = FormEditor::default();
        editor.set_field_type(0, FieldType::Options);
        editor.add_option(0);
        editor.set_value(FieldPath::Title, "Survey");
        editor.set_value(FieldPath::FieldName(0), "Color");
        editor.set_value(FieldPath::OptionName(0, 0), "Red");
        editor.set_value(FieldPath::OptionValue(0, 0), "red");
        editor.set_value(FieldPath::OptionValue(0, 5), "ignored");

        assert_eq!(editor.value(FieldPath::Title), Some("Survey"));
        assert_eq!(editor.value(FieldPath::FieldName(0)), Some("Color"));
        assert_eq!(editor.value(FieldPath::OptionName(0, 0)), Some("Red"));
        assert_eq!(editor.value(FieldPath::OptionValue(0, 0)), Some("red"));
        assert_eq!(editor.value(FieldPath::OptionValue(0, 5)), None);
    }

    #[test]
    fn test_remove_field_out_of_range_is_noop() {
        let mut editor = valid_editor();
        let snapshot = editor.clone();
        editor.remove_field(5);
        assert_eq!(editor, snapshot);
    }

    #[test]
    fn test_remove_field_shifts_touched_marks() {
        let mut editor = FormEditor::default();
        editor.add_field();
        editor.add_field();
        editor.blur(FieldPath::FieldName(0));
        editor.blur(FieldPath::FieldName(2));

        editor.remove_field(0);

        // old field 2 is now field 1; old field 1 (now 0) was never touched
        assert_eq!(editor.error(FieldPath::FieldName(0)), None);
        assert_eq!(editor.error(FieldPath::FieldName(1)), Some(ValidationError::Required));
    }

    #[test]
    fn test_options_not_resurrected_after_type_round_trip() {
        let mut editor = valid_editor();
        editor.set_field_type(0, FieldType::Options);
        editor.add_option(0);
        editor.set_option_name(0, 0, "Yes");
        editor.remove_option(0, 0);
        assert!(editor.options(0).is_empty());

        editor.set_field_type(0, FieldType::String);
        assert_eq!(editor.field(0).unwrap().kind, FieldKind::String);
        editor.set_field_type(0, FieldType::Options);
        assert!(editor.options(0).is_empty());
    }

    #[test]
    fn test_switching_type_away_discards_options() {
        let mut editor = valid_editor();
        editor.set_field_type(0, FieldType::Options);
        editor.add_option(0);
        editor.add_option(0);
        editor.set_field_type(0, FieldType::Number);
        editor.set_field_type(0, FieldType::Options);
        assert!(editor.options(0).is_empty());
    }

    #[test]
    fn test_same_type_keeps_options() {
        let mut editor = valid_editor();
        editor.set_field_type(0, FieldType::Options);
        editor.add_option(0);
        editor.set_field_type(0, FieldType::Options);
        assert_eq!(editor.options(0).len(), 1);
    }

    #[test]
    fn test_add_option_requires_options_field() {
        let mut editor = valid_editor();
        editor.add_option(0);
        editor.add_option(7);
        assert_eq!(editor.field(0).unwrap().kind, FieldKind::String);
    }

    #[test]
    fn test_remove_option_by_position() {
        let mut editor = valid_editor();
        editor.set_field_type(0, FieldType::Options);
        for name in ["aa", "bb", "cc"] {
            editor.add_option(0);
            let last = editor.options(0).len() - 1;
            editor.set_option_name(0, last, name);
        }
        editor.blur(FieldPath::OptionValue(0, 2));

        editor.remove_option(0, 1);
        editor.remove_option(0, 9);

        let names: Vec<&str> = editor.options(0).iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["aa", "cc"]);
        assert_eq!(editor.error(FieldPath::OptionValue(0, 1)), Some(ValidationError::Required));
        assert_eq!(editor.error(FieldPath::OptionValue(0, 0)), None);
    }
}
