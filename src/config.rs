//! App Configuration
//!
//! Compile-time settings. The app reads no environment or runtime config.

/// File name offered for the board export download
pub const EXPORT_FILE_NAME: &str = "cards.json";

/// MIME type of the export document
pub const EXPORT_MIME: &str = "application/json";

/// `accept` filter of the import file picker
pub const IMPORT_ACCEPT: &str = "application/json";

/// Form title length limits (characters)
pub const TITLE_MIN_LEN: usize = 2;
pub const TITLE_MAX_LEN: usize = 64;

/// Field name length limits (characters)
pub const FIELD_NAME_MIN_LEN: usize = 2;
pub const FIELD_NAME_MAX_LEN: usize = 32;

/// Option name/value length limits (characters)
pub const OPTION_MIN_LEN: usize = 2;
pub const OPTION_MAX_LEN: usize = 64;
