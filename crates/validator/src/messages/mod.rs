//! Message catalog and formatter
//!
//! Failures are rendered from per-language templates. A template contains
//! the `:field` placeholder, which is replaced by the field's display name
//! (quoted or bare), optionally followed by `: <value>`.
//!
//! ```rust
//! use fieldward_validator::messages::{
//!     MessageCatalog, MessageFormatter, MessageStyle, RenameTable, TemplateKind,
//! };
//!
//! let catalog = MessageCatalog::builtin();
//! let renames = RenameTable::new();
//! let formatter = MessageFormatter::new(&catalog, &renames);
//!
//! let style = MessageStyle { language: "fr", print_field: true, print_value: false };
//! let msg = formatter.format("email", None, TemplateKind::Required, style).unwrap();
//! assert_eq!(msg, "Champ 'email' n'existe pas");
//! ```

mod catalog;
mod format;

pub use catalog::{
    DEFAULT_LANGUAGE, FIELD_PLACEHOLDER, LanguageMessages, MessageCatalog, RenameTable,
    TemplateKind,
};
pub use format::{MessageFormatter, MessageStyle, format_message};
