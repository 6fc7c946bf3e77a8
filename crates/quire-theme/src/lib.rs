//! quire-theme
//!
//! Loads a JSON theme document into validated paragraph-style settings.
//! Only an unreadable file or an unparsable document fails; every individual
//! field problem falls back to a default and is reported to a diagnostic sink.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fields;
pub mod keys;
pub mod loader;
pub mod style;

pub use config::ThemeConfig;
pub use diagnostics::{CollectingDiagnostics, Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use error::ThemeError;
pub use fields::{FieldIssue, FieldWarning};
pub use loader::{ThemeLoader, from_value, load_from_file, load_from_string};
pub use style::{LineBreakMode, TextAlignment, UnknownLiteral, WritingDirection};
