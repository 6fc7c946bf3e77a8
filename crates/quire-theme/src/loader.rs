use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::config::ThemeConfig;
use crate::diagnostics::{Diagnostics, SilentDiagnostics, TracingDiagnostics};
use crate::error::ThemeError;
use crate::fields::{FIELDS, FieldWarning, json_type_name};
use crate::keys;

/// Builds [`ThemeConfig`]s, reporting field fallbacks to a diagnostic sink.
///
/// Holds no state besides the sink, so one loader can be shared across
/// threads and reused for any number of documents.
#[derive(Clone)]
pub struct ThemeLoader {
    diagnostics: Arc<dyn Diagnostics>,
}

impl ThemeLoader {
    /// A loader that logs fallbacks through `tracing`.
    pub fn new() -> Self {
        Self::with_diagnostics(TracingDiagnostics)
    }

    /// A loader that reports nothing.
    pub fn silent() -> Self {
        Self::with_diagnostics(SilentDiagnostics)
    }

    pub fn with_diagnostics(diagnostics: impl Diagnostics + 'static) -> Self {
        Self {
            diagnostics: Arc::new(diagnostics),
        }
    }

    /// Use a sink the caller keeps a handle to, e.g. to inspect it afterwards.
    pub fn with_shared_diagnostics(diagnostics: Arc<dyn Diagnostics>) -> Self {
        Self { diagnostics }
    }

    /// Read and parse a theme file.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Io`] if the file cannot be read, otherwise as
    /// [`load_from_string`](Self::load_from_string).
    pub fn load_from_file(&self, path: impl AsRef<Path>) -> Result<ThemeConfig, ThemeError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "unable to load theme from file");
            ThemeError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let config = self.load_from_slice(&bytes)?;
        tracing::debug!(path = %path.display(), "theme loaded from file");
        Ok(config)
    }

    /// Parse a theme from JSON text.
    ///
    /// # Errors
    ///
    /// [`ThemeError::Parse`] if the text is not JSON, [`ThemeError::EmptyDocument`]
    /// if it is the JSON `null`.
    pub fn load_from_string(&self, text: &str) -> Result<ThemeConfig, ThemeError> {
        self.load_from_slice(text.as_bytes())
    }

    /// Build a config from an already parsed document. Never fails.
    pub fn from_value(&self, json: &Value) -> ThemeConfig {
        let paragraph = paragraph_object(json);

        let mut config = ThemeConfig::default();
        for field in FIELDS {
            let value = paragraph.and_then(|p| p.get(field.key));
            if let Some(issue) = (field.apply)(&mut config, value) {
                self.diagnostics.field_fallback(&FieldWarning {
                    key: field.key,
                    issue,
                    fallback: field.fallback,
                });
            }
        }
        config
    }

    fn load_from_slice(&self, bytes: &[u8]) -> Result<ThemeConfig, ThemeError> {
        let json: Value = serde_json::from_slice(bytes).inspect_err(|e| {
            tracing::error!(error = %e, "unable to parse theme JSON");
        })?;

        if json.is_null() {
            tracing::error!("theme JSON is null");
            return Err(ThemeError::EmptyDocument);
        }

        Ok(self.from_value(&json))
    }
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeLoader").finish_non_exhaustive()
    }
}

/// `defaults.paragraph`, or `None` when either level is absent or not an object.
fn paragraph_object(json: &Value) -> Option<&Map<String, Value>> {
    let paragraph = json.get(keys::DEFAULTS)?.get(keys::PARAGRAPH)?;
    match paragraph.as_object() {
        Some(object) => Some(object),
        None => {
            tracing::debug!(
                found = json_type_name(paragraph),
                "paragraph style is not an object, using defaults"
            );
            None
        }
    }
}

/// Read a theme file, logging fallbacks through `tracing`.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<ThemeConfig, ThemeError> {
    ThemeLoader::new().load_from_file(path)
}

/// Parse a theme from JSON text, logging fallbacks through `tracing`.
pub fn load_from_string(text: &str) -> Result<ThemeConfig, ThemeError> {
    ThemeLoader::new().load_from_string(text)
}

/// Build a config from a parsed document, logging fallbacks through `tracing`.
pub fn from_value(json: &Value) -> ThemeConfig {
    ThemeLoader::new().from_value(json)
}
