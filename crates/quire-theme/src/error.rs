use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("unable to read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("theme is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("theme document is empty")]
    EmptyDocument,
}

impl ThemeError {
    /// The theme source could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self, ThemeError::Io { .. })
    }

    /// The theme source was read but did not hold a usable JSON document.
    pub fn is_parse(&self) -> bool {
        matches!(self, ThemeError::Parse(_) | ThemeError::EmptyDocument)
    }
}
