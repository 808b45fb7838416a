#![forbid(unsafe_code)]

//! Error types for theme loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::color::ColorParseError;

/// Errors that can occur while loading or merging theme tokens.
#[derive(Debug)]
pub enum ThemeError {
    /// The override file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// Override JSON is malformed or does not fit the token schema.
    Json(serde_json::Error),
    /// A color string is not a valid hex color.
    Color(ColorParseError),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read theme file {}: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid theme JSON: {err}"),
            Self::Color(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::Color(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<ColorParseError> for ThemeError {
    fn from(err: ColorParseError) -> Self {
        Self::Color(err)
    }
}

/// Result type for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;
