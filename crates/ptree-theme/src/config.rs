#![forbid(unsafe_code)]

//! Environment-driven theme configuration.
//!
//! # Environment Variables
//! - `PTREE_THEME` = light|dark|auto (auto inspects `COLORFGBG`)
//! - `PTREE_THEME_FILE` (path to a JSON token override file)
//! - `PTREE_COLOR_PROFILE` = truecolor|256|16|mono
//!
//! Invalid values never abort: they are collected as [`ThemeConfigError`]
//! diagnostics and the default is kept.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::color::ColorProfile;
use crate::error::{ThemeError, ThemeResult};
use crate::tokens::{ThemeMode, ThemeTokens};

const ENV_THEME: &str = "PTREE_THEME";
const ENV_THEME_FILE: &str = "PTREE_THEME_FILE";
const ENV_COLOR_PROFILE: &str = "PTREE_COLOR_PROFILE";
const ENV_COLORFGBG: &str = "COLORFGBG";

/// Theme selection and renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    /// JSON file deep-merged over the preset for `mode`.
    pub theme_file: Option<PathBuf>,
    /// Color fidelity for terminal output.
    pub color_profile: ColorProfile,
}

/// Configuration parse diagnostics.
#[derive(Debug, Clone)]
pub struct ThemeConfigParse {
    pub config: ThemeConfig,
    pub errors: Vec<ThemeConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ThemeConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ThemeConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ThemeConfigError {}

impl ThemeConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> ThemeConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ThemeConfigParse {
        from_env_with(|key| env::var(key).ok())
    }

    /// Build the token set: the preset for `mode`, with the override file
    /// (if any) merged on top.
    pub fn load_tokens(&self) -> ThemeResult<ThemeTokens> {
        let base = self.mode.tokens();
        let Some(path) = &self.theme_file else {
            return Ok(base);
        };
        let raw = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.clone(),
            source,
        })?;
        let overrides: Value = serde_json::from_str(&raw)?;
        let tokens = merge_overrides(&base, overrides)?;
        crate::debug!(
            path = %path.display(),
            mode = %self.mode,
            "loaded theme overrides"
        );
        Ok(tokens)
    }

    /// Short human-readable summary.
    #[must_use]
    pub fn summary_short(&self) -> String {
        let file = self
            .theme_file
            .as_ref()
            .map_or_else(|| "-".to_string(), |p| p.display().to_string());
        format!("theme: {} · colors: {} · file: {file}", self.mode, self.color_profile)
    }
}

/// Deep-merge a partial JSON token object over `base`.
///
/// Objects merge key by key; any other value replaces the base value. The
/// result must still match the full token schema.
pub fn merge_overrides(base: &ThemeTokens, overrides: Value) -> ThemeResult<ThemeTokens> {
    let mut merged = serde_json::to_value(base)?;
    merge_json(&mut merged, overrides);
    Ok(serde_json::from_value(merged)?)
}

fn merge_json(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, value) in patch_map {
                match base_map.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn from_env_with<F>(mut get: F) -> ThemeConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = ThemeConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_THEME) {
        if value.trim().eq_ignore_ascii_case("auto") {
            config.mode = if detect_dark_from_colorfgbg(get(ENV_COLORFGBG).as_deref()) {
                ThemeMode::Dark
            } else {
                ThemeMode::Light
            };
        } else {
            match ThemeMode::parse(&value) {
                Some(parsed) => config.mode = parsed,
                None => errors.push(ThemeConfigError::new(
                    "theme",
                    value,
                    "expected light|dark|auto",
                )),
            }
        }
    }

    if let Some(value) = get(ENV_THEME_FILE) {
        if value.trim().is_empty() {
            errors.push(ThemeConfigError::new(
                "theme_file",
                value,
                "expected a file path",
            ));
        } else {
            config.theme_file = Some(PathBuf::from(value));
        }
    }

    if let Some(value) = get(ENV_COLOR_PROFILE) {
        match ColorProfile::parse(&value) {
            Some(parsed) => config.color_profile = parsed,
            None => errors.push(ThemeConfigError::new(
                "color_profile",
                value,
                "expected truecolor|256|16|mono",
            )),
        }
    }

    log_diagnostics(&errors);
    ThemeConfigParse { config, errors }
}

#[cfg(feature = "tracing")]
fn log_diagnostics(errors: &[ThemeConfigError]) {
    for err in errors {
        crate::warn!(field = err.field, value = %err.value, "{}", err.message);
    }
}

#[cfg(not(feature = "tracing"))]
fn log_diagnostics(_errors: &[ThemeConfigError]) {}

/// `COLORFGBG` is "fg;bg" with ANSI indices; bg 7 or 15 means a light
/// background. Anything unparseable is treated as dark.
fn detect_dark_from_colorfgbg(colorfgbg: Option<&str>) -> bool {
    if let Some(colorfgbg) = colorfgbg
        && let Some(bg_part) = colorfgbg.split(';').next_back()
        && let Ok(bg) = bg_part.trim().parse::<u8>()
    {
        return bg != 7 && bg != 15;
    }
    true
}
