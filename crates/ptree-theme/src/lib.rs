#![forbid(unsafe_code)]

//! Theme tokens and color math for process-tree styling.
//!
//! - [`tokens`]: [`ThemeTokens`] plus the built-in light/dark presets.
//! - [`color`]: [`Rgba`] with transparentize/compositing and terminal downgrade.
//! - [`config`]: env-overridable [`ThemeConfig`] with JSON token overrides.
//! - [`logging`]: `tracing` re-exports or no-op macros.

pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod tokens;

pub use color::{ColorParseError, ColorProfile, MonoColor, Rgba, TermColor};
pub use config::{ThemeConfig, ThemeConfigError, ThemeConfigParse};
pub use error::{ThemeError, ThemeResult};
pub use tokens::{
    BorderToken, BorderTokens, ColorTokens, FontTokens, LineStyle, RadiusTokens, SizeScale,
    ThemeMode, ThemeTokens, presets,
};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
