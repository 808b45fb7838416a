#![forbid(unsafe_code)]

//! Design-system tokens consumed by the style resolver.
//!
//! [`ThemeTokens`] mirrors the subset of a host design system's palette,
//! spacing scale, border and font metrics that process-tree rows read. The
//! resolver never owns this schema; it is supplied by the caller (a preset,
//! a JSON override file, or a host application).
//!
//! # Example
//! ```
//! use ptree_theme::tokens::{presets, ThemeTokens};
//!
//! let theme = presets::light();
//! assert_eq!(theme.tree_indent(), theme.size.l + theme.size.xxs);
//!
//! let faint = theme.colors.danger.transparentize(0.04);
//! assert_eq!(faint.a, 10);
//! # let _: ThemeTokens = theme;
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Semantic palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorTokens {
    /// Accent color for interactive affordances.
    pub primary: Rgba,
    /// Error/alert color.
    pub danger: Rgba,
    /// Body text.
    pub text: Rgba,
    /// Search-match background.
    pub highlight: Rgba,
    /// Maximum contrast against the page background.
    pub full_shade: Rgba,
    /// Always-light color.
    pub ghost: Rgba,
    pub medium_shade: Rgba,
    /// Text-safe success color.
    pub success_text: Rgba,
}

/// Spacing scale in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeScale {
    pub xxs: f32,
    pub xs: f32,
    pub s: f32,
    pub m: f32,
    pub base: f32,
    pub l: f32,
    pub xxl: f32,
}

/// Line style of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
}

impl LineStyle {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete border declaration (width, style, color).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderToken {
    /// Width in pixels.
    pub width: f32,
    pub style: LineStyle,
    pub color: Rgba,
}

/// Corner radii in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub medium: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderTokens {
    /// Dotted border marking editable or nested regions.
    pub editable: BorderToken,
    pub radius: RadiusTokens,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontTokens {
    /// Monospace font stack.
    pub family_code: String,
    /// Numeric weight for regular text.
    pub weight_regular: u16,
}

/// Theme tokens supplied by the host design system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    pub colors: ColorTokens,
    pub size: SizeScale,
    pub border: BorderTokens,
    pub font: FontTokens,
}

impl ThemeTokens {
    /// Horizontal indent per nesting level, in pixels.
    #[must_use]
    pub fn tree_indent(&self) -> f32 {
        self.size.l + self.size.xxs
    }
}

impl Default for ThemeTokens {
    fn default() -> Self {
        presets::dark()
    }
}

/// Light or dark base palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Case-insensitive `light` or `dark`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The built-in token set for this mode.
    #[must_use]
    pub fn tokens(self) -> ThemeTokens {
        match self {
            Self::Light => presets::light(),
            Self::Dark => presets::dark(),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in token sets.
pub mod presets {
    use super::*;

    const CODE_FONT: &str = "'Roboto Mono', Menlo, Courier, monospace";

    const SIZE: SizeScale = SizeScale {
        xxs: 2.0,
        xs: 4.0,
        s: 8.0,
        m: 12.0,
        base: 16.0,
        l: 24.0,
        xxl: 40.0,
    };

    const RADIUS: RadiusTokens = RadiusTokens { medium: 6.0 };

    /// Look up a preset by name (`light` or `dark`).
    #[must_use]
    pub fn by_name(name: &str) -> Option<ThemeTokens> {
        ThemeMode::parse(name).map(ThemeMode::tokens)
    }

    /// Light palette.
    #[must_use]
    pub fn light() -> ThemeTokens {
        let editable = Rgba::rgb(211, 218, 230);
        ThemeTokens {
            colors: ColorTokens {
                primary: Rgba::rgb(0, 119, 204),
                danger: Rgba::rgb(189, 39, 30),
                text: Rgba::rgb(52, 55, 65),
                highlight: Rgba::rgb(255, 252, 221),
                full_shade: Rgba::rgb(0, 0, 0),
                ghost: Rgba::rgb(255, 255, 255),
                medium_shade: Rgba::rgb(152, 162, 179),
                success_text: Rgba::rgb(1, 125, 115),
            },
            size: SIZE,
            border: BorderTokens {
                editable: BorderToken {
                    width: 2.0,
                    style: LineStyle::Dotted,
                    color: editable,
                },
                radius: RADIUS,
            },
            font: FontTokens {
                family_code: CODE_FONT.to_string(),
                weight_regular: 400,
            },
        }
    }

    /// Dark palette.
    #[must_use]
    pub fn dark() -> ThemeTokens {
        let editable = Rgba::rgb(52, 55, 65);
        ThemeTokens {
            colors: ColorTokens {
                primary: Rgba::rgb(54, 162, 239),
                danger: Rgba::rgb(248, 107, 99),
                text: Rgba::rgb(223, 229, 239),
                highlight: Rgba::rgb(46, 45, 37),
                full_shade: Rgba::rgb(255, 255, 255),
                ghost: Rgba::rgb(255, 255, 255),
                medium_shade: Rgba::rgb(83, 89, 102),
                success_text: Rgba::rgb(125, 226, 209),
            },
            size: SIZE,
            border: BorderTokens {
                editable: BorderToken {
                    width: 2.0,
                    style: LineStyle::Dotted,
                    color: editable,
                },
                radius: RADIUS,
            },
            font: FontTokens {
                family_code: CODE_FONT.to_string(),
                weight_regular: 400,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tree_indent_is_l_plus_xxs() {
        assert_eq!(presets::light().tree_indent(), 26.0);
        assert_eq!(presets::dark().tree_indent(), 26.0);
    }

    #[test]
    fn presets_differ_in_palette_only() {
        let light = presets::light();
        let dark = presets::dark();
        assert_ne!(light.colors, dark.colors);
        assert_eq!(light.size, dark.size);
        assert_eq!(light.font, dark.font);
    }

    #[test]
    fn light_background_tokens_are_light() {
        let light = presets::light();
        assert!(light.colors.highlight.luminance_u8() > 200);
        let dark = presets::dark();
        assert!(dark.colors.highlight.luminance_u8() < 60);
    }

    #[test]
    fn by_name_lookup() {
        assert_eq!(presets::by_name("LIGHT"), Some(presets::light()));
        assert_eq!(presets::by_name("dark"), Some(presets::dark()));
        assert_eq!(presets::by_name("sepia"), None);
    }

    #[test]
    fn default_is_dark() {
        assert_eq!(ThemeTokens::default(), presets::dark());
    }

    #[test]
    fn tokens_serialize_colors_as_hex() {
        let json = serde_json::to_value(presets::light()).unwrap();
        assert_eq!(json["colors"]["danger"], "#bd271e");
        assert_eq!(json["border"]["editable"]["style"], "dotted");
        let back: ThemeTokens = serde_json::from_value(json).unwrap();
        assert_eq!(back, presets::light());
    }
}
