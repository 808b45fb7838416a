#![forbid(unsafe_code)]

//! RGBA colors: CSS hex parsing, alpha math, and terminal downgrade.
//!
//! Theme tokens are stored as straight-alpha [`Rgba`]. Renderers that cannot
//! express translucency (terminals) flatten with [`Rgba::over`] first and then
//! map the result to a [`ColorProfile`] with [`Rgba::downgrade`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Straight-alpha RGBA color (alpha 255 = opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
    /// Alpha channel (0 = fully transparent).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Opacity in `[0.0, 1.0]`.
    #[must_use]
    pub fn opacity(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Same hue with opacity set to `alpha` (clamped to `[0.0, 1.0]`).
    ///
    /// `transparentize(0.04)` on an opaque color yields the faint tint used
    /// for row highlights.
    #[must_use]
    pub fn transparentize(self, alpha: f32) -> Self {
        Self {
            a: unit_to_u8(alpha),
            ..self
        }
    }

    /// Scale the existing alpha by `opacity` (clamped to `[0.0, 1.0]`).
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let scaled = (f32::from(self.a) * clamp_unit(opacity)).round();
        Self {
            a: scaled.clamp(0.0, 255.0) as u8,
            ..self
        }
    }

    /// Porter-Duff SourceOver: `self` over `dst`.
    ///
    /// Computed in exact rational form and rounded once.
    #[must_use]
    pub fn over(self, dst: Self) -> Self {
        let s_a = u64::from(self.a);
        if s_a == 255 {
            return self;
        }
        if s_a == 0 {
            return dst;
        }

        let d_a = u64::from(dst.a);
        let inv_s_a = 255 - s_a;
        let numer_a = 255 * s_a + d_a * inv_s_a;
        if numer_a == 0 {
            return Self::TRANSPARENT;
        }

        let channel = |src: u8, dst_c: u8| {
            div_round_u8(
                u64::from(src) * s_a * 255 + u64::from(dst_c) * d_a * inv_s_a,
                numer_a,
            )
        };

        Self::rgba(
            channel(self.r, dst.r),
            channel(self.g, dst.g),
            channel(self.b, dst.b),
            div_round_u8(numer_a, 255),
        )
    }

    /// Perceived luminance (BT.709) as a `u8`, ignoring alpha.
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        let luma = 2126 * u32::from(self.r) + 7152 * u32::from(self.g) + 722 * u32::from(self.b);
        ((luma + 5000) / 10_000) as u8
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(input, "expected hex digits"));
        }

        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::new(input, "bad hex pair"))
        };
        match digits.len() {
            3 => {
                let nibble = |i: usize| byte(&digits[i..=i]).map(|v| v * 17);
                Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Ok(Self::rgb(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
            )),
            8 => Ok(Self::rgba(
                byte(&digits[0..2])?,
                byte(&digits[2..4])?,
                byte(&digits[4..6])?,
                byte(&digits[6..8])?,
            )),
            _ => Err(ColorParseError::new(input, "expected 3, 6 or 8 hex digits")),
        }
    }

    /// Lossless hex form: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// CSS form: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
    ///
    /// Alpha is printed with at most two decimals.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            return self.to_hex();
        }
        let alpha = (self.opacity() * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Map to the closest color expressible under `profile`. Alpha is ignored.
    #[must_use]
    pub fn downgrade(self, profile: ColorProfile) -> TermColor {
        match profile {
            ColorProfile::TrueColor => TermColor::Rgb(self.r, self.g, self.b),
            ColorProfile::Ansi256 => TermColor::Indexed256(nearest_256(self)),
            ColorProfile::Ansi16 => TermColor::Indexed16(nearest_16(self)),
            ColorProfile::Mono => {
                if self.luminance_u8() >= 128 {
                    TermColor::Mono(MonoColor::White)
                } else {
                    TermColor::Mono(MonoColor::Black)
                }
            }
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// A hex color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl ColorParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorParseError {}

/// Terminal color profile used for downgrade decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorProfile {
    /// No color output.
    Mono,
    /// Standard 16 ANSI colors.
    Ansi16,
    /// Extended 256-color palette.
    Ansi256,
    /// Full 24-bit RGB color.
    #[default]
    TrueColor,
}

impl ColorProfile {
    /// Accepts `truecolor`, `256`, `16`, `mono` and their aliases.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" | "rgb" => Some(Self::TrueColor),
            "256" | "ansi256" => Some(Self::Ansi256),
            "16" | "ansi16" => Some(Self::Ansi16),
            "mono" | "none" => Some(Self::Mono),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mono => "mono",
            Self::Ansi16 => "16",
            Self::Ansi256 => "256",
            Self::TrueColor => "truecolor",
        }
    }
}

impl fmt::Display for ColorProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monochrome output selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonoColor {
    Black,
    White,
}

/// A color at the fidelity a terminal profile can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermColor {
    /// 24-bit color.
    Rgb(u8, u8, u8),
    /// 256-color palette index.
    Indexed256(u8),
    /// Standard ANSI index (0–15).
    Indexed16(u8),
    /// Black or white.
    Mono(MonoColor),
}

const ANSI16_PALETTE: [Rgba; 16] = [
    Rgba::rgb(0, 0, 0),       // Black
    Rgba::rgb(205, 0, 0),     // Red
    Rgba::rgb(0, 205, 0),     // Green
    Rgba::rgb(205, 205, 0),   // Yellow
    Rgba::rgb(0, 0, 238),     // Blue
    Rgba::rgb(205, 0, 205),   // Magenta
    Rgba::rgb(0, 205, 205),   // Cyan
    Rgba::rgb(229, 229, 229), // White
    Rgba::rgb(127, 127, 127), // Bright Black
    Rgba::rgb(255, 0, 0),     // Bright Red
    Rgba::rgb(0, 255, 0),     // Bright Green
    Rgba::rgb(255, 255, 0),   // Bright Yellow
    Rgba::rgb(92, 92, 255),   // Bright Blue
    Rgba::rgb(255, 0, 255),   // Bright Magenta
    Rgba::rgb(0, 255, 255),   // Bright Cyan
    Rgba::rgb(255, 255, 255), // Bright White
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Nearest xterm 256-color index (grayscale ramp for neutral colors).
#[must_use]
pub fn nearest_256(color: Rgba) -> u8 {
    let Rgba { r, g, b, .. } = color;
    if r == g && g == b {
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            _ => 232 + ((r - 8) / 10).min(23),
        };
    }
    16 + 36 * cube_index(r) + 6 * cube_index(g) + cube_index(b)
}

/// Cube levels are not evenly spaced; bins split at the midpoints
/// (48, 115, 155, 195, 235).
fn cube_index(v: u8) -> u8 {
    match v {
        0..=47 => 0,
        48..=114 => 1,
        _ => (v - 35) / 40,
    }
}

/// RGB value of an xterm 256-color index.
#[must_use]
pub fn index256_to_rgba(index: u8) -> Rgba {
    match index {
        0..=15 => ANSI16_PALETTE[usize::from(index)],
        232..=255 => {
            let gray = 8 + 10 * (index - 232);
            Rgba::rgb(gray, gray, gray)
        }
        _ => {
            let idx = index - 16;
            Rgba::rgb(
                CUBE_LEVELS[usize::from(idx / 36)],
                CUBE_LEVELS[usize::from((idx / 6) % 6)],
                CUBE_LEVELS[usize::from(idx % 6)],
            )
        }
    }
}

/// Nearest standard ANSI index by luma-weighted distance.
#[must_use]
pub fn nearest_16(color: Rgba) -> u8 {
    let mut best = 0u8;
    let mut best_dist = u64::MAX;
    for (idx, candidate) in ANSI16_PALETTE.iter().enumerate() {
        let dist = weighted_distance(color, *candidate);
        if dist < best_dist {
            best = idx as u8;
            best_dist = dist;
        }
    }
    best
}

fn weighted_distance(a: Rgba, b: Rgba) -> u64 {
    let sq = |x: u8, y: u8| {
        let d = i64::from(x) - i64::from(y);
        (d * d) as u64
    };
    2126 * sq(a.r, b.r) + 7152 * sq(a.g, b.g) + 722 * sq(a.b, b.b)
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn unit_to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0).round() as u8
}

const fn div_round_u8(numer: u64, denom: u64) -> u8 {
    let v = (numer + (denom / 2)) / denom;
    if v > 255 { 255 } else { v as u8 }
}
