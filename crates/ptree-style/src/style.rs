#![forbid(unsafe_code)]

//! Renderer-agnostic style model.
//!
//! A [`StyleBlock`] is either a plain [`PropertySet`] or a base set plus
//! per-pseudo-state sub-sets. Values are typed ([`Length`], [`ColorValue`],
//! [`BorderSide`], ...) so a CSS emitter, a JSON consumer or a terminal
//! renderer can each interpret them without re-parsing strings.
//!
//! # Example
//! ```
//! use ptree_style::style::{ColorValue, Length, Property, PropertySet, StyleBlock};
//!
//! let set = PropertySet::new()
//!     .with(Property::PaddingLeft, Length::Px(8.0))
//!     .with(Property::BackgroundColor, ColorValue::None);
//! let block = StyleBlock::Static(set);
//! assert_eq!(block.base().len(), 2);
//! assert_eq!(block.base().length(Property::PaddingLeft), Some(Length::Px(8.0)));
//! ```

use std::fmt;

use ptree_theme::{BorderToken, LineStyle, Rgba};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Format a number for CSS: no trailing `.0`, never `-0`.
pub(crate) fn fmt_num(v: f32) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    format!("{v}")
}

/// A CSS length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
    /// `calc(percent% + px px)`.
    Calc { percent: f32, px: f32 },
}

impl Length {
    /// Pixel value, if this is a plain pixel length.
    #[must_use]
    pub fn as_px(self) -> Option<f32> {
        match self {
            Self::Px(px) => Some(px),
            _ => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Px(v) => write!(f, "{}px", fmt_num(v)),
            Self::Percent(v) => write!(f, "{}%", fmt_num(v)),
            Self::Calc { percent, px } if px < 0.0 => {
                write!(f, "calc({}% - {}px)", fmt_num(percent), fmt_num(-px))
            }
            Self::Calc { percent, px } => {
                write!(f, "calc({}% + {}px)", fmt_num(percent), fmt_num(px))
            }
        }
    }
}

/// A color slot value. `None` and `Transparent` are distinct keywords: the
/// first means "paint nothing", the second paints a fully clear color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorValue {
    None,
    Transparent,
    Color(Rgba),
}

impl ColorValue {
    /// The concrete color, if any.
    #[must_use]
    pub const fn rgba(self) -> Option<Rgba> {
        match self {
            Self::Color(c) => Some(c),
            Self::None | Self::Transparent => None,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Transparent => f.write_str("transparent"),
            Self::Color(c) => f.write_str(&c.to_css()),
        }
    }
}

impl From<Rgba> for ColorValue {
    fn from(color: Rgba) -> Self {
        Self::Color(color)
    }
}

/// One side of a border: `width style color`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSide {
    pub width: Length,
    pub style: LineStyle,
    pub color: ColorValue,
}

impl From<BorderToken> for BorderSide {
    fn from(token: BorderToken) -> Self {
        Self {
            width: Length::Px(token.width),
            style: token.style,
            color: ColorValue::Color(token.color),
        }
    }
}

impl fmt::Display for BorderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.width, self.style, self.color)
    }
}

/// Style properties used by process-tree rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Display,
    Cursor,
    Position,
    Float,
    VerticalAlign,
    WordBreak,
    PointerEvents,
    Content,
    Color,
    BackgroundColor,
    Border,
    BorderLeft,
    BorderRadius,
    Padding,
    PaddingLeft,
    PaddingRight,
    MarginLeft,
    Width,
    Height,
    MinHeight,
    LineHeight,
    Transform,
    FontFamily,
    FontSize,
    FontWeight,
}

impl Property {
    /// Hyphenated CSS property name.
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Cursor => "cursor",
            Self::Position => "position",
            Self::Float => "float",
            Self::VerticalAlign => "vertical-align",
            Self::WordBreak => "word-break",
            Self::PointerEvents => "pointer-events",
            Self::Content => "content",
            Self::Color => "color",
            Self::BackgroundColor => "background-color",
            Self::Border => "border",
            Self::BorderLeft => "border-left",
            Self::BorderRadius => "border-radius",
            Self::Padding => "padding",
            Self::PaddingLeft => "padding-left",
            Self::PaddingRight => "padding-right",
            Self::MarginLeft => "margin-left",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinHeight => "min-height",
            Self::LineHeight => "line-height",
            Self::Transform => "transform",
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
        }
    }

    /// camelCase name used by style-object renderers.
    #[must_use]
    pub const fn object_key(self) -> &'static str {
        match self {
            Self::Display => "display",
            Self::Cursor => "cursor",
            Self::Position => "position",
            Self::Float => "float",
            Self::VerticalAlign => "verticalAlign",
            Self::WordBreak => "wordBreak",
            Self::PointerEvents => "pointerEvents",
            Self::Content => "content",
            Self::Color => "color",
            Self::BackgroundColor => "backgroundColor",
            Self::Border => "border",
            Self::BorderLeft => "borderLeft",
            Self::BorderRadius => "borderRadius",
            Self::Padding => "padding",
            Self::PaddingLeft => "paddingLeft",
            Self::PaddingRight => "paddingRight",
            Self::MarginLeft => "marginLeft",
            Self::Width => "width",
            Self::Height => "height",
            Self::MinHeight => "minHeight",
            Self::LineHeight => "lineHeight",
            Self::Transform => "transform",
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
        }
    }
}

/// A typed style value.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Bare CSS keyword (`block`, `pointer`, `relative`, ...).
    Keyword(&'static str),
    Color(ColorValue),
    Length(Length),
    /// Space-separated shorthand, e.g. `padding: 4px 0px`.
    Lengths(Vec<Length>),
    Border(BorderSide),
    /// `translateY(..)` transform.
    TranslateY(Length),
    /// Emitted in single quotes (`content: ''`).
    Quoted(String),
    /// Emitted verbatim (font stacks).
    Text(String),
    Number(u16),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(k) => f.write_str(k),
            Self::Color(c) => c.fmt(f),
            Self::Length(l) => l.fmt(f),
            Self::Lengths(ls) => {
                for (i, l) in ls.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    l.fmt(f)?;
                }
                Ok(())
            }
            Self::Border(b) => b.fmt(f),
            Self::TranslateY(l) => write!(f, "translateY({l})"),
            Self::Quoted(s) => write!(f, "'{s}'"),
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<ColorValue> for StyleValue {
    fn from(v: ColorValue) -> Self {
        Self::Color(v)
    }
}

impl From<Rgba> for StyleValue {
    fn from(v: Rgba) -> Self {
        Self::Color(ColorValue::Color(v))
    }
}

impl From<Length> for StyleValue {
    fn from(v: Length) -> Self {
        Self::Length(v)
    }
}

impl From<BorderSide> for StyleValue {
    fn from(v: BorderSide) -> Self {
        Self::Border(v)
    }
}

impl From<BorderToken> for StyleValue {
    fn from(v: BorderToken) -> Self {
        Self::Border(v.into())
    }
}

/// A single `property: value` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: Property,
    pub value: StyleValue,
}

/// Ordered declarations. Setting a property twice replaces it in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertySet {
    decls: Vec<Declaration>,
}

impl PropertySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PropertySet::set`].
    #[must_use]
    pub fn with(mut self, property: Property, value: impl Into<StyleValue>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: Property, value: impl Into<StyleValue>) {
        let value = value.into();
        match self.decls.iter_mut().find(|d| d.property == property) {
            Some(existing) => existing.value = value,
            None => self.decls.push(Declaration { property, value }),
        }
    }

    #[must_use]
    pub fn get(&self, property: Property) -> Option<&StyleValue> {
        self.decls
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }

    /// Color value of `property`, if it holds a color.
    #[must_use]
    pub fn color(&self, property: Property) -> Option<ColorValue> {
        match self.get(property)? {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Length value of `property`, if it holds a single length.
    #[must_use]
    pub fn length(&self, property: Property) -> Option<Length> {
        match self.get(property)? {
            StyleValue::Length(l) => Some(*l),
            _ => None,
        }
    }

    /// Border value of `property`, if it holds a border.
    #[must_use]
    pub fn border(&self, property: Property) -> Option<BorderSide> {
        match self.get(property)? {
            StyleValue::Border(b) => Some(*b),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.decls.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl Serialize for PropertySet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.decls.len()))?;
        for decl in &self.decls {
            map.serialize_entry(decl.property.object_key(), &decl.value.to_string())?;
        }
        map.end()
    }
}

/// Pseudo-state a conditional sub-block applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoState {
    /// Decorative element drawn before the content.
    Before,
    /// The decorative element while the row is hovered.
    HoverBefore,
}

impl PseudoState {
    /// Suffix appended to a CSS selector.
    #[must_use]
    pub const fn selector_suffix(self) -> &'static str {
        match self {
            Self::Before => ":before",
            Self::HoverBefore => ":hover:before",
        }
    }

    /// Nested key used by style-object renderers.
    #[must_use]
    pub const fn object_key(self) -> &'static str {
        match self {
            Self::Before => "&:before",
            Self::HoverBefore => "&:hover:before",
        }
    }
}

/// A style slot's contents.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleBlock {
    /// Properties that apply unconditionally.
    Static(PropertySet),
    /// Base properties plus per-state overrides.
    Stateful {
        base: PropertySet,
        states: Vec<(PseudoState, PropertySet)>,
    },
}

impl StyleBlock {
    /// Unconditional properties.
    #[must_use]
    pub fn base(&self) -> &PropertySet {
        match self {
            Self::Static(set) => set,
            Self::Stateful { base, .. } => base,
        }
    }

    /// Sub-block for `state`, if present.
    #[must_use]
    pub fn state(&self, state: PseudoState) -> Option<&PropertySet> {
        match self {
            Self::Static(_) => None,
            Self::Stateful { states, .. } => states
                .iter()
                .find(|(s, _)| *s == state)
                .map(|(_, set)| set),
        }
    }

    /// All conditional sub-blocks, in declaration order.
    pub fn states(&self) -> impl Iterator<Item = (PseudoState, &PropertySet)> {
        let states: &[(PseudoState, PropertySet)] = match self {
            Self::Static(_) => &[],
            Self::Stateful { states, .. } => states,
        };
        states.iter().map(|(s, set)| (*s, set))
    }

    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static(_))
    }
}

impl Serialize for StyleBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let base = self.base();
        let mut map = serializer.serialize_map(None)?;
        for decl in base.iter() {
            map.serialize_entry(decl.property.object_key(), &decl.value.to_string())?;
        }
        for (state, set) in self.states() {
            map.serialize_entry(state.object_key(), set)?;
        }
        map.end()
    }
}
