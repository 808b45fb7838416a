#![forbid(unsafe_code)]

//! Highlight style resolution for process-tree rows.
//!
//! [`resolve`] turns a node's visual state and the host theme into the eight
//! named style slots a tree row renders with. Only the `processNode` slot
//! depends on the node: its decorative `:before` strip carries the alert
//! border, the investigated-alert tint and the depth-dependent geometry that
//! lets the strip span the full row width despite nesting. Every other slot
//! depends on the theme alone.
//!
//! # Example
//! ```
//! use ptree_style::resolver::{resolve, NodeVisualState};
//! use ptree_style::style::{ColorValue, Property, PseudoState};
//! use ptree_theme::presets;
//!
//! let theme = presets::light();
//! let result = resolve(NodeVisualState::new(2).with_alerts(true), &theme);
//! let before = result.process_node.state(PseudoState::Before).unwrap();
//! assert_eq!(before.color(Property::BackgroundColor), Some(ColorValue::None));
//! ```

use std::fmt;

use ptree_theme::{LineStyle, ThemeTokens};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::style::{
    BorderSide, ColorValue, Length, Property, PropertySet, PseudoState, StyleBlock, StyleValue,
};

/// Opacity of the investigated-alert and hover tints.
pub const HIGHLIGHT_ALPHA: f32 = 0.04;

/// Per-node input to [`resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NodeVisualState {
    /// Nesting level; 0 is a root.
    pub depth: u32,
    /// The node has at least one alert.
    pub has_alerts: bool,
    /// One of the node's alerts is the one under investigation.
    pub has_investigated_alert: bool,
}

impl NodeVisualState {
    #[must_use]
    pub const fn new(depth: u32) -> Self {
        Self {
            depth,
            has_alerts: false,
            has_investigated_alert: false,
        }
    }

    #[must_use]
    pub const fn with_alerts(mut self, has_alerts: bool) -> Self {
        self.has_alerts = has_alerts;
        self
    }

    #[must_use]
    pub const fn with_investigated_alert(mut self, investigated: bool) -> Self {
        self.has_investigated_alert = investigated;
        self
    }
}

/// State-dependent colors of the decorative strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightColors {
    pub background: ColorValue,
    pub border: ColorValue,
    pub hover: ColorValue,
}

/// Derive the strip colors. The two flags act independently.
#[must_use]
pub fn highlight_colors(state: NodeVisualState, theme: &ThemeTokens) -> HighlightColors {
    let danger = theme.colors.danger;
    let background = if state.has_investigated_alert {
        ColorValue::Color(danger.transparentize(HIGHLIGHT_ALPHA))
    } else {
        ColorValue::None
    };
    let border = if state.has_alerts {
        ColorValue::Color(danger)
    } else {
        ColorValue::Transparent
    };
    HighlightColors {
        background,
        border,
        hover: ColorValue::Color(theme.colors.primary.transparentize(HIGHLIGHT_ALPHA)),
    }
}

/// Horizontal geometry of the decorative strip at a given depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndentGeometry {
    /// `depth * tree_indent`, exact for every `u32` depth.
    pub offset_px: f64,
    /// Pulls the strip back to the row's left edge.
    pub margin_left: Length,
    /// Widens the strip by the pulled-back amount.
    pub width: Length,
}

/// Geometry for `depth`. The CSS lengths are `f32`, so past 2^24 px they
/// round to the nearest representable value while `offset_px` stays exact.
#[must_use]
pub fn indent_geometry(depth: u32, theme: &ThemeTokens) -> IndentGeometry {
    let offset_px = f64::from(depth) * f64::from(theme.tree_indent());
    let css_px = offset_px as f32;
    IndentGeometry {
        offset_px,
        margin_left: Length::Px(-css_px),
        width: Length::Calc {
            percent: 100.0,
            px: css_px,
        },
    }
}

/// Named slots of a [`StyleResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    DarkText,
    SearchHighlight,
    Children,
    ProcessNode,
    Wrapper,
    WorkingDir,
    TimeStamp,
    AlertDetails,
}

impl StyleSlot {
    pub const ALL: [StyleSlot; 8] = [
        Self::DarkText,
        Self::SearchHighlight,
        Self::Children,
        Self::ProcessNode,
        Self::Wrapper,
        Self::WorkingDir,
        Self::TimeStamp,
        Self::AlertDetails,
    ];

    /// Wire name used in class names and JSON keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DarkText => "darkText",
            Self::SearchHighlight => "searchHighlight",
            Self::Children => "children",
            Self::ProcessNode => "processNode",
            Self::Wrapper => "wrapper",
            Self::WorkingDir => "workingDir",
            Self::TimeStamp => "timeStamp",
            Self::AlertDetails => "alertDetails",
        }
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The resolved style slots for one node.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleResult {
    pub dark_text: StyleBlock,
    pub search_highlight: StyleBlock,
    pub children: StyleBlock,
    pub process_node: StyleBlock,
    pub wrapper: StyleBlock,
    pub working_dir: StyleBlock,
    pub time_stamp: StyleBlock,
    pub alert_details: StyleBlock,
}

impl StyleResult {
    #[must_use]
    pub fn get(&self, slot: StyleSlot) -> &StyleBlock {
        match slot {
            StyleSlot::DarkText => &self.dark_text,
            StyleSlot::SearchHighlight => &self.search_highlight,
            StyleSlot::Children => &self.children,
            StyleSlot::ProcessNode => &self.process_node,
            StyleSlot::Wrapper => &self.wrapper,
            StyleSlot::WorkingDir => &self.working_dir,
            StyleSlot::TimeStamp => &self.time_stamp,
            StyleSlot::AlertDetails => &self.alert_details,
        }
    }

    /// Slots in their canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StyleSlot, &StyleBlock)> {
        StyleSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}

impl Serialize for StyleResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(StyleSlot::ALL.len()))?;
        for (slot, block) in self.iter() {
            map.serialize_entry(slot.as_str(), block)?;
        }
        map.end()
    }
}

/// Compute every style slot for `state` under `theme`.
///
/// Pure and total: no error conditions, no panics, same output for the same
/// inputs.
#[must_use]
pub fn resolve(state: NodeVisualState, theme: &ThemeTokens) -> StyleResult {
    ptree_theme::trace!(
        depth = state.depth,
        has_alerts = state.has_alerts,
        has_investigated_alert = state.has_investigated_alert,
        "resolve highlight styles"
    );

    let colors = highlight_colors(state, theme);
    let geometry = indent_geometry(state.depth, theme);

    StyleResult {
        dark_text: static_block(PropertySet::new().with(Property::Color, theme.colors.text)),
        search_highlight: search_highlight(theme),
        children: children(theme),
        process_node: process_node(theme, colors, geometry),
        wrapper: wrapper(theme),
        working_dir: static_block(
            PropertySet::new().with(Property::Color, theme.colors.success_text),
        ),
        time_stamp: time_stamp(theme),
        alert_details: alert_details(theme),
    }
}

fn static_block(set: PropertySet) -> StyleBlock {
    StyleBlock::Static(set)
}

fn kw(keyword: &'static str) -> StyleValue {
    StyleValue::Keyword(keyword)
}

fn px(v: f32) -> Length {
    Length::Px(v)
}

fn search_highlight(theme: &ThemeTokens) -> StyleBlock {
    static_block(
        PropertySet::new()
            .with(Property::BackgroundColor, theme.colors.highlight)
            .with(Property::Color, theme.colors.full_shade)
            .with(Property::BorderRadius, px(theme.border.radius.medium)),
    )
}

fn children(theme: &ThemeTokens) -> StyleBlock {
    static_block(
        PropertySet::new()
            .with(Property::Position, kw("relative"))
            .with(Property::Color, theme.colors.ghost)
            .with(Property::MarginLeft, px(theme.size.base))
            .with(Property::PaddingLeft, px(theme.size.s))
            .with(Property::BorderLeft, theme.border.editable),
    )
}

fn process_node(
    theme: &ThemeTokens,
    colors: HighlightColors,
    geometry: IndentGeometry,
) -> StyleBlock {
    let lift = StyleValue::TranslateY(px(-theme.size.xs));

    let base = PropertySet::new()
        .with(Property::Display, kw("block"))
        .with(Property::Cursor, kw("pointer"))
        .with(Property::Position, kw("relative"))
        .with(
            Property::Padding,
            StyleValue::Lengths(vec![px(theme.size.xs), px(0.0)]),
        );

    let hover_before = PropertySet::new()
        .with(Property::BackgroundColor, colors.hover)
        .with(Property::Transform, lift.clone());

    let before = PropertySet::new()
        .with(Property::Position, kw("absolute"))
        .with(Property::Height, Length::Percent(100.0))
        .with(Property::PointerEvents, kw("none"))
        .with(Property::Content, StyleValue::Quoted(String::new()))
        .with(Property::MarginLeft, geometry.margin_left)
        .with(
            Property::BorderLeft,
            BorderSide {
                width: px(theme.size.xs),
                style: LineStyle::Solid,
                color: colors.border,
            },
        )
        .with(Property::BackgroundColor, colors.background)
        .with(Property::Width, geometry.width)
        .with(Property::Transform, lift);

    StyleBlock::Stateful {
        base,
        states: vec![
            (PseudoState::HoverBefore, hover_before),
            (PseudoState::Before, before),
        ],
    }
}

fn wrapper(theme: &ThemeTokens) -> StyleBlock {
    static_block(
        PropertySet::new()
            .with(Property::PaddingLeft, px(theme.size.s))
            .with(Property::Position, kw("relative"))
            .with(Property::VerticalAlign, kw("middle"))
            .with(Property::Color, theme.colors.medium_shade)
            .with(Property::WordBreak, kw("break-all"))
            .with(Property::MinHeight, px(theme.size.l))
            .with(Property::LineHeight, px(theme.size.l)),
    )
}

fn time_stamp(theme: &ThemeTokens) -> StyleBlock {
    static_block(
        PropertySet::new()
            .with(Property::Float, kw("right"))
            .with(
                Property::FontFamily,
                StyleValue::Text(theme.font.family_code.clone()),
            )
            .with(Property::FontSize, px(theme.size.m))
            .with(
                Property::FontWeight,
                StyleValue::Number(theme.font.weight_regular),
            )
            .with(Property::PaddingRight, px(theme.size.base))
            .with(Property::PaddingLeft, px(theme.size.xxl))
            .with(Property::Position, kw("relative")),
    )
}

fn alert_details(theme: &ThemeTokens) -> StyleBlock {
    static_block(
        PropertySet::new()
            .with(Property::Padding, px(theme.size.s))
            .with(Property::Border, theme.border.editable)
            .with(Property::BorderRadius, px(theme.border.radius.medium)),
    )
}
