#![forbid(unsafe_code)]

//! Highlight styles for process-tree rows.
//!
//! Given a node's [`NodeVisualState`] (depth, alert flags) and the host
//! [`ThemeTokens`](ptree_theme::ThemeTokens), [`resolve`] yields a
//! [`StyleResult`] of eight named style slots. The result is a typed style
//! model that can be rendered as CSS ([`css`]), serialized as JSON, or mapped
//! onto terminal cells ([`terminal`]).
//!
//! ```
//! use ptree_style::{resolve, NodeVisualState, StyleMemo};
//! use ptree_theme::presets;
//!
//! let theme = presets::dark();
//! let mut memo = StyleMemo::new();
//! let state = NodeVisualState::new(1).with_alerts(true);
//! let first = memo.get(state, &theme).clone();
//! assert_eq!(&first, memo.get(state, &theme));
//! assert_eq!(memo.stats().hits, 1);
//! assert_eq!(first, resolve(state, &theme));
//! ```

pub mod css;
pub mod memo;
pub mod resolver;
pub mod style;
pub mod terminal;

pub use memo::{MemoStats, StyleMemo};
pub use resolver::{
    HIGHLIGHT_ALPHA, HighlightColors, IndentGeometry, NodeVisualState, StyleResult, StyleSlot,
    highlight_colors, indent_geometry, resolve,
};
pub use style::{
    BorderSide, ColorValue, Declaration, Length, Property, PropertySet, PseudoState, StyleBlock,
    StyleValue,
};
pub use terminal::{TerminalRowStyle, default_canvas};
