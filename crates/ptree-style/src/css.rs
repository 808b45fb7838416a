#![forbid(unsafe_code)]

//! CSS text output.
//!
//! ```
//! use ptree_style::css;
//! use ptree_style::resolver::{resolve, NodeVisualState};
//! use ptree_theme::presets;
//!
//! let result = resolve(NodeVisualState::default(), &presets::light());
//! assert_eq!(
//!     css::inline(&result.search_highlight),
//!     "background-color: #fffcdd; color: #000000; border-radius: 6px;"
//! );
//! ```

use std::fmt::Write as _;

use crate::resolver::{StyleResult, StyleSlot};
use crate::style::{PropertySet, StyleBlock};

/// Class name for `slot`: `{prefix}-{slotName}`.
#[must_use]
pub fn class_name(prefix: &str, slot: StyleSlot) -> String {
    format!("{prefix}-{}", slot.as_str())
}

/// Declaration list of the block's unconditional properties.
#[must_use]
pub fn inline(block: &StyleBlock) -> String {
    declarations(block.base(), " ")
}

/// One rule for the base properties plus one rule per pseudo-state. Empty
/// property sets produce no rule.
#[must_use]
pub fn to_rule(selector: &str, block: &StyleBlock) -> String {
    let mut out = String::new();
    push_rule(&mut out, selector, block.base());
    for (state, set) in block.states() {
        push_rule(
            &mut out,
            &format!("{selector}{}", state.selector_suffix()),
            set,
        );
    }
    out
}

/// All slots as `.{prefix}-{slotName}` rules, in canonical slot order.
#[must_use]
pub fn to_stylesheet(prefix: &str, result: &StyleResult) -> String {
    let mut out = String::new();
    for (slot, block) in result.iter() {
        out.push_str(&to_rule(&format!(".{}", class_name(prefix, slot)), block));
    }
    out
}

fn push_rule(out: &mut String, selector: &str, set: &PropertySet) {
    if set.is_empty() {
        return;
    }
    let _ = writeln!(out, "{selector} {{");
    for decl in set.iter() {
        let _ = writeln!(out, "  {}: {};", decl.property.css_name(), decl.value);
    }
    out.push_str("}\n");
}

fn declarations(set: &PropertySet, sep: &str) -> String {
    set.iter()
        .map(|decl| format!("{}: {};", decl.property.css_name(), decl.value))
        .collect::<Vec<_>>()
        .join(sep)
}
