#![forbid(unsafe_code)]

//! Terminal row styling.
//!
//! Terminals cannot blend, so translucent colors are composited over the
//! canvas first and then downgraded to the active [`ColorProfile`]. Pixel
//! geometry becomes whole cell columns.

use ptree_theme::{ColorProfile, Rgba, TermColor, ThemeMode};

use crate::resolver::StyleResult;
use crate::style::{ColorValue, Property, PseudoState};

/// Background a terminal renderer assumes when none is configured.
#[must_use]
pub const fn default_canvas(mode: ThemeMode) -> Rgba {
    match mode {
        ThemeMode::Light => Rgba::WHITE,
        ThemeMode::Dark => Rgba::rgb(29, 30, 36),
    }
}

/// Colors and indentation for one process-tree row in a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalRowStyle {
    /// Alert marker drawn in the leftmost column.
    pub gutter: Option<TermColor>,
    /// Investigated-alert row tint.
    pub row_background: Option<TermColor>,
    pub hover_background: Option<TermColor>,
    pub text: Option<TermColor>,
    /// Columns the decorative strip reaches back over.
    pub indent_columns: u16,
}

impl TerminalRowStyle {
    /// Map a resolved result onto terminal cells.
    ///
    /// `none`, `transparent` and tints that vanish after downgrade map to
    /// `None`. A non-positive `cell_width_px` yields zero indent.
    #[must_use]
    pub fn from_result(
        result: &StyleResult,
        canvas: Rgba,
        profile: ColorProfile,
        cell_width_px: f32,
    ) -> Self {
        let before = result.process_node.state(PseudoState::Before);
        let hover = result.process_node.state(PseudoState::HoverBefore);

        let gutter = before
            .and_then(|set| set.border(Property::BorderLeft))
            .and_then(|side| flatten(side.color, canvas, profile));
        let row_background = before
            .and_then(|set| set.color(Property::BackgroundColor))
            .and_then(|c| tint(c, canvas, profile));
        let hover_background = hover
            .and_then(|set| set.color(Property::BackgroundColor))
            .and_then(|c| tint(c, canvas, profile));
        let text = result
            .wrapper
            .base()
            .color(Property::Color)
            .and_then(|c| flatten(c, canvas, profile));

        let offset_px = before
            .and_then(|set| set.length(Property::MarginLeft))
            .and_then(|len| len.as_px())
            .map_or(0.0, |px| -px);

        Self {
            gutter,
            row_background,
            hover_background,
            text,
            indent_columns: columns(offset_px, cell_width_px),
        }
    }
}

fn flatten(value: ColorValue, canvas: Rgba, profile: ColorProfile) -> Option<TermColor> {
    let color = value.rgba()?;
    if color.a == 0 {
        return None;
    }
    Some(color.over(canvas).downgrade(profile))
}

/// Like [`flatten`], but a tint indistinguishable from the canvas is dropped.
fn tint(value: ColorValue, canvas: Rgba, profile: ColorProfile) -> Option<TermColor> {
    let flat = flatten(value, canvas, profile)?;
    (flat != canvas.downgrade(profile)).then_some(flat)
}

fn columns(offset_px: f32, cell_width_px: f32) -> u16 {
    if cell_width_px.is_nan() || cell_width_px <= 0.0 || !offset_px.is_finite() || offset_px <= 0.0
    {
        return 0;
    }
    let cols = (offset_px / cell_width_px).round();
    if cols >= f32::from(u16::MAX) {
        u16::MAX
    } else {
        cols as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::{NodeVisualState, resolve};
    use ptree_theme::{MonoColor, presets};

    const CELL: f32 = 8.0;

    #[test]
    fn quiet_row_has_no_gutter_or_background() {
        let theme = presets::light();
        let result = resolve(NodeVisualState::new(0), &theme);
        let row = TerminalRowStyle::from_result(
            &result,
            Rgba::WHITE,
            ColorProfile::TrueColor,
            CELL,
        );
        assert_eq!(row.gutter, None);
        assert_eq!(row.row_background, None);
        assert_eq!(row.indent_columns, 0);
        let m = theme.colors.medium_shade;
        assert_eq!(row.text, Some(TermColor::Rgb(m.r, m.g, m.b)));
    }

    #[test]
    fn alerting_row_uses_danger_gutter() {
        let theme = presets::light();
        let state = NodeVisualState::new(3)
            .with_alerts(true)
            .with_investigated_alert(true);
        let result = resolve(state, &theme);
        let row = TerminalRowStyle::from_result(
            &result,
            Rgba::WHITE,
            ColorProfile::TrueColor,
            CELL,
        );
        assert_eq!(row.gutter, Some(TermColor::Rgb(189, 39, 30)));
        // 78px / 8px = 9.75 columns
        assert_eq!(row.indent_columns, 10);
        let expected = theme.colors.danger.transparentize(0.04).over(Rgba::WHITE);
        assert_eq!(
            row.row_background,
            Some(TermColor::Rgb(expected.r, expected.g, expected.b))
        );
        assert!(row.hover_background.is_some());
    }

    #[test]
    fn faint_tints_vanish_in_mono() {
        let theme = presets::light();
        let state = NodeVisualState::new(1)
            .with_alerts(true)
            .with_investigated_alert(true);
        let result = resolve(state, &theme);
        let row = TerminalRowStyle::from_result(&result, Rgba::WHITE, ColorProfile::Mono, CELL);
        assert_eq!(row.row_background, None);
        assert_eq!(row.hover_background, None);
        assert_eq!(row.gutter, Some(TermColor::Mono(MonoColor::Black)));
    }

    #[test]
    fn downgrades_to_palette_indices() {
        let result = resolve(NodeVisualState::new(1).with_alerts(true), &presets::dark());
        let canvas = default_canvas(ThemeMode::Dark);
        let row256 = TerminalRowStyle::from_result(&result, canvas, ColorProfile::Ansi256, CELL);
        assert!(matches!(row256.gutter, Some(TermColor::Indexed256(_))));
        let row16 = TerminalRowStyle::from_result(&result, canvas, ColorProfile::Ansi16, CELL);
        assert!(matches!(row16.gutter, Some(TermColor::Indexed16(_))));
    }

    #[test]
    fn degenerate_cell_width_gives_zero_indent() {
        let result = resolve(NodeVisualState::new(4), &presets::light());
        for cell in [0.0, -1.0, f32::NAN] {
            let row =
                TerminalRowStyle::from_result(&result, Rgba::WHITE, ColorProfile::TrueColor, cell);
            assert_eq!(row.indent_columns, 0);
        }
    }

    #[test]
    fn huge_depth_saturates_columns() {
        let result = resolve(NodeVisualState::new(u32::MAX), &presets::light());
        let row = TerminalRowStyle::from_result(&result, Rgba::WHITE, ColorProfile::TrueColor, 1.0);
        assert_eq!(row.indent_columns, u16::MAX);
    }
}
