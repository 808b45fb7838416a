//! Property-based invariant tests for color math.
//!
//! 1. Hex output parses back to the same color.
//! 2. transparentize keeps the hue and sets alpha.
//! 3. Compositing over an opaque canvas yields an opaque color between the two.
//! 4. Palette downgrades stay in range.
//! 5. Token overrides only touch what they name.

use ptree_theme::color::{index256_to_rgba, nearest_16, nearest_256};
use ptree_theme::config::merge_overrides;
use ptree_theme::{ColorProfile, Rgba, TermColor, presets};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rgba_strategy() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>())
        .prop_map(|(r, g, b, a)| Rgba::rgba(r, g, b, a))
}

fn opaque_strategy() -> impl Strategy<Value = Rgba> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgba::rgb(r, g, b))
}

fn between(v: u8, a: u8, b: u8) -> bool {
    v >= a.min(b) && v <= a.max(b)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Hex round trip
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_parses_back(color in rgba_strategy()) {
        prop_assert_eq!(Rgba::parse_hex(&color.to_hex()).unwrap(), color);
    }

    #[test]
    fn parse_hex_never_panics(input in "\\PC{0,12}") {
        let _ = Rgba::parse_hex(&input);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. transparentize
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn transparentize_sets_absolute_alpha(color in rgba_strategy(), alpha in 0.0f32..=1.0) {
        let out = color.transparentize(alpha);
        prop_assert_eq!((out.r, out.g, out.b), (color.r, color.g, color.b));
        prop_assert_eq!(out.a, (alpha * 255.0).round() as u8);
    }

    #[test]
    fn transparentize_clamps(color in rgba_strategy(), alpha in prop_oneof![-10.0f32..0.0, 1.0f32..10.0]) {
        let out = color.transparentize(alpha);
        prop_assert!(out.a == 0 || out.a == 255);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Compositing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn over_opaque_canvas_is_opaque_and_bounded(src in rgba_strategy(), canvas in opaque_strategy()) {
        let out = src.over(canvas);
        prop_assert!(out.is_opaque());
        prop_assert!(between(out.r, src.r, canvas.r));
        prop_assert!(between(out.g, src.g, canvas.g));
        prop_assert!(between(out.b, src.b, canvas.b));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Downgrade ranges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn downgrade_stays_in_palette(color in opaque_strategy()) {
        prop_assert!(nearest_256(color) >= 16);
        prop_assert!(nearest_16(color) < 16);
        match color.downgrade(ColorProfile::Ansi16) {
            TermColor::Indexed16(i) => prop_assert!(i < 16),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }

    #[test]
    fn cube_downgrade_is_close(color in opaque_strategy()) {
        let back = index256_to_rgba(nearest_256(color));
        let dist = |a: u8, b: u8| (i16::from(a) - i16::from(b)).unsigned_abs();
        // Widest cube gap is 0..95, so no channel is off by more than half of it.
        prop_assert!(dist(color.r, back.r) <= 48);
        prop_assert!(dist(color.g, back.g) <= 48);
        prop_assert!(dist(color.b, back.b) <= 48);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Token overrides
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn override_touches_only_named_token(color in opaque_strategy(), l in 1.0f32..64.0) {
        let base = presets::dark();
        let merged = merge_overrides(
            &base,
            serde_json::json!({ "colors": { "primary": color.to_hex() }, "size": { "l": l } }),
        )
        .unwrap();
        prop_assert_eq!(merged.colors.primary, color);
        prop_assert_eq!(merged.colors.danger, base.colors.danger);
        prop_assert_eq!(merged.size.l, l);
        prop_assert_eq!(merged.tree_indent(), l + base.size.xxs);
        prop_assert_eq!(&merged.font, &base.font);
    }
}
