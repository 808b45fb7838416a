//! Property-based invariant tests for highlight style resolution.
//!
//! 1. Resolution is deterministic.
//! 2. The alert flag alone decides the border color.
//! 3. The investigated flag alone decides the background color.
//! 4. The hover tint does not depend on the node.
//! 5. The strip offset is linear in depth.
//! 6. Slots other than processNode do not depend on the node.
//! 7. The memo agrees with direct resolution.
//! 8. No panics for any depth.

use ptree_style::{
    ColorValue, Length, NodeVisualState, Property, PseudoState, StyleMemo, StyleSlot,
    highlight_colors, indent_geometry, resolve,
};
use ptree_theme::{ThemeTokens, presets};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn state_strategy() -> impl Strategy<Value = NodeVisualState> {
    (any::<u32>(), any::<bool>(), any::<bool>()).prop_map(|(depth, alerts, investigated)| {
        NodeVisualState::new(depth)
            .with_alerts(alerts)
            .with_investigated_alert(investigated)
    })
}

fn shallow_state_strategy() -> impl Strategy<Value = NodeVisualState> {
    (0u32..=64, any::<bool>(), any::<bool>()).prop_map(|(depth, alerts, investigated)| {
        NodeVisualState::new(depth)
            .with_alerts(alerts)
            .with_investigated_alert(investigated)
    })
}

fn theme_strategy() -> impl Strategy<Value = ThemeTokens> {
    prop_oneof![Just(presets::light()), Just(presets::dark())]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn resolve_is_deterministic(state in state_strategy(), theme in theme_strategy()) {
        prop_assert_eq!(resolve(state, &theme), resolve(state, &theme));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2–3. Flag independence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn border_follows_alert_flag_only(state in shallow_state_strategy(), theme in theme_strategy()) {
        let colors = highlight_colors(state, &theme);
        let expected = if state.has_alerts {
            ColorValue::Color(theme.colors.danger)
        } else {
            ColorValue::Transparent
        };
        prop_assert_eq!(colors.border, expected);

        let flipped = state.with_investigated_alert(!state.has_investigated_alert);
        prop_assert_eq!(highlight_colors(flipped, &theme).border, colors.border);
    }

    #[test]
    fn background_follows_investigated_flag_only(
        state in shallow_state_strategy(),
        theme in theme_strategy(),
    ) {
        let colors = highlight_colors(state, &theme);
        let expected = if state.has_investigated_alert {
            ColorValue::Color(theme.colors.danger.transparentize(0.04))
        } else {
            ColorValue::None
        };
        prop_assert_eq!(colors.background, expected);

        let flipped = state.with_alerts(!state.has_alerts);
        prop_assert_eq!(highlight_colors(flipped, &theme).background, colors.background);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Hover is constant
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hover_is_node_independent(
        a in state_strategy(),
        b in state_strategy(),
        theme in theme_strategy(),
    ) {
        let hover_a = resolve(a, &theme);
        let hover_b = resolve(b, &theme);
        prop_assert_eq!(
            hover_a.process_node.state(PseudoState::HoverBefore),
            hover_b.process_node.state(PseudoState::HoverBefore)
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Linear offset
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offset_is_linear_in_depth(depth in any::<u32>(), theme in theme_strategy()) {
        // Both presets use a 26px indent, so the exact product is an integer.
        prop_assert_eq!(theme.tree_indent(), 26.0);
        let geometry = indent_geometry(depth, &theme);
        prop_assert_eq!(geometry.offset_px, (u64::from(depth) * 26) as f64);
        prop_assert_eq!(geometry.margin_left, Length::Px(-(geometry.offset_px as f32)));

        let result = resolve(NodeVisualState::new(depth), &theme);
        let before = result.process_node.state(PseudoState::Before).unwrap();
        prop_assert_eq!(before.length(Property::MarginLeft), Some(geometry.margin_left));
        prop_assert_eq!(before.length(Property::Width), Some(geometry.width));
    }

    #[test]
    fn offset_is_additive(a in 0u32..=u32::MAX / 2, b in 0u32..=u32::MAX / 2, theme in theme_strategy()) {
        let sum = indent_geometry(a + b, &theme).offset_px;
        let parts = indent_geometry(a, &theme).offset_px + indent_geometry(b, &theme).offset_px;
        prop_assert_eq!(sum, parts);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Static slots are state independent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn static_slots_ignore_node_state(
        a in state_strategy(),
        b in state_strategy(),
        theme in theme_strategy(),
    ) {
        let ra = resolve(a, &theme);
        let rb = resolve(b, &theme);
        for slot in StyleSlot::ALL {
            if slot == StyleSlot::ProcessNode {
                prop_assert_eq!(ra.get(slot).base(), rb.get(slot).base());
            } else {
                prop_assert_eq!(ra.get(slot), rb.get(slot), "slot {} differs", slot);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Memo agrees with resolve
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn memo_matches_direct_resolution(
        states in proptest::collection::vec(shallow_state_strategy(), 1..20),
        theme in theme_strategy(),
    ) {
        let mut memo = StyleMemo::new();
        let mut misses = 0u64;
        let mut last = None;
        for state in &states {
            if last != Some(*state) {
                misses += 1;
            }
            last = Some(*state);
            prop_assert_eq!(memo.get(*state, &theme), &resolve(*state, &theme));
        }
        let stats = memo.stats();
        prop_assert_eq!(stats.misses, misses);
        prop_assert_eq!(stats.hits + stats.misses, states.len() as u64);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. No panics on extreme depths
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn extreme_depths_stay_finite(depth in (u32::MAX - 1024)..=u32::MAX, theme in theme_strategy()) {
        let geometry = indent_geometry(depth, &theme);
        prop_assert!(geometry.offset_px.is_finite());
        let _ = ptree_style::css::to_stylesheet("p", &resolve(NodeVisualState::new(depth), &theme));
    }
}
