#![forbid(unsafe_code)]

//! Single-entry memo cell for [`resolve`].
//!
//! A row re-renders far more often than its visual state or the theme
//! changes. [`StyleMemo`] keeps the last `(state, theme)` key and its result
//! and only recomputes when the key differs structurally.

use ptree_theme::ThemeTokens;

use crate::resolver::{NodeVisualState, StyleResult, resolve};

/// Hit/miss counters for a [`StyleMemo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    /// Whether a result is currently held.
    pub cached: bool,
}

#[derive(Debug)]
struct MemoEntry {
    state: NodeVisualState,
    theme: ThemeTokens,
    result: StyleResult,
}

impl MemoEntry {
    fn compute(state: NodeVisualState, theme: &ThemeTokens) -> Self {
        Self {
            state,
            theme: theme.clone(),
            result: resolve(state, theme),
        }
    }

    fn matches(&self, state: NodeVisualState, theme: &ThemeTokens) -> bool {
        self.state == state && self.theme == *theme
    }
}

/// Equality-checked memo of the last resolved style. Owned by one rendering
/// context; not meant to be shared across threads.
#[derive(Debug, Default)]
pub struct StyleMemo {
    entry: Option<MemoEntry>,
    hits: u64,
    misses: u64,
}

impl StyleMemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Styles for `state` under `theme`, recomputed only when either changed.
    pub fn get(&mut self, state: NodeVisualState, theme: &ThemeTokens) -> &StyleResult {
        let fresh = self
            .entry
            .as_ref()
            .is_some_and(|entry| entry.matches(state, theme));
        if fresh {
            self.hits += 1;
        } else {
            self.misses += 1;
            ptree_theme::debug!(
                depth = state.depth,
                has_alerts = state.has_alerts,
                has_investigated_alert = state.has_investigated_alert,
                misses = self.misses,
                "style memo recompute"
            );
            self.entry = None;
        }
        &self
            .entry
            .get_or_insert_with(|| MemoEntry::compute(state, theme))
            .result
    }

    /// Cached result, if any, without touching the counters.
    #[must_use]
    pub fn peek(&self) -> Option<&StyleResult> {
        self.entry.as_ref().map(|entry| &entry.result)
    }

    /// Drop the cached entry. Counters are kept.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    #[must_use]
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            cached: self.entry.is_some(),
        }
    }
}
