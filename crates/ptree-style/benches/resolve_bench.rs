//! Benchmarks for highlight style resolution.
//!
//! Run with: cargo bench -p ptree-style --bench resolve_bench
//!
//! Budgets:
//! - resolve: < 5µs per node
//! - memo hit: < 200ns
//! - full stylesheet: < 20µs

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ptree_style::{NodeVisualState, StyleMemo, TerminalRowStyle, css, resolve};
use ptree_theme::{ColorProfile, Rgba, presets};
use std::hint::black_box;

// =============================================================================
// Resolution
// =============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let theme = presets::light();

    for depth in [0u32, 4, 32] {
        let state = NodeVisualState::new(depth)
            .with_alerts(true)
            .with_investigated_alert(true);
        group.bench_with_input(BenchmarkId::new("node", depth), &state, |b, state| {
            b.iter(|| black_box(resolve(black_box(*state), &theme)));
        });
    }

    // A tree of 1000 rows with every fifth row alerting.
    group.throughput(Throughput::Elements(1000));
    group.bench_function("tree_1000", |b| {
        b.iter(|| {
            for i in 0..1000u32 {
                let state = NodeVisualState::new(i % 12).with_alerts(i % 5 == 0);
                black_box(resolve(state, &theme));
            }
        });
    });

    group.finish();
}

// =============================================================================
// Memo
// =============================================================================

fn bench_memo(c: &mut Criterion) {
    let mut group = c.benchmark_group("memo");
    let theme = presets::dark();
    let state = NodeVisualState::new(6).with_alerts(true);

    group.bench_function("hit", |b| {
        let mut memo = StyleMemo::new();
        memo.get(state, &theme);
        b.iter(|| {
            black_box(memo.get(black_box(state), &theme));
        });
    });

    group.bench_function("alternating_miss", |b| {
        let mut memo = StyleMemo::new();
        let other = state.with_investigated_alert(true);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let s = if flip { state } else { other };
            black_box(memo.get(s, &theme));
        });
    });

    group.finish();
}

// =============================================================================
// Adapters
// =============================================================================

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");
    let result = resolve(
        NodeVisualState::new(3)
            .with_alerts(true)
            .with_investigated_alert(true),
        &presets::light(),
    );

    group.bench_function("stylesheet", |b| {
        b.iter(|| black_box(css::to_stylesheet("ptree", &result)));
    });

    for profile in [
        ColorProfile::TrueColor,
        ColorProfile::Ansi256,
        ColorProfile::Ansi16,
    ] {
        group.bench_with_input(
            BenchmarkId::new("terminal_row", profile.as_str()),
            &profile,
            |b, profile| {
                b.iter(|| {
                    black_box(TerminalRowStyle::from_result(
                        &result,
                        Rgba::WHITE,
                        *profile,
                        8.0,
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_memo, bench_adapters);
criterion_main!(benches);
