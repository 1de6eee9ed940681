//! Benchmarks for palette access.
//!
//! Run with: cargo bench
//!
//! Compares the name lookup, direct map access and rebuilding a map.
#![allow(clippy::expect_used, clippy::indexing_slicing)]

use color_palettes::{
    get_colors_by_group_tag, get_colors_by_palette_name, group_to_map, paul_tol,
    PaletteGroupName, PaulTolPaletteName,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Lookup of the first and last palette in the larger group
fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for name in ["bright", "smoothrainbow", "doesNotExist"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| get_colors_by_palette_name(PaletteGroupName::PaulTol, black_box(name)));
        });
    }
    group.finish();
}

/// String-tag lookup, including tag parsing
fn bench_lookup_by_tag(c: &mut Criterion) {
    c.bench_function("lookup_by_tag", |b| {
        b.iter(|| get_colors_by_group_tag(black_box("JapanCUDO"), black_box("accent")));
    });
}

/// Typed key indexing into the precomputed map
fn bench_typed_index(c: &mut Criterion) {
    let map = paul_tol();
    c.bench_function("typed_index", |b| {
        b.iter(|| map[black_box(PaulTolPaletteName::SmoothRainbow)].len());
    });
}

/// Cost of the one-time transform
fn bench_build_map(c: &mut Criterion) {
    c.bench_function("build_map", |b| {
        b.iter(|| group_to_map(black_box(PaletteGroupName::PaulTol)));
    });
}

criterion_group!(
    benches,
    bench_lookup,
    bench_lookup_by_tag,
    bench_typed_index,
    bench_build_map
);
criterion_main!(benches);
