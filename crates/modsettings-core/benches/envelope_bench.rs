//! Criterion benchmarks for envelope serialization and parsing.
//!
//! Run with:
//! ```bash
//! cargo bench --package modsettings-core --bench envelope_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modsettings_core::{AltDragSettings, ImageResizerSettings};

fn bench_to_serialized_form(c: &mut Criterion) {
    let altdrag = AltDragSettings::new();
    let resizer = ImageResizerSettings::new();

    let mut group = c.benchmark_group("to_serialized_form");
    group.bench_function("altdrag", |b| {
        b.iter(|| black_box(&altdrag).to_serialized_form().unwrap())
    });
    group.bench_function("image_resizer", |b| {
        b.iter(|| black_box(&resizer).to_serialized_form().unwrap())
    });
    group.finish();
}

fn bench_from_serialized_form(c: &mut Criterion) {
    let altdrag = AltDragSettings::new().to_serialized_form().unwrap();
    let resizer = ImageResizerSettings::new().to_serialized_form().unwrap();

    let mut group = c.benchmark_group("from_serialized_form");
    group.bench_function("altdrag", |b| {
        b.iter(|| AltDragSettings::from_serialized_form(black_box(&altdrag)).unwrap())
    });
    group.bench_function("image_resizer", |b| {
        b.iter(|| ImageResizerSettings::from_serialized_form(black_box(&resizer)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_to_serialized_form, bench_from_serialized_form);
criterion_main!(benches);
