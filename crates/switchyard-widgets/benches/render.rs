//! Benchmarks for the appearance pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use switchyard_core::{Constraints, Widget};
use switchyard_test::fixture;

fn bench_toggle(c: &mut Criterion) {
    let mut switch = fixture::switch_with(&fixture::full_attributes());
    c.bench_function("switch_toggle", |b| {
        b.iter(|| {
            switch.toggle();
            switch.surface_mut().take_ops();
        });
    });
}

fn bench_set_checked(c: &mut Criterion) {
    let mut switch = fixture::switch();
    let mut value = false;
    c.bench_function("switch_set_checked", |b| {
        b.iter(|| {
            value = !value;
            switch.set_checked(black_box(value));
            switch.surface_mut().take_ops();
        });
    });
}

fn bench_style_setter(c: &mut Criterion) {
    let mut switch = fixture::switch();
    let color = fixture::palette().accent;
    c.bench_function("switch_set_bkg_color", |b| {
        b.iter(|| {
            switch.set_bkg_checked_color(black_box(color));
            switch.surface_mut().take_ops();
        });
    });
}

fn bench_measure(c: &mut Criterion) {
    let switch = fixture::switch();
    let constraints = Constraints::new(0.0, 200.0, 0.0, 50.0);
    c.bench_function("switch_measure", |b| {
        b.iter(|| switch.measure(black_box(constraints)));
    });
}

criterion_group!(
    benches,
    bench_toggle,
    bench_set_checked,
    bench_style_setter,
    bench_measure
);
criterion_main!(benches);
