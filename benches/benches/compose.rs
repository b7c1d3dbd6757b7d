// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for fragment evaluation and composed renders.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use understory_classes::{Composed, Fragment, Props, evaluate, tw};

fn fragments(len: usize) -> Vec<Fragment> {
    (0..len)
        .map(|i| {
            if i % 2 == 0 {
                Fragment::literal(format!("  lit-{i}  "))
            } else {
                Fragment::computed(move |p: &Props| p.flag("$on").then(|| format!("fn-{i}")))
            }
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("classes/evaluate");
    let props = Props::new().with("$on", true);
    for len in [4_usize, 16, 64] {
        let fragments = fragments(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &fragments, |b, f| {
            b.iter(|| black_box(evaluate(black_box(f), &props).join()));
        });
    }
    group.finish();
}

fn nested(depth: usize) -> Composed {
    let mut current = tw("button")
        .computed(|p: &Props| if p.flag("$on") { "on" } else { "off" })
        .build();
    for level in 0..depth {
        current = tw(&current).literal(format!("level-{level}")).build();
    }
    current
}

fn bench_nested_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("classes/render_nested");
    for depth in [0_usize, 1, 4, 16] {
        let component = nested(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &component, |b, comp| {
            b.iter(|| {
                let props = Props::new()
                    .with("$on", true)
                    .with("type", "button")
                    .with_class_name("caller")
                    .with_child("Label");
                black_box(comp.render(props))
            });
        });
    }
    group.finish();
}

fn bench_render_as(c: &mut Criterion) {
    let component = nested(4);
    c.bench_function("classes/render_as_primitive", |b| {
        b.iter(|| {
            let props = Props::new().with("$on", true).with_render_as("div");
            black_box(component.render(props))
        });
    });
}

criterion_group!(benches, bench_evaluate, bench_nested_render, bench_render_as);
criterion_main!(benches);
