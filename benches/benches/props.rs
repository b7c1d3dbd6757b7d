// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_props`.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use understory_props::{PropMap, PropValue};

fn mixed_map(len: usize) -> PropMap {
    (0..len)
        .map(|i| {
            let key = if i % 3 == 0 {
                format!("$flag-{i}")
            } else {
                format!("attr-{i}")
            };
            (key, PropValue::from(i as i64))
        })
        .collect()
}

fn bench_props(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: PropMap={} PropValue={}",
            core::mem::size_of::<PropMap>(),
            core::mem::size_of::<PropValue>(),
        );
    });

    let mut group = c.benchmark_group("props");
    for len in [4_usize, 8, 32] {
        let map = mixed_map(len);

        group.bench_with_input(BenchmarkId::new("get_last", len), &map, |b, map| {
            let key = map
                .keys()
                .last()
                .map(|k| k.as_str().to_owned())
                .unwrap_or_default();
            b.iter(|| black_box(map.get(black_box(&key))));
        });

        group.bench_with_input(BenchmarkId::new("split_transient", len), &map, |b, map| {
            b.iter_batched(
                || map.clone(),
                |map| black_box(map.split_transient()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_props);
criterion_main!(benches);
