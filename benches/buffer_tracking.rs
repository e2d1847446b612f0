// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for buffered range rendering.
//!
//! Progress events arrive several times per second with every buffered range
//! the surface holds, so the conversion to track fractions runs on the hot path.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stream_lens::domain::stream::TimeRange;
use stream_lens::video_player::buffered_segments;

/// Interleaved, partly overlapping ranges over a two hour timeline.
fn fragmented_ranges(count: usize) -> Vec<TimeRange> {
    (0..count)
        .rev()
        .map(|i| {
            let start = i as f64 * 7.0;
            TimeRange::new(start, start + 9.0)
        })
        .collect()
}

fn bench_buffered_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_tracking");

    let few = fragmented_ranges(4);
    let many = fragmented_ranges(512);

    group.bench_function("four_ranges", |b| {
        b.iter(|| black_box(buffered_segments(black_box(&few), 7200.0, false)));
    });

    group.bench_function("fragmented_ranges", |b| {
        b.iter(|| black_box(buffered_segments(black_box(&many), 7200.0, false)));
    });

    group.finish();
}

criterion_group!(benches, bench_buffered_segments);
criterion_main!(benches);
