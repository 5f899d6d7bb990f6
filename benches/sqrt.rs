#![allow(missing_docs, reason = "Unnecessary for benchmarks")]
#![allow(unused_results, reason = "Unnecessary for benchmarks")]
#![allow(clippy::missing_assert_message, reason = "Unnecessary for benchmarks")]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pprof::criterion::{Output, PProfProfiler};
use rootfit::fitting::bisect;
use rootfit::sqrt::approx_sqrt;
use std::hint::black_box;

fn newton_bench(x: f64) {
    assert!(approx_sqrt(black_box(x)).is_ok());
}

fn bisect_bench(x: f64) {
    let x = black_box(x);
    let f = |z: f64| z * z - x;
    assert!(bisect(f, 0.0, x.max(1.0), 1e-15 * x.max(1.0)).is_ok());
}

pub fn sqrt_benchmark(c: &mut Criterion) {
    let mut sqrt_group = c.benchmark_group("sqrt");

    for x in [2.0, 1e6, 1e12] {
        sqrt_group.bench_function(BenchmarkId::new("newton", x), |b| {
            b.iter(|| newton_bench(x));
        });
        sqrt_group.bench_function(BenchmarkId::new("bisection", x), |b| {
            b.iter(|| bisect_bench(x));
        });
    }
}

criterion_group!(name=sqrt;
                config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
                targets=sqrt_benchmark);
criterion_main!(sqrt);
