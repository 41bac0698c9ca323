// File: crates/series-core/benches/pipeline_bench.rs
// Summary: Parse/sort/fit throughput over generated blobs of increasing size.

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use series_core::{Pipeline, Schema};

fn gen_blob(n: usize, bad_every: usize) -> String {
    let start = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let mut out = String::with_capacity(n * 24);
    // newest first, like the embedded data
    for i in (0..n).rev() {
        let date = start + Duration::days(i as i64);
        let close = (i as f64 * 0.01).sin() * 10.0 + 50.0;
        let open = close * 0.98;
        if bad_every > 0 && i % bad_every == 0 {
            out.push_str(&format!("??,{close:.2},{open:.2}\n"));
        } else {
            out.push_str(&format!("{},{close:.2},{open:.2}\n", date.format("%d-%b-%y")));
        }
    }
    out
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let pipeline = Pipeline::new(Schema::close_open());
    for &n in &[1_000usize, 10_000usize] {
        for &bad in &[0usize, 50usize] {
            let blob = gen_blob(n, bad);
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_bad{bad}")), &blob, |b, text| {
                b.iter(|| black_box(pipeline.run(text).map(|l| l.series.len())));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
