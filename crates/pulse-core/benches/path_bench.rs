use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pulse_core::{band_path, line_path, PointF};

fn gen_points(n: usize, offset: f32) -> Vec<PointF> {
    (0..n)
        .map(|i| {
            let x = i as f32;
            let y = (i as f32 * 0.01).sin() * 40.0 + offset;
            PointF::new(x, y)
        })
        .collect()
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    for &n in &[1_000usize, 10_000usize] {
        let line = gen_points(n, 100.0);
        group.bench_with_input(BenchmarkId::new("line", n), &line, |b, pts| {
            b.iter(|| {
                let _ = black_box(line_path(pts));
            });
        });

        let upper = gen_points(n, 60.0);
        let lower = gen_points(n, 140.0);
        group.bench_with_input(BenchmarkId::new("band", n), &n, |b, _| {
            b.iter_batched(
                || (upper.clone(), lower.clone()),
                |(u, l)| {
                    let _ = black_box(band_path(&u, &l));
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_paths);
criterion_main!(benches);
