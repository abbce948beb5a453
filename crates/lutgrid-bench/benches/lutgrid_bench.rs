//! Benchmarks for lutgrid evaluators.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use lutgrid_lut::{Grid, Interpolation, batch};

fn grade(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    [r.powf(0.9), 0.8 * g + 0.1 * b, b.powf(1.1)]
}

fn inputs(n: usize) -> Vec<[f64; 3]> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            [t, (t * 3.0).fract(), (t * 7.0).fract()]
        })
        .collect()
}

/// Benchmark 1D curve evaluation.
fn bench_curves(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");
    let values = inputs(10000);
    group.throughput(Throughput::Elements(values.len() as u64));

    for size in [256, 1024, 4096] {
        let curve: Vec<f64> = (0..size).map(|i| (i as f64 / (size - 1) as f64).powf(2.2)).collect();
        let grid = Grid::curves(curve.clone(), curve.clone(), curve).unwrap();

        for mode in [Interpolation::Cubic, Interpolation::Linear] {
            group.bench_with_input(BenchmarkId::new(mode.name(), size), &values, |b, v| {
                b.iter(|| {
                    v.iter()
                        .map(|&rgb| grid.rgb_to_rgb(black_box(rgb), mode))
                        .collect::<Vec<_>>()
                })
            });
        }
    }

    group.finish();
}

/// Benchmark 3D cube evaluation.
fn bench_cube(c: &mut Criterion) {
    let mut group = c.benchmark_group("cube");
    let values = inputs(10000);
    group.throughput(Throughput::Elements(values.len() as u64));

    for size in [17, 33, 65] {
        let grid = Grid::from_fn_3d(size, grade).unwrap();

        group.bench_with_input(BenchmarkId::new("tricubic", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&rgb| grid.rgb_to_rgb(black_box(rgb), Interpolation::Cubic))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("trilinear", size), &values, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&rgb| grid.rgb_to_rgb(black_box(rgb), Interpolation::Linear))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark parallel buffer evaluation.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let grid = Grid::from_fn_3d(33, grade).unwrap();

    for pixels in [64 * 64, 512 * 512] {
        let src: Vec<f32> = inputs(pixels)
            .into_iter()
            .flat_map(|rgb| rgb.map(|v| v as f32))
            .collect();
        group.throughput(Throughput::Elements(pixels as u64));

        group.bench_with_input(BenchmarkId::new("tricubic_f32", pixels), &src, |b, s| {
            b.iter(|| {
                let mut buf = s.clone();
                batch::apply_rgb_f32(&grid, &mut buf, Interpolation::Cubic).unwrap();
                buf
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_curves, bench_cube, bench_batch);
criterion_main!(benches);
