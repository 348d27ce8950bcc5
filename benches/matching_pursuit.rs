use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Axis;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusty_pursuit::prelude::*;

fn bench_omp_f32(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let dictionary = f32::random_normalized_dictionary((128, 512), &mut rng);
    let (signal, _, _) = f32::random_sparse_signal(dictionary.view(), 16, &mut rng);

    c.bench_function("omp_f32_128x512_l16", |b| {
        b.iter(|| {
            let result = f32::omp(dictionary.view(), signal.view(), 16).unwrap();
            black_box(result);
        });
    });
}

fn bench_omp_f64_dense_signal(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let dictionary = f64::random_normalized_dictionary((64, 256), &mut rng);
    let signal = f64::random_gaussian((64, 1), &mut rng).index_axis_move(Axis(1), 0);

    c.bench_function("omp_f64_64x256_l32", |b| {
        b.iter(|| {
            let result = f64::omp(dictionary.view(), signal.view(), 32).unwrap();
            black_box(result);
        });
    });
}

fn bench_omp_c64(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(3);
    let dictionary = c64::random_normalized_dictionary((64, 256), &mut rng);
    let (signal, _, _) = c64::random_sparse_signal(dictionary.view(), 8, &mut rng);

    c.bench_function("omp_c64_64x256_l8", |b| {
        b.iter(|| {
            let result = c64::omp(dictionary.view(), signal.view(), 8).unwrap();
            black_box(result);
        });
    });
}

criterion_group!(benches, bench_omp_f32, bench_omp_f64_dense_signal, bench_omp_c64);
criterion_main!(benches);
