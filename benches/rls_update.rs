use criterion::{criterion_group, criterion_main, Criterion};
use numeris_rls::{DynMatrix, Rls};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn estimator(m: usize, n: usize) -> Rls<f64> {
    Rls::with_rng(m, n, 0.99, 10.0, &mut StdRng::seed_from_u64(0)).unwrap()
}

fn input(n: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(n, 1, |i, _| ((i + 1) as f64 * 0.37).sin())
}

fn output(m: usize) -> DynMatrix<f64> {
    DynMatrix::from_fn(m, 1, |i, _| (i as f64 * 0.5).cos())
}

// ---------------------------------------------------------------------------
// Update / predict
// ---------------------------------------------------------------------------

fn update(c: &mut Criterion) {
    let mut g = c.benchmark_group("rls_update");

    for (m, n) in [(1, 4), (8, 16), (32, 64)] {
        g.bench_function(format!("{}x{}", n, m), |b| {
            let mut rls = estimator(m, n);
            let x = input(n);
            let y = output(m);
            b.iter(|| rls.update(std::hint::black_box(&x), std::hint::black_box(&y)))
        });
    }

    g.finish();
}

fn predict(c: &mut Criterion) {
    let mut g = c.benchmark_group("rls_predict");

    for (m, n) in [(1, 4), (8, 16), (32, 64)] {
        g.bench_function(format!("{}x{}", n, m), |b| {
            let rls = estimator(m, n);
            let x = input(n);
            b.iter(|| rls.predict(std::hint::black_box(&x)))
        });
    }

    g.finish();
}

criterion_group!(benches, update, predict);
criterion_main!(benches);
