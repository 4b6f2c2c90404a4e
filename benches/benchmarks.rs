// benches/benchmarks.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use polyarith::{fit_linear_with, fit_quadratic_with, FitConfig, PolyConfig, Polynomial};

fn init_logging() {
    let config = PolyConfig::load().unwrap_or_default();
    let _ = env_logger::Builder::new()
        .filter_level(config.log_filter())
        .parse_default_env()
        .is_test(true)
        .try_init();
}

fn dense(degree: usize) -> Polynomial<f64> {
    Polynomial::new((0..=degree).map(|i| ((i * 7 + 3) % 11) as f64 - 5.0).collect())
}

fn bench_arithmetic(c: &mut Criterion) {
    init_logging();
    let a = dense(64);
    let b = dense(48);
    c.bench_function("multiply_64x48", |bench| bench.iter(|| black_box(&a) * black_box(&b)));
    c.bench_function("div_rem_64_by_16", |bench| {
        let divisor = dense(16);
        bench.iter(|| black_box(&a).div_rem(black_box(&divisor)))
    });
    c.bench_function("evaluate_64", |bench| bench.iter(|| black_box(&a).evaluate(black_box(0.75))));
}

fn bench_fitting(c: &mut Criterion) {
    init_logging();
    let xs: Vec<f64> = (0..32).map(|i| i as f64 * 0.25).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 3.0 * x * x + 2.0 * x + 1.0).collect();
    let sequential = FitConfig { parallel: false, ..FitConfig::default() };
    let parallel = FitConfig::default();

    c.bench_function("fit_linear_sequential", |bench| bench.iter(|| fit_linear_with(&xs, &ys, &sequential)));
    c.bench_function("fit_quadratic_sequential", |bench| bench.iter(|| fit_quadratic_with(&xs, &ys, &sequential)));
    c.bench_function("fit_quadratic_parallel", |bench| bench.iter(|| fit_quadratic_with(&xs, &ys, &parallel)));
}

fn bench_root_finding(c: &mut Criterion) {
    init_logging();
    let cubic = Polynomial::from_roots(&[-2.0, 1.0, 3.0]);
    c.bench_function("find_root_cubic", |bench| bench.iter(|| cubic.find_root(black_box(10.0))));
}

criterion_group!(benches, bench_arithmetic, bench_fitting, bench_root_finding);
criterion_main!(benches);
