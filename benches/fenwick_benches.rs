use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fenwick_tree::{Fenwick, Fenwick2D, Value};
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn get_rand() -> impl rand::Rng {
    SmallRng::seed_from_u64(0xdeadbeef)
}

fn random_values(rng: &mut impl Rng, len: usize) -> Vec<Value> {
    (0..len).map(|_| rng.gen_range(-1000, 1000)).collect()
}

fn random_matrix(rng: &mut impl Rng, side: usize) -> Vec<Vec<Value>> {
    (0..side).map(|_| random_values(rng, side)).collect()
}

fn build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fenwick build");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let values = random_values(&mut rng, size);

            b.iter(|| Fenwick::from_values(&values));
        });
    }
    group.finish();
}

fn sum_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fenwick sum random");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let tree = Fenwick::from_values(&random_values(&mut rng, size));

            b.iter(|| {
                let left = rng.gen_range(0, size as isize);
                let right = rng.gen_range(left, size as isize);
                black_box(tree.sum(left, right))
            });
        });
    }
    group.finish();
}

fn update_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fenwick update random");
    for size in 8..16 {
        let size = 1 << size;
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut rng = get_rand();
            let mut tree = Fenwick::new(size);

            b.iter(|| {
                let index = rng.gen_range(1, size + 1);
                tree.update(index, rng.gen_range(-1000, 1000))
            });
        });
    }
    group.finish();
}

fn build_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fenwick2D build");
    for side in 4..10 {
        let side = 1 << side;
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut rng = get_rand();
            let matrix = random_matrix(&mut rng, side);

            b.iter(|| Fenwick2D::new(&matrix));
        });
    }
    group.finish();
}

fn build_2d_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fenwick2D build parallel");
    for side in 4..10 {
        let side = 1 << side;
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut rng = get_rand();
            let matrix = random_matrix(&mut rng, side);

            b.iter(|| Fenwick2D::new_parallel(&matrix));
        });
    }
    group.finish();
}

fn sum_region_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fenwick2D sum_region random");
    for side in 4..10 {
        let side = 1 << side;
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut rng = get_rand();
            let table = Fenwick2D::new_parallel(&random_matrix(&mut rng, side)).unwrap();

            b.iter(|| {
                let row1 = rng.gen_range(0, side);
                let row2 = rng.gen_range(row1, side);
                let col1 = rng.gen_range(0, side);
                let col2 = rng.gen_range(col1, side);
                black_box(table.sum_region(row1, col1, row2, col2))
            });
        });
    }
    group.finish();
}

fn update_2d_rand(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fenwick2D update random");
    for side in 4..10 {
        let side = 1 << side;
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut rng = get_rand();
            let mut table = Fenwick2D::new_parallel(&random_matrix(&mut rng, side)).unwrap();

            b.iter(|| {
                let row = rng.gen_range(0, side);
                let col = rng.gen_range(0, side);
                table.update(row, col, rng.gen_range(-1000, 1000))
            });
        });
    }
    group.finish();
}

criterion_group!(
    fenwick_benches,
    build,
    sum_rand,
    update_rand,
    build_2d,
    build_2d_parallel,
    sum_region_rand,
    update_2d_rand,
);

criterion_main!(fenwick_benches);
