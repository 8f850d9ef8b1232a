use algokit::{
    grid::Grid2D,
    iter::{Combinations, Hypercube},
    sort::quick_sort,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_quick_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_sort");
    for &len in &[1_000usize, 10_000, 100_000] {
        group.bench_function(format!("random_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(len as u64);
                    (0..len).map(|_| rng.gen::<u32>()).collect::<Vec<_>>()
                },
                |mut v| {
                    quick_sort(&mut v);
                    black_box(v);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.bench_function("sorted_2000", |b| {
        b.iter_batched(
            || (0..2_000u32).collect::<Vec<_>>(),
            |mut v| {
                quick_sort(&mut v);
                black_box(v);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_iterators(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursors");
    group.bench_function("combinations_20_5", |b| {
        b.iter(|| {
            let mut it = Combinations::new(20, 5);
            let mut acc = 0usize;
            while let Some(idx) = it.current() {
                acc = acc.wrapping_add(idx[4]);
                it.advance();
            }
            black_box(acc)
        });
    });
    group.bench_function("hypercube_5_8", |b| {
        b.iter(|| {
            let mut it = Hypercube::new(5, 8);
            let mut acc = 0usize;
            while let Some(p) = it.current() {
                acc = acc.wrapping_add(p[0]);
                it.advance();
            }
            black_box(acc)
        });
    });
    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid");
    group.bench_function("insert_column_256", |b| {
        b.iter_batched(
            || Grid2D::<u32>::new(256, 256),
            |mut g| {
                g.insert_column(128, vec![1; 256]).unwrap();
                black_box(g);
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("dot_product_256", |b| {
        let a = Grid2D::filled(256, 256, 1.5f64);
        let z = Grid2D::filled(256, 256, 2.0f64);
        b.iter(|| black_box(a.dot_product(&z).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_quick_sort, bench_iterators, bench_grid);
criterion_main!(benches);
