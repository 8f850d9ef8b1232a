use algokit::{knapsack::knapsack, KnapsackProblem};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_items(rng: &mut StdRng, n: usize) -> (Vec<u32>, Vec<u64>) {
    let weights = (0..n).map(|_| rng.gen_range(1..200)).collect();
    let values = (0..n).map(|_| rng.gen_range(0..1_000)).collect();
    (weights, values)
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    match get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        Some(p) => p.memory() / 1024,
        None => 0,
    }
}

fn bench_knapsack_perf(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_full_table");
    for &(n, capacity) in &[(100usize, 1_000u32), (200, 5_000), (400, 10_000)] {
        group.bench_function(format!("items_{n}_capacity_{capacity}"), |b| {
            b.iter_batched(
                || random_items(&mut StdRng::seed_from_u64(42), n),
                |(weights, values)| {
                    let before = rss_kib();
                    let solution = knapsack(capacity, &weights, &values, n).unwrap();
                    let after = rss_kib();
                    black_box(solution.value);
                    // stderr keeps the table's footprint out of criterion's report
                    eprintln!(
                        "RSS KiB delta (knapsack {n}x{capacity}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();

    let mut rng = StdRng::seed_from_u64(0x5EED);
    let (weights, values) = random_items(&mut rng, 400);
    let problem = KnapsackProblem::new(10_000u32, &weights, &values).unwrap();
    let mut group = c.benchmark_group("knapsack_value_only");
    group.bench_function("rolling_row", |b| {
        b.iter(|| black_box(problem.optimal_value()));
    });
    group.bench_function("with_selection", |b| {
        b.iter(|| black_box(problem.solve()));
    });
    group.finish();
}

criterion_group!(benches, bench_knapsack_perf);
criterion_main!(benches);
