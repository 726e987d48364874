use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use itertools::Itertools;
use jiff::civil::date;
use plate_rs::entities::{Instance, Item};
use plate_rs::util::PlateConfig;
use plateopt::config::SAConfig;
use plateopt::opt::baseline::baseline_solution;
use plateopt::opt::sa::{SAOptimizer, neighbor_solution};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

criterion_main!(benches);
criterion_group!(benches, baseline_bench, neighbor_bench, annealing_bench);

const N_ITEMS: [usize; 3] = [10, 100, 1000];

fn create_instance(n_items: usize, rng: &mut SmallRng) -> Instance {
    let items = (0..n_items)
        .map(|id| {
            let dims: [u32; 3] = [
                rng.random_range(10..200),
                rng.random_range(10..200),
                rng.random_range(1..50),
            ];
            //orders spread over a week, two per hour at most
            let order_time = date(2024, 3, 1 + (id / 48) as i8 % 7)
                .at(((id / 2) % 24) as i8, (id % 2 * 30) as i8, 0, 0);
            (dims, rng.random_range(1..4), order_time)
        })
        .sorted_by_key(|(_, _, t)| *t)
        .enumerate()
        .map(|(id, (dims, qty, t))| Item::new(id, format!("bench_{id}"), dims, qty, t))
        .collect_vec();
    Instance::new(items)
}

fn baseline_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("baseline");
    let config = PlateConfig::default();
    for n_items in N_ITEMS {
        let mut rng = SmallRng::seed_from_u64(0);
        let instance = create_instance(n_items, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n_items), &instance, |b, i| {
            b.iter(|| baseline_solution(i.items(), &config))
        });
    }
    group.finish();
}

fn neighbor_bench(c: &mut Criterion) {
    let config = PlateConfig::default();
    let mut rng = SmallRng::seed_from_u64(0);
    let instance = create_instance(1000, &mut rng);
    let solution = baseline_solution(instance.items(), &config);

    c.bench_function("sa_neighbor", |b| {
        b.iter(|| neighbor_solution(&solution, config.buffer, &mut rng))
    });
}

fn annealing_bench(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(0);
    let instance = create_instance(100, &mut rng);
    let sa_config = SAConfig {
        max_temp: 100.0,
        min_temp: 1.0,
        cooling_rate: 0.95,
        cooling_adjustment: 1.0,
        max_iterations: None,
    };

    let mut group = c.benchmark_group("annealing");
    group.sample_size(10);
    group.bench_function("sa_100_items", |b| {
        b.iter(|| {
            let mut optimizer = SAOptimizer::new(
                instance.clone(),
                PlateConfig::default(),
                sa_config,
                SmallRng::seed_from_u64(0),
            );
            optimizer.solve()
        })
    });
    group.finish();
}
