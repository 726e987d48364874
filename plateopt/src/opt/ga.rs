use std::time::Instant;

use log::{debug, info};
use plate_rs::entities::{Cost, Instance, Solution, TimeBucket};
use plate_rs::util::PlateConfig;
use plate_rs::{PlateError, Result};
use rand::Rng;
use rand::prelude::SmallRng;
use rand::seq::index;

use crate::config::GAConfig;
use crate::opt::baseline::baseline_solution;
use crate::report::ImprovementReport;

/// Genetic optimizer evolving populations of complete solutions.
///
/// The morning and afternoon orders are evolved separately and concatenated afterwards,
/// so no plate of the result mixes the two buckets through crossover.
pub struct GAOptimizer {
    pub instance: Instance,
    pub plate_config: PlateConfig,
    pub config: GAConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

/// Result of a successful run of the retry driver
#[derive(Debug, Clone)]
pub struct GAOutcome {
    pub solution: Solution,
    pub cost: Cost,
    pub report: ImprovementReport,
    /// Number of complete runs it took to beat the baseline
    pub attempts: usize,
}

impl GAOptimizer {
    pub fn new(
        instance: Instance,
        plate_config: PlateConfig,
        config: GAConfig,
        rng: SmallRng,
    ) -> Self {
        assert!(config.population_size >= 2);
        assert!(config.max_attempts > 0);
        assert!((0.0..=1.0).contains(&config.mutation_rate));
        Self {
            instance,
            plate_config,
            config,
            rng,
        }
    }

    /// Repeats complete runs until one improves the utilization of the baseline by more
    /// than `min_improvement_pct`, giving up after `max_attempts` runs.
    pub fn solve(&mut self) -> Result<GAOutcome> {
        let start = Instant::now();
        let baseline = baseline_solution(self.instance.items(), &self.plate_config);
        let mut best_improvement_pct = f64::NEG_INFINITY;

        for attempt in 1..=self.config.max_attempts {
            let (solution, cost) = self.run();
            let report = ImprovementReport::new(&baseline, &solution, &self.plate_config)?;
            info!(
                "[GA] attempt {attempt}/{}: {} plates (baseline: {}), improvement of {:.3}%",
                self.config.max_attempts,
                report.optimized_plates,
                report.baseline_plates,
                report.efficiency_improvement_pct
            );

            if report.efficiency_improvement_pct > self.config.min_improvement_pct {
                info!(
                    "[GA] optimization finished in {:.3}ms after {attempt} attempt(s)",
                    start.elapsed().as_secs_f64() * 1000.0
                );
                return Ok(GAOutcome {
                    solution,
                    cost,
                    report,
                    attempts: attempt,
                });
            }
            best_improvement_pct = best_improvement_pct.max(report.efficiency_improvement_pct);
        }

        Err(PlateError::NoImprovementFound {
            attempts: self.config.max_attempts,
            threshold_pct: self.config.min_improvement_pct,
            best_improvement_pct,
        })
    }

    /// A single complete run: evolves both time buckets and concatenates the results
    /// (morning plates first).
    pub fn run(&mut self) -> (Solution, Cost) {
        let mut plates = vec![];
        for bucket in TimeBucket::ALL {
            let best = self.evolve(bucket);
            plates.extend(best.plates);
        }
        let solution = Solution::new(plates);
        let cost = solution.cost(&self.plate_config);
        (solution, cost)
    }

    /// Evolves a population seeded with the baseline of the orders in `bucket` and returns
    /// its fittest member.
    pub fn evolve(&mut self, bucket: TimeBucket) -> Solution {
        let seed = baseline_solution(self.instance.items_in(bucket), &self.plate_config);
        if seed.is_empty() {
            debug!("[GA] no {bucket} orders, nothing to evolve");
            return seed;
        }

        let pop_size = self.config.population_size;
        let n_survivors = pop_size / 2;
        let n_parents = usize::max(pop_size / 4, 1);

        //every member is an independent copy
        let mut population = vec![seed; pop_size];

        for generation in 0..self.config.generations {
            population.sort_by_cached_key(|s| s.cost(&self.plate_config));
            population.truncate(n_survivors);

            while population.len() < pop_size {
                let i1 = self.rng.random_range(0..n_parents);
                let i2 = self.rng.random_range(0..n_parents);
                let mut child = crossover(&population[i1], &population[i2], &mut self.rng);
                mutate(&mut child, self.config.mutation_rate, &mut self.rng);
                population.push(child);
            }

            debug!(
                "[GA] {bucket} generation {generation}: best cost {}",
                population[0].cost(&self.plate_config)
            );
        }

        population
            .into_iter()
            .min_by_key(|s| s.cost(&self.plate_config))
            .unwrap_or_default()
    }
}

/// Plate-level one-point crossover: the first `k` plates of `parent1` followed by the plates
/// of `parent2` from index `k` on, with `k` drawn from `[1, n_plates(parent1) - 1]` (or `1`
/// for parents with a single plate).
pub fn crossover(parent1: &Solution, parent2: &Solution, rng: &mut impl Rng) -> Solution {
    let split = match parent1.n_plates() > 1 {
        true => rng.random_range(1..parent1.n_plates()),
        false => 1,
    };
    let head = &parent1.plates[..usize::min(split, parent1.n_plates())];
    let tail = parent2.plates.get(split..).unwrap_or(&[]);

    Solution::new(head.iter().chain(tail).cloned().collect())
}

/// For every plate of the solution, with probability `mutation_rate`, swaps one random part
/// between two distinct random plates.
///
/// The swapped parts keep their coordinates, so the result may contain overlapping parts
/// or plates that mix time buckets. This is tolerated: it is an exploration operator.
pub fn mutate(solution: &mut Solution, mutation_rate: f64, rng: &mut impl Rng) {
    let n_plates = solution.n_plates();
    for _ in 0..n_plates {
        if rng.random::<f64>() < mutation_rate && n_plates > 1 {
            let pair = index::sample(rng, n_plates, 2);
            let (p1, p2) = (pair.index(0), pair.index(1));
            let plates = &mut solution.plates;
            if !plates[p1].is_empty() && !plates[p2].is_empty() {
                let i1 = rng.random_range(0..plates[p1].len());
                let i2 = rng.random_range(0..plates[p2].len());
                let part = plates[p1].parts[i1];
                plates[p1].parts[i1] = plates[p2].parts[i2];
                plates[p2].parts[i2] = part;
            }
        }
    }
}
