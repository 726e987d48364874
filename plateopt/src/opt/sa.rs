use std::time::Instant;

use log::{debug, info, warn};
use plate_rs::constraints;
use plate_rs::entities::{Cost, Instance, Solution};
use plate_rs::util::PlateConfig;
use rand::Rng;
use rand::prelude::SmallRng;
use rand::seq::index;
use thousands::Separable;

use crate::config::SAConfig;
use crate::opt::baseline::baseline_solution;

/// Simulated annealing optimizer over a single solution, starting from the baseline.
pub struct SAOptimizer {
    pub instance: Instance,
    pub plate_config: PlateConfig,
    pub config: SAConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
    /// Every value the best cost took during the last run, in order
    pub best_cost_trace: Vec<Cost>,
    pub n_iterations: usize,
}

impl SAOptimizer {
    pub fn new(
        instance: Instance,
        plate_config: PlateConfig,
        config: SAConfig,
        rng: SmallRng,
    ) -> Self {
        assert!(config.min_temp > 0.0 && config.max_temp > 0.0);
        assert!(
            config.cooling_factor() < 1.0 || config.max_iterations.is_some(),
            "a non-cooling schedule requires an iteration cap"
        );
        Self {
            instance,
            plate_config,
            config,
            rng,
            best_cost_trace: vec![],
            n_iterations: 0,
        }
    }

    pub fn solve(&mut self) -> (Solution, Cost) {
        let start = Instant::now();
        let buffer = self.plate_config.buffer;

        let mut current = baseline_solution(self.instance.items(), &self.plate_config);
        let mut current_cost = current.cost(&self.plate_config);
        let (mut best, mut best_cost) = (current.clone(), current_cost);

        self.best_cost_trace = vec![best_cost];
        self.n_iterations = 0;

        let mut temp = self.config.max_temp;
        let mut n_accepted = 0;

        while temp > self.config.min_temp {
            if self
                .config
                .max_iterations
                .is_some_and(|max| self.n_iterations >= max)
            {
                warn!(
                    "[SA] iteration cap reached at temperature {temp:.3}, stopping early"
                );
                break;
            }

            let neighbor = neighbor_solution(&current, buffer, &mut self.rng);
            let new_cost = neighbor.cost(&self.plate_config);

            //Metropolis criterion
            let accept = new_cost < current_cost
                || self.rng.random::<f64>() < ((current_cost - new_cost) as f64 / temp).exp();

            if accept {
                n_accepted += 1;
                if new_cost < best_cost {
                    debug!(
                        "[SA] iteration {}: new best with {} plates (cost: {new_cost})",
                        self.n_iterations,
                        neighbor.n_plates()
                    );
                    best = neighbor.clone();
                    best_cost = new_cost;
                    self.best_cost_trace.push(best_cost);
                }
                current = neighbor;
                current_cost = new_cost;
            }

            temp *= self.config.cooling_factor();
            self.n_iterations += 1;
        }

        info!(
            "[SA] optimization finished in {:.3}ms ({} iterations, {} accepted)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.n_iterations.separate_with_commas(),
            n_accepted.separate_with_commas()
        );
        info!(
            "[SA] best solution uses {} plates for {} parts (cost: {best_cost})",
            best.n_plates(),
            best.n_parts()
        );

        (best, best_cost)
    }
}

/// Generates a neighbor of `solution`, leaving `solution` untouched.
///
/// A random plate has two of its parts swapped in placement order, then a random part of the
/// next plate is moved onto it (keeping its coordinates) if it belongs to the same time bucket
/// and fits. Plates left empty are dropped. Solutions with fewer than two plates are returned
/// unchanged.
pub fn neighbor_solution(solution: &Solution, buffer: u32, rng: &mut impl Rng) -> Solution {
    let mut plates = solution.plates.clone();

    if plates.len() > 1 {
        let p = rng.random_range(0..plates.len());

        if plates[p].len() > 1 {
            let pair = index::sample(rng, plates[p].len(), 2);
            plates[p].parts.swap(pair.index(0), pair.index(1));
        }

        if p < plates.len() - 1 && !plates[p + 1].is_empty() {
            let j = rng.random_range(0..plates[p + 1].len());
            let part = plates[p + 1].parts[j];
            let same_bucket = plates[p]
                .first()
                .is_some_and(|first| constraints::compatible(&first.order_time, &part.order_time));

            if same_bucket && plates[p].fits(&part, buffer) {
                plates[p].push(part);
                plates[p + 1].parts.remove(j);
            }
        }

        plates.retain(|plate| !plate.is_empty());
    }

    Solution::new(plates)
}
