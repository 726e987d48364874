/// Deterministic shelf packer producing the starting point of both metaheuristics
pub mod baseline;

/// Genetic algorithm over whole solutions, per time bucket
pub mod ga;

/// Simulated annealing over a single solution
pub mod sa;
