//! Synthetic workload generation.
//!
//! Produces reproducible random process batches for experiments and tests.
//! Output is sorted by arrival with sequential IDs starting at 1, so it can
//! be fed directly to arrival-order disciplines.

use rand::prelude::*;

use crate::models::Process;

/// Seeded random process batch builder.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    count: usize,
    arrival_horizon: i64,
    min_burst: i64,
    max_burst: i64,
    max_priority: i64,
    seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival_horizon: 20,
            min_burst: 1,
            max_burst: 10,
            max_priority: 0,
            seed: 0,
        }
    }

    /// Arrivals are drawn from `0..=horizon`.
    pub fn with_arrival_horizon(mut self, horizon: i64) -> Self {
        self.arrival_horizon = horizon.max(0);
        self
    }

    /// Bursts are drawn from `min..=max` (clamped to at least 1).
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Priorities are drawn from `0..=max`.
    pub fn with_max_priority(mut self, max: i64) -> Self {
        self.max_priority = max.max(0);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the batch.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut arrivals: Vec<i64> = (0..self.count)
            .map(|_| rng.random_range(0..=self.arrival_horizon))
            .collect();
        arrivals.sort_unstable();

        arrivals
            .into_iter()
            .enumerate()
            .map(|(i, arrival)| {
                let burst = rng.random_range(self.min_burst..=self.max_burst);
                let priority = rng.random_range(0..=self.max_priority);
                Process::new(i as u64 + 1, arrival, burst).with_priority(priority)
            })
            .collect()
    }
}
