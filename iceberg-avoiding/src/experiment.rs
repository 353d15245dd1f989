use miette::*;
use rand::{rngs::StdRng, SeedableRng};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use crate::dyn_prog::count_paths_dynamic_programming;
use crate::exhaustive::{count_paths_exhaustive, MAX_STEPS};
use crate::grid::Grid;

/// Settings for timing both counters on random square grids.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Side lengths to measure, one grid per size.
    pub sizes: RangeInclusive<usize>,
    pub iceberg_density: f64,
    pub seed: u64,
    /// Grids needing more steps than this skip the exhaustive counter.
    pub exhaustive_max_steps: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            sizes: 2..=10,
            iceberg_density: 0.1,
            seed: 0x1CEB_E126,
            exhaustive_max_steps: 20,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub size: usize,
    pub exhaustive: Option<(u64, Duration)>,
    pub dynamic: (u64, Duration),
}

fn timed(count: impl FnOnce() -> u64) -> (u64, Duration) {
    let start = Instant::now();
    let paths = count();
    (paths, start.elapsed())
}

/// Times both counters on one seeded random grid per size.
///
/// `on_measurement` is called after each size finishes. Fails if the two
/// counters disagree on any grid.
#[tracing::instrument(skip(on_measurement))]
pub fn run(
    config: &ExperimentConfig,
    mut on_measurement: impl FnMut(&Measurement),
) -> Result<Vec<Measurement>> {
    ensure!(
        config.exhaustive_max_steps <= MAX_STEPS,
        "exhaustive_max_steps must be at most {}, got {}",
        MAX_STEPS,
        config.exhaustive_max_steps
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut measurements = Vec::new();

    for size in config.sizes.clone() {
        let grid = Grid::random(size, size, config.iceberg_density, &mut rng)?;

        let dynamic = timed(|| count_paths_dynamic_programming(&grid));
        let exhaustive = if grid.steps() <= config.exhaustive_max_steps {
            Some(timed(|| count_paths_exhaustive(&grid)))
        } else {
            tracing::info!(size, steps = grid.steps(), "skipping exhaustive count");
            None
        };

        if let Some((paths, _)) = exhaustive {
            if paths != dynamic.0 {
                return Err(miette!(
                    "Counters disagree on a {}x{} grid: exhaustive {} vs dynamic {}\n{}",
                    size,
                    size,
                    paths,
                    dynamic.0,
                    grid
                ));
            }
        }

        let measurement = Measurement {
            size,
            exhaustive,
            dynamic,
        };
        on_measurement(&measurement);
        measurements.push(measurement);
    }

    Ok(measurements)
}
