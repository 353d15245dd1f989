use miette::*;

use crate::grid::Grid;
use crate::path::{Path, StepDirection};

/// Largest path length whose move sequences fit in a `u64` bit pattern.
pub const MAX_STEPS: usize = 63;

/// Number of distinct right/down sequences of length `steps`.
///
/// Panics if `steps` exceeds [`MAX_STEPS`].
pub fn sequence_count(steps: usize) -> u64 {
    assert!(
        steps <= MAX_STEPS,
        "{} steps cannot be enumerated with a 64-bit pattern (max {})",
        steps,
        MAX_STEPS
    );
    1u64 << steps
}

/// Counts iceberg-avoiding paths by trying every right/down move sequence.
///
/// Bit `k` of the loop counter picks the direction of step `k`. A sequence is
/// counted once, after all of its steps have been consumed, if the candidate
/// is standing on the destination.
///
/// Runs in `O(2^steps * steps)`, so it panics on grids with more than
/// [`MAX_STEPS`] steps rather than returning a wrong count.
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), columns = grid.columns()))]
pub fn count_paths_exhaustive(grid: &Grid) -> u64 {
    assert!(grid.rows() > 0 && grid.columns() > 0, "grid must be non-empty");

    let steps = grid.steps();
    let sequences = sequence_count(steps);

    let (dest_row, dest_column) = grid.destination();
    if !grid.is_open(dest_row, dest_column) {
        tracing::debug!("destination is an iceberg");
        return 0;
    }

    let mut count_paths = 0;

    for bits in 0..sequences {
        let mut candidate = Path::new(grid);

        for k in 0..steps {
            let direction = StepDirection::from_bit((bits >> k) & 1 == 1);
            if !candidate.is_step_valid(direction) {
                // One skipped move leaves the candidate short of the destination for good
                break;
            }
            candidate.add_step(direction);
        }

        if candidate.reaches_destination() {
            count_paths += 1;
        }
    }

    tracing::debug!(steps, sequences, count_paths);
    count_paths
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;
    Ok(count_paths_exhaustive(&grid).to_string())
}
