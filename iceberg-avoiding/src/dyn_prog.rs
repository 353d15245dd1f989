use itertools::Itertools;
use miette::*;

use crate::grid::{Cell, Grid};

/// Builds the table of path counts from the origin to every cell.
///
/// The table is sized to the grid. Icebergs hold 0, and every other cell
/// holds the sum of the cell above and the cell to the left. The origin is
/// seeded with 1 whatever it contains.
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), columns = grid.columns()))]
pub fn reachability_table(grid: &Grid) -> Vec<Vec<u64>> {
    assert!(grid.rows() > 0 && grid.columns() > 0, "grid must be non-empty");

    let mut table = vec![vec![0u64; grid.columns()]; grid.rows()];
    table[0][0] = 1;

    // Row-major order visits the up and left neighbours first
    for (i, j) in (0..grid.rows()).cartesian_product(0..grid.columns()) {
        if (i, j) == (0, 0) || grid.get(i, j) == Some(Cell::Iceberg) {
            continue;
        }

        let from_above = if i > 0 { table[i - 1][j] } else { 0 };
        let from_left = if j > 0 { table[i][j - 1] } else { 0 };

        // Large open grids overflow u64; counts wrap
        table[i][j] = from_above.wrapping_add(from_left);
    }

    table
}

/// Counts iceberg-avoiding paths in `O(rows * columns)`.
#[tracing::instrument(skip(grid), fields(rows = grid.rows(), columns = grid.columns()))]
pub fn count_paths_dynamic_programming(grid: &Grid) -> u64 {
    assert!(grid.rows() > 0 && grid.columns() > 0, "grid must be non-empty");

    let (dest_row, dest_column) = grid.destination();
    if !grid.is_open(dest_row, dest_column) {
        tracing::debug!("destination is an iceberg");
        return 0;
    }

    reachability_table(grid)[dest_row][dest_column]
}

#[tracing::instrument]
pub fn process(input: &str) -> Result<String> {
    let grid: Grid = input.parse()?;
    Ok(count_paths_dynamic_programming(&grid).to_string())
}
