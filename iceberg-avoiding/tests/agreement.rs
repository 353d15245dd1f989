use iceberg_avoiding::dyn_prog::count_paths_dynamic_programming;
use iceberg_avoiding::exhaustive::count_paths_exhaustive;
use iceberg_avoiding::grid::{Cell, Grid};
use miette::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

fn random_grid(seed: u64) -> Result<Grid> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows = rng.random_range(1..=7);
    let columns = rng.random_range(1..=7);
    let density = rng.random_range(0.0..0.5);

    let mut grid = Grid::random(rows, columns, density, &mut rng)?;
    if rng.random_bool(0.1) {
        let (dest_row, dest_column) = grid.destination();
        grid.set(dest_row, dest_column, Cell::Iceberg);
    }
    Ok(grid)
}

#[test]
fn counters_agree_on_random_grids() -> Result<()> {
    (0..2_000u64).into_par_iter().try_for_each(|seed| -> Result<()> {
        let grid = random_grid(seed)?;
        let exhaustive = count_paths_exhaustive(&grid);
        let dynamic = count_paths_dynamic_programming(&grid);
        ensure!(
            exhaustive == dynamic,
            "seed {}: exhaustive {} vs dynamic {}\n{}",
            seed,
            exhaustive,
            dynamic,
            grid
        );
        Ok(())
    })
}

#[test]
fn blocked_destination_is_zero_at_every_size() -> Result<()> {
    for rows in 1..=6 {
        for columns in 1..=6 {
            let mut grid = Grid::new(rows, columns)?;
            grid.set(rows - 1, columns - 1, Cell::Iceberg);
            assert_eq!(count_paths_exhaustive(&grid), 0);
            assert_eq!(count_paths_dynamic_programming(&grid), 0);
        }
    }
    Ok(())
}

#[test]
fn walls_block_everything() -> Result<()> {
    let row_wall: Grid = "......
XXXXXX
......"
        .parse()?;
    let column_wall: Grid = "..X..
..X..
..X..
..X.."
        .parse()?;

    for grid in [row_wall, column_wall] {
        assert_eq!(count_paths_exhaustive(&grid), 0);
        assert_eq!(count_paths_dynamic_programming(&grid), 0);
    }
    Ok(())
}

#[test]
fn bundled_input_agrees() -> Result<()> {
    let grid: Grid = include_str!("../input1.txt").parse()?;
    assert_eq!(
        count_paths_exhaustive(&grid),
        count_paths_dynamic_programming(&grid)
    );
    Ok(())
}
