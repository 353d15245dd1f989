use chumsky::prelude::*;
use miette::*;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Open,
    Iceberg,
}

impl Cell {
    fn glyph(self) -> char {
        match self {
            Cell::Open => '.',
            Cell::Iceberg => 'X',
        }
    }
}

/// A rectangular field of open water and icebergs, stored row-major.
///
/// A `Grid` always has at least one row and one column; every constructor
/// rejects empty dimensions. The origin is the top-left cell `(0, 0)` and the
/// destination is the bottom-right cell `(rows - 1, columns - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an iceberg-free grid.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        ensure!(
            rows > 0 && columns > 0,
            "Grid must be non-empty, got {}x{}",
            rows,
            columns
        );

        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Open; rows * columns],
        })
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        ensure!(
            height > 0 && width > 0,
            "Grid must be non-empty, got {}x{}",
            height,
            width
        );

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(miette!(
                "Ragged grid: row {} has {} cells, expected {}",
                y,
                row.len(),
                width
            ));
        }

        Ok(Self {
            rows: height,
            columns: width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Generates a grid where every cell is independently an iceberg with
    /// probability `iceberg_density`. Origin and destination stay open.
    pub fn random<R: Rng>(
        rows: usize,
        columns: usize,
        iceberg_density: f64,
        rng: &mut R,
    ) -> Result<Self> {
        ensure!(
            (0.0..=1.0).contains(&iceberg_density),
            "Iceberg density must be within [0, 1], got {}",
            iceberg_density
        );

        let mut grid = Self::new(rows, columns)?;
        for cell in grid.cells.iter_mut() {
            if rng.random_bool(iceberg_density) {
                *cell = Cell::Iceberg;
            }
        }

        let (dest_row, dest_column) = grid.destination();
        grid.set(0, 0, Cell::Open);
        grid.set(dest_row, dest_column, Cell::Open);

        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the cell at `(row, column)`, or `None` if out of bounds.
    #[inline(always)]
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.rows || column >= self.columns {
            None
        } else {
            Some(self.cells[row * self.columns + column])
        }
    }

    /// True when `(row, column)` is inside the grid and not an iceberg.
    #[inline(always)]
    pub fn is_open(&self, row: usize, column: usize) -> bool {
        self.get(row, column) == Some(Cell::Open)
    }

    /// Panics if `(row, column)` is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        assert!(
            row < self.rows && column < self.columns,
            "({row}, {column}) is outside a {}x{} grid",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column] = cell;
    }

    pub fn destination(&self) -> (usize, usize) {
        (self.rows - 1, self.columns - 1)
    }

    /// Number of moves in any monotone path from origin to destination.
    pub fn steps(&self) -> usize {
        self.rows + self.columns - 2
    }
}

fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Vec<Cell>>, extra::Err<Rich<'a, char>>> {
    let cell = just('.')
        .to(Cell::Open)
        .or(one_of("X#").to(Cell::Iceberg));

    cell.repeated()
        .collect::<Vec<_>>()
        .separated_by(text::newline())
        .allow_trailing()
        .collect::<Vec<_>>()
        // Trailing newlines show up as empty rows
        .map(|rows: Vec<Vec<Cell>>| rows.into_iter().filter(|r| !r.is_empty()).collect())
}

impl FromStr for Grid {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self> {
        let rows = parser()
            .parse(input)
            .into_result()
            .map_err(|e| miette!("Parse failed: {:?}", e))?;

        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[test]
    fn it_parses() -> Result<()> {
        let grid: Grid = "..X.
.X..
....
"
        .parse()?;

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.get(0, 2), Some(Cell::Iceberg));
        assert_eq!(grid.get(1, 1), Some(Cell::Iceberg));
        assert_eq!(grid.get(2, 3), Some(Cell::Open));
        assert_eq!(grid.destination(), (2, 3));
        assert_eq!(grid.steps(), 5);
        Ok(())
    }

    #[test]
    fn hash_is_an_iceberg_too() -> Result<()> {
        let grid: Grid = ".#\n..".parse()?;
        assert!(!grid.is_open(0, 1));
        Ok(())
    }

    #[test]
    fn display_round_trips() -> Result<()> {
        let input = "...X\nX...\n..X.\n";
        let grid: Grid = input.parse()?;
        assert_eq!(input, grid.to_string());
        assert_eq!(grid, grid.to_string().parse::<Grid>()?);
        Ok(())
    }

    #[rstest]
    #[case("")]
    #[case("\n\n")]
    #[case("..\n...")]
    #[case("..\n.o")]
    fn rejects_bad_input(#[case] input: &str) {
        assert!(input.parse::<Grid>().is_err());
    }

    #[rstest]
    #[case(0, 3)]
    #[case(3, 0)]
    #[case(0, 0)]
    fn rejects_empty_dimensions(#[case] rows: usize, #[case] columns: usize) {
        assert!(Grid::new(rows, columns).is_err());
    }

    #[test]
    fn out_of_bounds_is_not_open() -> Result<()> {
        let grid = Grid::new(2, 3)?;
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.is_open(5, 5));
        assert!(grid.is_open(1, 2));
        Ok(())
    }

    #[test]
    #[should_panic]
    fn set_out_of_bounds_panics() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(2, 0, Cell::Iceberg);
    }

    #[test]
    fn random_keeps_corners_open() -> Result<()> {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = Grid::random(6, 9, 1.0, &mut rng)?;
        let (dest_row, dest_column) = grid.destination();

        assert!(grid.is_open(0, 0));
        assert!(grid.is_open(dest_row, dest_column));
        assert!(!grid.is_open(3, 4));
        Ok(())
    }

    #[test]
    fn random_is_reproducible() -> Result<()> {
        let a = Grid::random(8, 8, 0.3, &mut StdRng::seed_from_u64(42))?;
        let b = Grid::random(8, 8, 0.3, &mut StdRng::seed_from_u64(42))?;
        assert_eq!(a, b);
        Ok(())
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.5)]
    fn random_rejects_bad_density(#[case] density: f64) {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(Grid::random(3, 3, density, &mut rng).is_err());
    }
}
