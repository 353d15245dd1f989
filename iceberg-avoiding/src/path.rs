use crate::grid::Grid;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepDirection {
    Right,
    Down,
}

impl StepDirection {
    /// A set bit moves right, a clear bit moves down.
    #[inline(always)]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            StepDirection::Right
        } else {
            StepDirection::Down
        }
    }
}

/// A partial monotone walk that starts at the grid's origin.
///
/// The walk never leaves the grid and never stands on an iceberg, as long as
/// every [`Path::add_step`] is preceded by a successful [`Path::is_step_valid`].
#[derive(Debug, Clone)]
pub struct Path<'g> {
    grid: &'g Grid,
    row: usize,
    column: usize,
    steps: Vec<StepDirection>,
}

impl<'g> Path<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            row: 0,
            column: 0,
            steps: Vec::with_capacity(grid.steps()),
        }
    }

    pub fn final_row(&self) -> usize {
        self.row
    }

    pub fn final_column(&self) -> usize {
        self.column
    }

    pub fn steps(&self) -> &[StepDirection] {
        &self.steps
    }

    #[inline(always)]
    fn target(&self, direction: StepDirection) -> (usize, usize) {
        match direction {
            StepDirection::Right => (self.row, self.column + 1),
            StepDirection::Down => (self.row + 1, self.column),
        }
    }

    #[inline(always)]
    pub fn is_step_valid(&self, direction: StepDirection) -> bool {
        let (row, column) = self.target(direction);
        self.grid.is_open(row, column)
    }

    #[inline(always)]
    pub fn add_step(&mut self, direction: StepDirection) {
        debug_assert!(self.is_step_valid(direction));
        (self.row, self.column) = self.target(direction);
        self.steps.push(direction);
    }

    pub fn reaches_destination(&self) -> bool {
        (self.row, self.column) == self.grid.destination()
    }
}
