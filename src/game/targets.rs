//! Apples on the board.
//!
//! A round places a fixed number of apples at once. Eaten apples are removed
//! and not replaced until the whole round has been eaten, at which point a
//! fresh round is generated.
//!
//! Placement only avoids the snake. Two apples of the same round may land on
//! the same cell; the game keeps that behaviour.

use rand::Rng;
use tracing::warn;

use super::grid::{Cell, Grid};
use super::state::Snake;

/// The apples currently in play and how many of this round have been eaten
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSet {
    cells: Vec<Cell>,
    capacity: usize,
    consumed: usize,
}

impl TargetSet {
    /// An empty set that generates `capacity` apples per round
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            capacity,
            consumed: 0,
        }
    }

    /// A set holding exactly the given apples, as if freshly generated
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self {
            capacity: cells.len(),
            cells,
            consumed: 0,
        }
    }

    /// Replace the current apples with a full new round.
    ///
    /// Each apple is drawn uniformly from the board until it misses the snake,
    /// giving up after `max_attempts` draws and taking the first free cell in
    /// row-major order instead. If the snake covers the whole board the apple
    /// is skipped.
    pub fn generate<R: Rng>(
        &mut self,
        snake: &Snake,
        grid: &Grid,
        max_attempts: usize,
        rng: &mut R,
    ) {
        self.cells.clear();
        self.consumed = 0;

        for _ in 0..self.capacity {
            match Self::sample_free_cell(snake, grid, max_attempts, rng)
                .or_else(|| Self::first_free_cell(snake, grid))
            {
                Some(cell) => self.cells.push(cell),
                None => warn!("no free cell left for an apple"),
            }
        }
    }

    fn sample_free_cell<R: Rng>(
        snake: &Snake,
        grid: &Grid,
        max_attempts: usize,
        rng: &mut R,
    ) -> Option<Cell> {
        let (columns, rows) = (grid.columns(), grid.rows());
        if columns <= 0 || rows <= 0 {
            return None;
        }

        for _ in 0..max_attempts {
            let cell = grid.cell_at(rng.gen_range(0..columns), rng.gen_range(0..rows));
            if !snake.occupies(cell) {
                return Some(cell);
            }
        }

        warn!(max_attempts, "apple placement fell back to a board scan");
        None
    }

    fn first_free_cell(snake: &Snake, grid: &Grid) -> Option<Cell> {
        grid.cells().find(|cell| !snake.occupies(*cell))
    }

    /// Remove the first apple on `head`, counting it toward the round.
    /// At most one apple is eaten per call.
    pub fn consume(&mut self, head: Cell) -> Option<Cell> {
        let index = self.cells.iter().position(|cell| *cell == head)?;
        self.consumed += 1;
        Some(self.cells.remove(index))
    }

    /// True once every apple of the round has been eaten
    pub fn round_complete(&self) -> bool {
        self.consumed >= self.capacity
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Apples eaten in the current round
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
