//! Single-cell items on the board: the apple the snake chases and the rock it
//! must avoid.

use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use super::board::{Board, Cell};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("no free cell left on a board of {cells} cells")]
    BoardFull { cells: usize },
}

/// Pick a uniformly random board cell outside `excluded`
///
/// Fails instead of looping forever when every cell is excluded.
pub fn random_free_cell<R: Rng + ?Sized>(
    board: &Board,
    excluded: &HashSet<Cell>,
    rng: &mut R,
) -> Result<Cell, PlacementError> {
    let blocked = excluded.iter().filter(|&&cell| board.contains(cell)).count();
    if blocked >= board.cell_count() {
        return Err(PlacementError::BoardFull {
            cells: board.cell_count(),
        });
    }

    loop {
        let cell = Cell::new(
            rng.gen_range(0..board.cols()),
            rng.gen_range(0..board.rows()),
        );
        if !excluded.contains(&cell) {
            return Ok(cell);
        }
    }
}

/// The apple: eating it makes the snake one cell longer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Move to a random cell not covered by `snake` or `rock`
    pub fn randomize_position<'a, R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        snake: impl IntoIterator<Item = &'a Cell>,
        rock: Option<Cell>,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        let mut excluded: HashSet<Cell> = snake.into_iter().copied().collect();
        excluded.extend(rock);
        self.position = random_free_cell(board, &excluded, rng)?;
        Ok(())
    }
}

/// The rock: running into it ends the current run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rock {
    pub position: Cell,
}

impl Rock {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Move to a random cell not covered by `snake` or the apple
    pub fn randomize_position<'a, R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        snake: impl IntoIterator<Item = &'a Cell>,
        apple: Cell,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        let mut excluded: HashSet<Cell> = snake.into_iter().copied().collect();
        excluded.insert(apple);
        self.position = random_free_cell(board, &excluded, rng)?;
        Ok(())
    }
}
