use std::collections::VecDeque;

use rand::Rng;

use super::board::{Board, Cell};
use super::direction::Direction;

/// Outcome of moving the snake one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The head moved into a free cell
    Moved,
    /// The next head cell is part of the body; nothing was changed
    Collided,
}

/// The player-controlled snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Cell>,
    /// Current direction of movement
    direction: Direction,
    /// Direction requested since the last tick
    pending_direction: Option<Direction>,
    /// Length the body grows towards
    target_length: usize,
    /// Cell vacated by the tail on the last move
    last_removed: Option<Cell>,
}

impl Snake {
    /// Create a one-cell snake at `head`
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: VecDeque::from([head]),
            direction,
            pending_direction: None,
            target_length: 1,
            last_removed: None,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_segments(
        segments: impl IntoIterator<Item = Cell>,
        direction: Direction,
    ) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() {
            return None;
        }
        let target_length = body.len();
        Some(Self {
            body,
            direction,
            pending_direction: None,
            target_length,
            last_removed: None,
        })
    }

    pub fn head(&self) -> Cell {
        // The body is never empty: every constructor and `reset` leave one cell.
        self.body[0]
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn last_removed(&self) -> Option<Cell> {
        self.last_removed
    }

    /// Check if a cell is covered by any segment, head included
    #[cfg(test)]
    pub(crate) fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Buffer a turn for the next tick; a U-turn is ignored
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Turn into the buffered direction, if any
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Lengthen the snake by one cell, taking effect on the next move
    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// True when the last successful move kept the tail in place
    pub fn grew_this_tick(&self) -> bool {
        self.last_removed.is_none()
    }

    /// Move one cell in the current direction, wrapping at the board edges
    ///
    /// A move into the body is rejected and leaves the snake untouched. The
    /// tail does not count when it is about to move out of the way.
    pub fn advance(&mut self, board: &Board) -> Advance {
        let new_head = board.step(self.head(), self.direction);

        let tail_vacates = self.body.len() >= self.target_length;
        let checked = if tail_vacates {
            self.body.len() - 1
        } else {
            self.body.len()
        };
        if self.body.iter().take(checked).any(|&cell| cell == new_head) {
            return Advance::Collided;
        }

        self.body.push_front(new_head);
        self.last_removed = if self.body.len() > self.target_length {
            self.body.pop_back()
        } else {
            None
        };

        Advance::Moved
    }

    /// Shrink back to a single cell at `spawn`, heading somewhere random
    pub fn reset<R: Rng + ?Sized>(&mut self, spawn: Cell, rng: &mut R) {
        self.body.clear();
        self.body.push_back(spawn);
        self.target_length = 1;
        self.direction = Direction::random(rng);
        self.pending_direction = None;
        self.last_removed = None;
    }
}
