use std::ops::ControlFlow;

use log::{debug, info};
use rand::Rng;

use super::{
    board::{Board, Cell},
    config::GameConfig,
    direction::Direction,
    items::{Apple, PlacementError, Rock},
    snake::{Advance, Snake},
};
use crate::input::InputEvent;
use crate::render::{Canvas, Drawable, erase_vacated, palette};

/// What happened to the snake during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Plain move into a free cell
    Moved,
    /// The head landed on the apple
    Ate,
    /// The snake tried to move into itself and was reset
    BitSelf,
    /// The head landed on the rock and the snake was reset
    HitRock,
}

impl TickEvent {
    pub fn is_loss(&self) -> bool {
        matches!(self, TickEvent::BitSelf | TickEvent::HitRock)
    }
}

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub event: TickEvent,
    /// Length the snake had reached before a loss, otherwise its target length
    pub length: usize,
}

/// The game state and the per-tick rules that drive it
pub struct Game<R: Rng> {
    board: Board,
    snake: Snake,
    apple: Apple,
    rock: Option<Rock>,
    rng: R,
    needs_clear: bool,
}

impl<R: Rng> Game<R> {
    /// Start a game: snake in the centre heading right, apple and rock placed
    pub fn new(config: &GameConfig, mut rng: R) -> Result<Self, PlacementError> {
        let board = Board::from_config(config);
        let snake = Snake::new(board.center(), Direction::Right);

        let mut apple = Apple::new(board.center());
        apple.randomize_position(&board, snake.body(), None, &mut rng)?;

        let rock = if config.obstacle {
            let mut rock = Rock::new(board.center());
            rock.randomize_position(&board, snake.body(), apple.position, &mut rng)?;
            Some(rock)
        } else {
            None
        };

        info!(
            "New game on a {}x{} board (rock: {})",
            board.cols(),
            board.rows(),
            rock.is_some()
        );

        Ok(Self {
            board,
            snake,
            apple,
            rock,
            rng,
            needs_clear: true,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn rock(&self) -> Option<&Rock> {
        self.rock.as_ref()
    }

    /// Put the apple on a given cell
    pub fn place_apple(&mut self, cell: Cell) {
        self.apple.position = self.board.wrap(cell);
    }

    /// Put the rock on a given cell, if the game has one
    pub fn place_rock(&mut self, cell: Cell) {
        let cell = self.board.wrap(cell);
        if let Some(rock) = self.rock.as_mut() {
            rock.position = cell;
        }
    }

    /// Feed one input event; `Break` means the player asked to quit
    pub fn handle_input(&mut self, event: InputEvent) -> ControlFlow<()> {
        match event {
            InputEvent::Quit => ControlFlow::Break(()),
            InputEvent::KeyDown(key) => {
                self.snake.set_pending_direction(key.direction());
                ControlFlow::Continue(())
            }
        }
    }

    /// Advance the game by one tick
    pub fn update(&mut self) -> Result<TickReport, PlacementError> {
        self.snake.apply_pending_direction();

        if self.snake.advance(&self.board) == Advance::Collided {
            let length = self.snake.len();
            debug!("Snake bit itself at {:?}", self.snake.head());
            self.restart()?;
            return Ok(TickReport {
                event: TickEvent::BitSelf,
                length,
            });
        }

        let head = self.snake.head();
        let mut event = TickEvent::Moved;

        if head == self.apple.position {
            self.snake.grow();
            let rock = self.rock.map(|rock| rock.position);
            self.apple
                .randomize_position(&self.board, self.snake.body(), rock, &mut self.rng)?;
            debug!(
                "Apple eaten, target length {}; next apple at {:?}",
                self.snake.target_length(),
                self.apple.position
            );
            event = TickEvent::Ate;
        }

        if self.rock.is_some_and(|rock| rock.position == head) {
            let length = self.snake.len();
            debug!("Snake hit the rock at {:?}", head);
            self.restart()?;
            return Ok(TickReport {
                event: TickEvent::HitRock,
                length,
            });
        }

        Ok(TickReport {
            event,
            length: self.snake.target_length(),
        })
    }

    /// Draw the current state; clears the whole surface after a reset
    pub fn draw(&mut self, canvas: &mut dyn Canvas) {
        if std::mem::take(&mut self.needs_clear) {
            canvas.fill(palette::BACKGROUND);
        }

        erase_vacated(&self.snake, &self.board, canvas);
        self.apple.draw(&self.board, canvas);
        if let Some(rock) = &self.rock {
            rock.draw(&self.board, canvas);
        }
        self.snake.draw(&self.board, canvas);
    }

    /// Reset the snake to the centre and move the apple and rock out of its way
    fn restart(&mut self) -> Result<(), PlacementError> {
        self.snake.reset(self.board.center(), &mut self.rng);
        self.needs_clear = true;

        let rock = self.rock.map(|rock| rock.position);
        self.apple
            .randomize_position(&self.board, self.snake.body(), rock, &mut self.rng)?;
        if let Some(rock) = self.rock.as_mut() {
            rock.randomize_position(
                &self.board,
                self.snake.body(),
                self.apple.position,
                &mut self.rng,
            )?;
        }

        info!(
            "Snake reset at {:?}, heading {:?}",
            self.snake.head(),
            self.snake.direction()
        );
        Ok(())
    }
}
