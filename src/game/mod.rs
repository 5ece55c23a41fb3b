//! Core game logic module for Snake
//!
//! Board geometry, the snake, the apple and rock, and the per-tick rules that
//! tie them together. Nothing in here touches the terminal; drawing goes
//! through the [`Canvas`](crate::render::Canvas) trait.

pub mod board;
pub mod config;
pub mod direction;
pub mod engine;
pub mod items;
pub mod snake;

// Re-export commonly used types
pub use board::{Board, Cell};
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{Game, TickEvent, TickReport};
pub use items::{Apple, PlacementError, Rock};
pub use snake::{Advance, Snake};
