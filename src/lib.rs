//! Rock Snake - terminal Snake on a wrapping board
//!
//! This library provides:
//! - Core game logic: board, snake, apple, rock and tick rules (game module)
//! - Keyboard mapping (input module)
//! - Frame buffer and TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive tick loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
