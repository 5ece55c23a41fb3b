//! Fixed colours of the game.

use super::canvas::Rgb;

pub const BACKGROUND: Rgb = Rgb(0, 0, 0);
pub const BORDER: Rgb = Rgb(93, 216, 228);
pub const APPLE: Rgb = Rgb(255, 0, 0);
pub const ROCK: Rgb = Rgb(128, 128, 128);
pub const SNAKE: Rgb = Rgb(0, 255, 0);
