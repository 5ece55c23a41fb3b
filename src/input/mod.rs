pub mod handler;

pub use handler::{InputEvent, InputHandler, Key};
