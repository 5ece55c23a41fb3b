pub mod canvas;
pub mod drawable;
pub mod palette;
pub mod renderer;

pub use canvas::{Canvas, FrameBuffer, Rgb, Slot};
pub use drawable::{Drawable, erase_vacated};
pub use renderer::Renderer;
