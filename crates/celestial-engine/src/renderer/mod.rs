pub mod canvas;
pub mod instance;

pub use canvas::{Canvas, Color};
pub use instance::{DrawSplit, RenderBuffer, RenderInstance};
