pub mod console_renderer;
pub mod grid_generator;

pub use console_renderer::*;
pub use grid_generator::*;
