pub mod canvas;
pub mod renderer;

pub use canvas::{Canvas, Rgb, BACKGROUND};
pub use renderer::render_scene;
