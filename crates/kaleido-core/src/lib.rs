pub mod color;
pub mod geometry;
pub mod scene;
pub mod sprite;
pub mod ticker;

pub use color::Color;
pub use scene::Scene;
pub use sprite::{ShapeKind, Sprite};
pub use ticker::{Ticker, TICK_PERIOD};
