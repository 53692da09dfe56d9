pub mod renderer;
pub mod scene;

pub use renderer::{Renderer, SceneRenderer, TerminalRenderer};
pub use scene::{compose, Palette, Rgb, Scene, Shape, ShapeKind};
