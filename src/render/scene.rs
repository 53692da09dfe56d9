//! What a frame shows, independent of where it is drawn.
//!
//! A [`Scene`] is a background plus an ordered list of cell-sized shapes in
//! board pixels. Later shapes are painted over earlier ones.

use crate::game::{Cell, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

/// Outline a shape is drawn with; purely cosmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeKind {
    #[default]
    Rect,
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Top-left corner, in board pixels
    pub cell: Cell,
    pub fill: Rgb,
    pub outline: Option<Rgb>,
}

/// Numbers shown next to the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub length: usize,
    pub elapsed: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
    pub background: Rgb,
    pub shapes: Vec<Shape>,
    pub hud: Hud,
}

/// Colours and apple outline used when composing a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub snake: Rgb,
    pub apple: Rgb,
    pub apple_outline: Rgb,
    pub apple_shape: ShapeKind,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            snake: Rgb::GREEN,
            apple: Rgb::RED,
            apple_outline: Rgb::BLACK,
            apple_shape: ShapeKind::Rect,
        }
    }
}

impl Palette {
    pub fn with_apple_shape(apple_shape: ShapeKind) -> Self {
        Self {
            apple_shape,
            ..Default::default()
        }
    }
}

/// Build the full frame for `state`: snake segments first, apples on top
pub fn compose(state: &GameState, palette: &Palette, elapsed: String) -> Scene {
    let snake = state.snake.body.iter().map(|cell| Shape {
        kind: ShapeKind::Rect,
        cell: *cell,
        fill: palette.snake,
        outline: None,
    });

    let apples = state.targets.cells().iter().map(|cell| Shape {
        kind: palette.apple_shape,
        cell: *cell,
        fill: palette.apple,
        outline: Some(palette.apple_outline),
    });

    Scene {
        width: state.grid.width,
        height: state.grid.height,
        cell_size: state.grid.cell_size,
        background: palette.background,
        shapes: snake.chain(apples).collect(),
        hud: Hud {
            score: state.score,
            length: state.snake.len(),
            elapsed,
        },
    }
}
