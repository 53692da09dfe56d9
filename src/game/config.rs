use std::time::Duration;

/// Board width in pixels
pub const WINDOW_WIDTH: i32 = 640;
/// Board height in pixels
pub const WINDOW_HEIGHT: i32 = 480;
/// Side of one cell (snake segment or apple) in pixels
pub const CELL_SIZE: i32 = 20;
/// Number of segments the snake starts with
pub const INITIAL_LENGTH: usize = 3;
/// Apples in play per round
pub const TARGET_COUNT: usize = 3;
/// Delay between two game ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
/// Random draws per apple before falling back to a board scan
pub const MAX_SPAWN_ATTEMPTS: usize = 1024;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the board in pixels
    pub width: i32,
    /// Height of the board in pixels
    pub height: i32,
    /// Cell size in pixels
    pub cell_size: i32,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Apples generated per round
    pub target_count: usize,
    /// Time between ticks
    pub tick_interval: Duration,
    /// Rejection-sampling cap per apple
    pub max_spawn_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            initial_snake_length: INITIAL_LENGTH,
            target_count: TARGET_COUNT,
            tick_interval: TICK_INTERVAL,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board, keeping every other constant
    pub fn with_board(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}
