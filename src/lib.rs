//! Grid Snake - a terminal snake game
//!
//! This library provides:
//! - Core game logic (game module): movement, collisions, apples
//! - Keyboard mapping (input module)
//! - Scene composition and TUI rendering (render module)
//! - The interactive session loop (modes module)

pub mod game;
pub mod input;
pub mod logging;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod terminal;
