//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it one tick at a time through [`GameEngine::step`].

pub mod action;
pub mod collision;
pub mod config;
pub mod engine;
pub mod grid;
pub mod state;
pub mod targets;

// Re-export commonly used types
pub use action::{Direction, InputEvent};
pub use config::GameConfig;
pub use engine::{GameEngine, StepInfo, StepResult};
pub use grid::{Cell, Grid};
pub use state::{CollisionType, GameState, Phase, Snake, Termination};
pub use targets::TargetSet;
