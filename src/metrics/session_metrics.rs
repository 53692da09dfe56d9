use std::fmt;
use std::time::{Duration, Instant};

use crate::game::{CollisionType, GameState, Termination};

/// Wall-clock bookkeeping for one session
pub struct SessionMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn format_time(&self) -> String {
        format_duration(self.elapsed_time)
    }

    /// Snapshot of the session for the end-of-game report
    pub fn summary(&self, state: &GameState) -> SessionSummary {
        SessionSummary {
            termination: state.termination(),
            score: state.score,
            length: state.snake.len(),
            ticks: state.ticks,
            elapsed: self.elapsed_time,
        }
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn format_duration(elapsed: Duration) -> String {
    let total_secs = elapsed.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

/// How a session went, printed once the terminal is restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub termination: Option<Termination>,
    pub score: u32,
    pub length: usize,
    pub ticks: u32,
    pub elapsed: Duration,
}

impl SessionSummary {
    pub fn reason(&self) -> &'static str {
        match self.termination {
            Some(Termination::Collision(CollisionType::Wall)) => "hit the wall",
            Some(Termination::Collision(CollisionType::SelfCollision)) => "bit itself",
            Some(Termination::Quit) => "quit",
            None => "still running",
        }
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game over ({}): {} apples, length {}, {} ticks in {}",
            self.reason(),
            self.score,
            self.length,
            self.ticks,
            format_duration(self.elapsed)
        )
    }
}
