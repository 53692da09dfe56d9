use super::action::Direction;
use super::grid::{Cell, Grid};
use super::targets::TargetSet;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Cell>,
    /// Current direction of movement
    pub direction: Direction,
    /// Distance covered by one move, in pixels
    step: i32,
}

impl Snake {
    /// Create a snake whose head sits at `head`, with the remaining segments
    /// laid out behind it, opposite to `direction`
    pub fn new(head: Cell, direction: Direction, length: usize, step: i32) -> Self {
        let mut body = vec![head];

        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx * step, -dy * step);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self {
            body,
            direction,
            step,
        }
    }

    /// Build a snake from explicit segments, head first
    pub fn from_cells(body: Vec<Cell>, direction: Direction, step: i32) -> Self {
        assert!(!body.is_empty(), "a snake needs at least one segment");
        Self {
            body,
            direction,
            step,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Cell] {
        &self.body[1..]
    }

    /// Check if cell collides with snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().contains(&cell)
    }

    /// Check if any segment, head included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Change heading unless it would reverse the snake.
    /// Returns whether the new heading was taken.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Move one cell forward: prepend the new head, drop the tail
    pub fn advance(&mut self) {
        let new_head = self.head().stepped(self.direction, self.step);
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Append a copy of the tail; it spreads out as the snake keeps moving
    pub fn grow(&mut self) {
        let tail = self.tail();
        self.body.push(tail);
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the board
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Collision(CollisionType),
    Quit,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated(Termination),
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub targets: TargetSet,
    pub grid: Grid,
    /// Apples eaten since the session started
    pub score: u32,
    pub ticks: u32,
    pub phase: Phase,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, targets: TargetSet, grid: Grid) -> Self {
        Self {
            snake,
            targets,
            grid,
            score: 0,
            ticks: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Reason the session ended, if it has
    pub fn termination(&self) -> Option<Termination> {
        match self.phase {
            Phase::Running => None,
            Phase::Terminated(reason) => Some(reason),
        }
    }
}
