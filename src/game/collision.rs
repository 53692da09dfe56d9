//! Terminal-condition checks, run on the snake right after it moves.

use super::grid::Grid;
use super::state::{CollisionType, Snake};

/// Which rule, if any, ends the game for this snake.
/// The head is allowed off the board here; leaving it is what `Wall` reports.
pub fn check(snake: &Snake, grid: &Grid) -> Option<CollisionType> {
    let head = snake.head();

    if !grid.contains(head) {
        return Some(CollisionType::Wall);
    }

    if snake.collides_with_body(head) {
        return Some(CollisionType::SelfCollision);
    }

    None
}

/// True when the snake is off the board or biting itself
pub fn is_terminal(snake: &Snake, grid: &Grid) -> bool {
    check(snake, grid).is_some()
}
