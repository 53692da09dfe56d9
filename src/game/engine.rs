use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, trace};

use super::{
    action::{Direction, InputEvent},
    collision,
    config::GameConfig,
    grid::{Cell, Grid},
    state::{CollisionType, GameState, Phase, Snake, Termination},
    targets::TargetSet,
};

/// Information about a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInfo {
    /// Apple eaten this step, if any
    pub eaten: Option<Cell>,
    /// Whether a fresh round of apples was generated this step
    pub regenerated: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    /// Additional information about the step
    pub info: StepInfo,
}

impl StepResult {
    fn idle(terminated: bool) -> Self {
        Self {
            terminated,
            info: StepInfo {
                eaten: None,
                regenerated: false,
                collision_type: None,
            },
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose apple placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        Self {
            grid: Grid::from_config(&config),
            config,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a session: the snake lies along the top row heading right,
    /// head at x = length * cell size, and a full round of apples is placed
    pub fn reset(&mut self) -> GameState {
        let length = self.config.initial_snake_length.max(1);
        let head = Cell::new(length as i32 * self.config.cell_size, 0);

        let snake = Snake::new(head, Direction::Right, length, self.config.cell_size);
        let mut targets = TargetSet::new(self.config.target_count);
        self.generate_targets(&mut targets, &snake);

        GameState::new(snake, targets, self.grid)
    }

    /// Execute one tick against the events received since the previous one.
    ///
    /// Order: quit check, heading changes, move, collision, apple.
    pub fn step<I>(&mut self, state: &mut GameState, events: I) -> StepResult
    where
        I: IntoIterator<Item = InputEvent>,
    {
        if !state.is_running() {
            return StepResult::idle(true);
        }

        for event in events {
            match event {
                InputEvent::Quit => {
                    state.phase = Phase::Terminated(Termination::Quit);
                    return StepResult::idle(true);
                }
                InputEvent::Turn(direction) => {
                    if !state.snake.turn(direction) {
                        trace!(?direction, current = ?state.snake.direction, "reversal ignored");
                    }
                }
            }
        }

        state.snake.advance();
        state.ticks += 1;

        if let Some(collision_type) = collision::check(&state.snake, &state.grid) {
            state.phase = Phase::Terminated(Termination::Collision(collision_type));

            return StepResult {
                terminated: true,
                info: StepInfo {
                    eaten: None,
                    regenerated: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        let eaten = state.targets.consume(state.snake.head());
        let mut regenerated = false;

        if let Some(apple) = eaten {
            state.snake.grow();
            state.score += 1;
            debug!(x = apple.x, y = apple.y, length = state.snake.len(), "apple eaten");

            if state.targets.round_complete() {
                self.generate_targets(&mut state.targets, &state.snake);
                regenerated = true;
                debug!(apples = ?state.targets.cells(), "new round of apples");
            }
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                eaten,
                regenerated,
                collision_type: None,
            },
        }
    }

    fn generate_targets(&mut self, targets: &mut TargetSet, snake: &Snake) {
        targets.generate(snake, &self.grid, self.config.max_spawn_attempts, &mut self.rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_INPUT: [InputEvent; 0] = [];

    fn engine() -> GameEngine {
        GameEngine::with_seed(GameConfig::default(), 42)
    }

    /// A state with a known snake and known apples, away from randomness
    fn state_with(snake: Snake, apples: Vec<Cell>) -> GameState {
        GameState::new(snake, TargetSet::from_cells(apples), Grid::new(640, 480, 20))
    }

    fn start_snake() -> Snake {
        Snake::new(Cell::new(60, 0), Direction::Right, 3, 20)
    }

    #[test]
    fn test_reset() {
        let mut engine = engine();
        let state = engine.reset();

        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.ticks, 0);
        assert_eq!(
            state.snake.body,
            vec![Cell::new(60, 0), Cell::new(40, 0), Cell::new(20, 0)]
        );
        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.targets.len(), 3);
        for apple in state.targets.cells() {
            assert!(!state.snake.occupies(*apple));
        }
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        let mut state = state_with(start_snake(), vec![Cell::new(300, 300)]);

        let result = engine.step(&mut state, NO_INPUT);

        assert!(!result.terminated);
        assert_eq!(result.info.eaten, None);
        assert_eq!(state.ticks, 1);
        assert_eq!(
            state.snake.body,
            vec![Cell::new(80, 0), Cell::new(60, 0), Cell::new(40, 0)]
        );
    }

    #[test]
    fn test_apple_consumption() {
        let mut engine = engine();
        let mut state = state_with(
            start_snake(),
            vec![Cell::new(300, 300), Cell::new(80, 0), Cell::new(400, 400)],
        );
        let initial_length = state.snake.len();

        let result = engine.step(&mut state, NO_INPUT);

        assert_eq!(result.info.eaten, Some(Cell::new(80, 0)));
        assert!(!result.info.regenerated);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), initial_length + 1);
        assert!(!state.targets.contains(Cell::new(80, 0)));
        assert_eq!(state.targets.len(), 2);
        assert_eq!(state.targets.consumed(), 1);
    }

    #[test]
    fn test_length_constant_without_apple() {
        let mut engine = engine();
        let mut state = state_with(start_snake(), vec![Cell::new(300, 300)]);

        for _ in 0..10 {
            let before = state.snake.len();
            engine.step(&mut state, NO_INPUT);
            assert_eq!(state.snake.len(), before);
        }
    }

    #[test]
    fn test_only_one_apple_per_tick() {
        let mut engine = engine();
        let mut state = state_with(
            start_snake(),
            vec![Cell::new(80, 0), Cell::new(80, 0), Cell::new(400, 400)],
        );

        engine.step(&mut state, NO_INPUT);

        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.targets.cells(), &[Cell::new(80, 0), Cell::new(400, 400)]);

        // The duplicate is still there, but the head has moved on
        engine.step(&mut state, NO_INPUT);
        assert_eq!(state.snake.len(), 4);
    }

    #[test]
    fn test_round_regenerates_after_last_apple() {
        let mut engine = engine();
        let mut state = state_with(
            start_snake(),
            vec![Cell::new(80, 0), Cell::new(100, 0), Cell::new(120, 0)],
        );

        let first = engine.step(&mut state, NO_INPUT);
        let second = engine.step(&mut state, NO_INPUT);
        assert!(!first.info.regenerated);
        assert!(!second.info.regenerated);
        assert_eq!(state.targets.len(), 1);

        let third = engine.step(&mut state, NO_INPUT);
        assert_eq!(third.info.eaten, Some(Cell::new(120, 0)));
        assert!(third.info.regenerated);

        assert_eq!(state.snake.len(), 6);
        assert_eq!(state.score, 3);
        assert_eq!(state.targets.len(), 3);
        assert_eq!(state.targets.consumed(), 0);
        for apple in state.targets.cells() {
            assert!(!state.snake.occupies(*apple));
        }
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine();
        let mut state = state_with(
            Snake::new(Cell::new(620, 0), Direction::Right, 3, 20),
            vec![Cell::new(300, 300)],
        );

        let result = engine.step(&mut state, NO_INPUT);

        assert!(result.terminated);
        assert_eq!(state.snake.head(), Cell::new(640, 0));
        assert_eq!(result.info.collision_type, Some(CollisionType::Wall));
        assert_eq!(
            state.phase,
            Phase::Terminated(Termination::Collision(CollisionType::Wall))
        );
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine();

        // Snake at (100, 100) going Right with length 5
        let snake = Snake::new(Cell::new(100, 100), Direction::Right, 5, 20);
        let mut state = state_with(snake, vec![Cell::new(400, 400)]);

        engine.step(&mut state, [InputEvent::Turn(Direction::Down)]);
        engine.step(&mut state, [InputEvent::Turn(Direction::Left)]);
        let result = engine.step(&mut state, [InputEvent::Turn(Direction::Up)]);

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_collision_skips_apple_check() {
        let mut engine = engine();
        // Apple placed off-board where the head lands; it must not be eaten
        let mut state = state_with(
            Snake::new(Cell::new(620, 0), Direction::Right, 3, 20),
            vec![Cell::new(640, 0)],
        );

        let result = engine.step(&mut state, NO_INPUT);

        assert!(result.terminated);
        assert_eq!(result.info.eaten, None);
        assert_eq!(state.snake.len(), 3);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = engine();
        let mut state = state_with(start_snake(), vec![Cell::new(300, 300)]);

        engine.step(&mut state, [InputEvent::Turn(Direction::Left)]);

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Cell::new(80, 0));
    }

    #[test]
    fn test_turns_apply_in_order() {
        let mut engine = engine();
        let mut state = state_with(
            Snake::new(Cell::new(100, 100), Direction::Right, 3, 20),
            vec![Cell::new(400, 400)],
        );

        // Down is taken, then Right is checked against Down and taken too
        engine.step(
            &mut state,
            [
                InputEvent::Turn(Direction::Down),
                InputEvent::Turn(Direction::Up),
                InputEvent::Turn(Direction::Right),
            ],
        );

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Cell::new(120, 100));
    }

    #[test]
    fn test_quit_supersedes_tick() {
        let mut engine = engine();
        let mut state = state_with(start_snake(), vec![Cell::new(300, 300)]);

        let result = engine.step(
            &mut state,
            [InputEvent::Turn(Direction::Down), InputEvent::Quit],
        );

        assert!(result.terminated);
        assert_eq!(state.phase, Phase::Terminated(Termination::Quit));
        assert_eq!(state.ticks, 0);
        assert_eq!(state.snake.head(), Cell::new(60, 0));
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = engine();
        let mut state = engine.reset();
        state.phase = Phase::Terminated(Termination::Quit);
        let before = state.clone();

        let result = engine.step(&mut state, [InputEvent::Turn(Direction::Down)]);

        assert!(result.terminated);
        assert_eq!(state, before);
    }
}
