use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use ratatui::backend::CrosstermBackend;
use std::io::{self, stderr};
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::game::{GameConfig, GameEngine, GameState, InputEvent};
use crate::input::InputHandler;
use crate::metrics::{SessionMetrics, SessionSummary};
use crate::render::{compose, Palette, SceneRenderer, TerminalRenderer};
use crate::terminal::TerminalGuard;

/// One game session played from the keyboard.
///
/// Key events are buffered as they arrive and handed to the engine in one
/// batch per tick. Ticks fire at the configured interval on the current
/// thread; there is no other scheduling.
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    palette: Palette,
    input_handler: InputHandler,
    pending: Vec<InputEvent>,
}

impl PlayMode {
    pub fn new(config: GameConfig, palette: Palette, seed: Option<u64>) -> Self {
        let mut engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            palette,
            input_handler: InputHandler::new(),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Take over the terminal, play until the session ends, give it back
    pub async fn run(&mut self) -> Result<SessionSummary> {
        let _guard = TerminalGuard::acquire()?;
        let mut renderer = TerminalRenderer::new(CrosstermBackend::new(stderr()))?;

        self.run_game_loop(&mut renderer, EventStream::new()).await?;

        Ok(self.summary())
    }

    /// Drive ticks until the session terminates. A closed event stream
    /// counts as a request to quit.
    pub async fn run_game_loop<R, S>(&mut self, renderer: &mut R, mut events: S) -> Result<()>
    where
        R: SceneRenderer,
        S: Stream<Item = io::Result<Event>> + Unpin,
    {
        info!(
            width = self.engine.config().width,
            height = self.engine.config().height,
            apples = ?self.state.targets.cells(),
            "session started"
        );

        let mut tick_timer = interval(self.engine.config().tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; the snake moves one interval later
        tick_timer.tick().await;

        self.metrics.update();
        self.present(renderer)?;

        let mut events_open = true;
        loop {
            tokio::select! {
                biased;

                // Handle Ctrl+C delivered as a signal
                _ = tokio::signal::ctrl_c() => {
                    self.pending.push(InputEvent::Quit);
                }

                // Handle terminal events
                maybe_event = events.next(), if events_open => {
                    match maybe_event {
                        Some(event) => {
                            let event = event.context("Failed to read terminal event")?;
                            self.handle_event(&event);
                        }
                        None => {
                            events_open = false;
                            self.pending.push(InputEvent::Quit);
                        }
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    if !self.tick(renderer)? {
                        break;
                    }
                }
            }
        }

        self.metrics.update();
        info!(summary = %self.summary(), "session ended");

        Ok(())
    }

    fn handle_event(&mut self, event: &Event) {
        if let Some(input) = self.input_handler.handle_event(event) {
            self.pending.push(input);
        }
    }

    /// Advance the game by one tick and draw the result.
    /// Returns false once the session has terminated; nothing is drawn then.
    pub fn tick<R: SceneRenderer>(&mut self, renderer: &mut R) -> Result<bool> {
        let events = std::mem::take(&mut self.pending);
        let result = self.engine.step(&mut self.state, events);

        if result.terminated {
            return Ok(false);
        }

        self.metrics.update();
        self.present(renderer)?;
        Ok(true)
    }

    /// Queue an input for the next tick
    pub fn push_input(&mut self, input: InputEvent) {
        self.pending.push(input);
    }

    fn present<R: SceneRenderer>(&self, renderer: &mut R) -> Result<()> {
        let scene = compose(&self.state, &self.palette, self.metrics.format_time());
        renderer.present(&scene)
    }

    pub fn summary(&self) -> SessionSummary {
        self.metrics.summary(&self.state)
    }
}
