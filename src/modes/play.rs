use anyhow::{bail, Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Command, Direction, GameConfig, GameEngine, GameState};
use crate::input::{resolve_key, KeyAction};
use crate::metrics::SessionMetrics;
use crate::render::Renderer;

/// Rows taken by the score line and the control legend around the playground.
const PANEL_ROWS: u16 = 2;

/// The interactive tick loop: one logical thread of control multiplexing the
/// key-event stream, the game tick and the render clock.
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: SessionMetrics,
    renderer: Renderer,
    pending: Option<Direction>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: SessionMetrics::new(),
            renderer: Renderer::new(),
            pending: None,
            should_quit: false,
        }
    }

    /// Score of the most recent run, for the exit summary.
    pub fn final_score(&self) -> u32 {
        self.state.score
    }

    pub async fn run(&mut self) -> Result<()> {
        // the playground has fixed dimensions; refuse terminals it cannot fit
        let (cols, rows) = crossterm::terminal::size().context("Failed to query terminal size")?;
        let min_cols = self.engine.config().playground_width as u16;
        let min_rows = self.engine.config().playground_height as u16 + PANEL_ROWS;
        if cols < min_cols || rows < min_rows {
            bail!("Terminal is {cols}x{rows}; the playground needs at least {min_cols}x{min_rows}");
        }

        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_loop(&mut terminal).await;

        self.restore_terminal(&mut terminal)?;

        result
    }

    async fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut events = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());
        let mut render_timer = interval(Duration::from_millis(33));

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    if self.state.alive {
                        self.advance();
                    }
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            if key.kind != KeyEventKind::Press {
                return;
            }

            match resolve_key(key) {
                // last press before a tick wins; the tick consumes one steer
                KeyAction::Steer(direction) => self.pending = Some(direction),
                KeyAction::Restart => self.restart(),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::Ignored => {}
            }
        }
    }

    fn advance(&mut self) {
        let command = self.pending.take().map(Command::Steer).unwrap_or(Command::Continue);
        let result = self.engine.step(&mut self.state, command);

        if result.terminated {
            self.metrics.on_game_over(self.state.score);
        }
    }

    fn restart(&mut self) {
        self.state = self.engine.reset();
        self.metrics.on_game_start();
        self.pending = None;
    }

    fn restore_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_play_mode_starts_a_live_run() {
        let mode = PlayMode::new(GameConfig::default());
        assert!(mode.state.alive);
        assert_eq!(mode.state.score, 0);
        assert_eq!(mode.final_score(), 0);
    }

    #[test]
    fn restart_seeds_a_fresh_run() {
        let mut mode = PlayMode::new(GameConfig::default());
        mode.state.score = 10;
        mode.state.alive = false;
        mode.pending = Some(Direction::Down);

        mode.restart();

        assert_eq!(mode.state.score, 0);
        assert!(mode.state.alive);
        assert_eq!(mode.pending, None);
    }

    #[test]
    fn advance_consumes_the_pending_steer() {
        let mut mode = PlayMode::new(GameConfig::default());
        mode.pending = Some(Direction::Down);

        mode.advance();

        assert_eq!(mode.state.direction, Direction::Down);
        assert_eq!(mode.pending, None);
    }
}
