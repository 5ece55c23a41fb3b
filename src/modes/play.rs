use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{Game, GameConfig};
use crate::input::InputHandler;
use crate::metrics::SessionStats;
use crate::render::{FrameBuffer, Renderer};

pub struct PlayMode {
    game: Game<StdRng>,
    buffer: FrameBuffer,
    stats: SessionStats,
    renderer: Renderer,
    input_handler: InputHandler,
    tick_interval: Duration,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let game = Game::new(&config, StdRng::from_entropy())
            .context("Failed to set up the board")?;
        let buffer = FrameBuffer::new(game.board());

        Ok(Self {
            game,
            buffer,
            stats: SessionStats::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            tick_interval: config.tick_interval(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.run_game_loop(&mut terminal).await;
        let cleanup = restore_terminal(&mut terminal);

        info!(
            "Session over after {}: best length {}, {} resets",
            self.stats.format_time(),
            self.stats.best_length,
            self.stats.losses
        );

        finish(result, cleanup)
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.tick_interval);
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => {
                            warn!("Terminal event stream closed");
                            self.should_quit = true;
                        }
                    }
                }

                // Game tick
                _ = tick_timer.tick() => {
                    self.tick(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("Quit requested");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        if let Some(input) = self.input_handler.handle_key_event(key) {
            if self.game.handle_input(input).is_break() {
                self.should_quit = true;
            }
        }
    }

    /// One game tick: update the state, then draw and present it
    fn tick<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let report = self.game.update().context("Failed to update game")?;
        self.stats.on_tick(&report);
        if report.event.is_loss() {
            info!(
                "Run ended ({:?}) at length {}; best so far {}",
                report.event, report.length, self.stats.best_length
            );
        }
        self.stats.update();

        self.game.draw(&mut self.buffer);
        self.present(terminal)
    }

    fn present<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer.render(frame, &self.buffer, &self.stats);
            })
            .context("Failed to draw frame")?;
        Ok(())
    }
}

/// Switch to raw mode on the alternate screen; undone again if any later step fails
fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let terminal = (|| -> Result<_> {
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let mut terminal =
            Terminal::new(CrosstermBackend::new(stderr)).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;
        Ok(terminal)
    })();

    if terminal.is_err() {
        if let Err(err) = disable_raw_mode() {
            warn!("Failed to disable raw mode: {err}");
        }
        if let Err(err) = execute!(stderr(), LeaveAlternateScreen) {
            warn!("Failed to leave alternate screen: {err}");
        }
    }
    terminal
}

/// Runs every restore step even when an earlier one fails
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen");
    let cursor = terminal.show_cursor().context("Failed to show cursor");
    raw.and(screen).and(cursor)
}

/// The loop error wins; a cleanup error is reported only after a clean exit
fn finish(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            warn!("Terminal cleanup also failed: {cleanup_err:#}");
            Err(err)
        }
        (result, cleanup) => result.and(cleanup),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use anyhow::anyhow;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = PlayMode::new(GameConfig::default()).unwrap();
        assert_eq!(mode.game.snake().len(), 1);
        assert_eq!(mode.tick_interval, Duration::from_millis(50));
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_direction_key_is_buffered() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();

        mode.handle_event(key(KeyCode::Down));

        assert_eq!(mode.game.snake().pending_direction(), Some(Direction::Down));
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_quit_key_stops_loop() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();

        mode.handle_event(key(KeyCode::Char('q')));

        assert!(mode.should_quit);
    }

    #[test]
    fn test_non_key_events_are_ignored() {
        let mut mode = PlayMode::new(GameConfig::default()).unwrap();

        mode.handle_event(Event::FocusLost);
        mode.handle_event(Event::Resize(100, 40));

        assert!(!mode.should_quit);
        assert_eq!(mode.game.snake().pending_direction(), None);
    }

    #[test]
    fn test_tick_draws_snake() {
        let mut mode = PlayMode::new(GameConfig::default().without_obstacle()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        mode.tick(&mut terminal).unwrap();

        let head = mode.game.snake().head();
        assert_eq!(
            mode.buffer.slot(head).unwrap().fill,
            crate::render::palette::SNAKE
        );
        let snake_cells = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| cell.bg == ratatui::style::Color::Rgb(0, 255, 0))
            .count();
        assert_eq!(snake_cells, 2);
    }

    #[test]
    fn test_loop_error_outranks_cleanup_error() {
        let err = finish(Err(anyhow!("event stream broke")), Err(anyhow!("raw mode stuck")))
            .unwrap_err();
        assert_eq!(err.to_string(), "event stream broke");
    }

    #[test]
    fn test_cleanup_error_surfaces_after_clean_exit() {
        let err = finish(Ok(()), Err(anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(err.to_string(), "raw mode stuck");

        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
