//! TUI Renderer for the interactive feed
//!
//! ## Design:
//! - Renderer owns the terminal and the `FeedState`
//! - Every frame re-presents the state into a fresh `FeedViewModel`
//! - Keys are routed to `FeedComponent`; the renderer only reacts to `Quit`

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{FixedOffset, Utc};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use feedline_runtime::FeedState;
use feedline_types::Locale;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::presentation::presenters::present_feed;
use crate::presentation::views::tui::components::{FeedAction, FeedComponent};

pub struct TuiRenderer {
    state: FeedState,
    feed: FeedComponent,
    locale: Locale,
    offset: FixedOffset,
    tick_rate: Duration,
}

impl TuiRenderer {
    pub fn new(state: FeedState, locale: Locale, offset: FixedOffset, tick_rate: Duration) -> Self {
        Self {
            state,
            feed: FeedComponent::new(),
            locale,
            offset,
            tick_rate,
        }
    }

    /// Main event loop for TUI rendering
    ///
    /// This function:
    /// 1. Sets up terminal in raw mode
    /// 2. Redraws the feed every tick or key press
    /// 3. Routes keyboard input to the feed component
    /// 4. Cleans up terminal on exit, including error exits
    pub fn run(mut self) -> Result<()> {
        let interrupted = Arc::new(AtomicBool::new(false));
        {
            let interrupted = interrupted.clone();
            // Ctrl+C arrives as a key in raw mode; this only sees external SIGINT
            if let Err(e) = ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst)) {
                tracing::warn!(error = %e, "could not install interrupt handler");
            }
        }

        enable_raw_mode().context("failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("failed to enter alternate screen");
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e.into());
            }
        };

        let result = self.event_loop(&mut terminal, &interrupted);

        let restored = restore(&mut terminal);
        result?;
        restored
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        interrupted: &AtomicBool,
    ) -> Result<()> {
        tracing::info!(posts = self.state.len(), "tui started");

        loop {
            let screen = present_feed(&self.state, Utc::now(), self.locale, self.offset);
            terminal.draw(|f| {
                let area = f.area();
                self.feed.render(f, area, &screen);
            })?;

            if interrupted.load(Ordering::SeqCst) {
                break;
            }

            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
                && let Some(FeedAction::Quit) =
                    self.feed.handle_input(key, &mut self.state, Utc::now())
            {
                break;
            }
        }

        tracing::info!("tui stopped");
        Ok(())
    }
}

fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
