//! Terminal front end: turns key presses into engine calls and keeps the
//! last view snapshot around for drawing.

pub mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::core::{GameEngine, GameStateView, TargetSource, ThreadRngSource};

/// How long `run` waits for input before redrawing
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Longest text the guess box will hold
pub const MAX_INPUT_LEN: usize = 8;

pub struct App<S: TargetSource = ThreadRngSource> {
    engine: GameEngine<S>,
    view: GameStateView,
    input: String,
    advisory: Option<String>,
    should_quit: bool,
}

impl<S: TargetSource> App<S> {
    pub fn new(engine: GameEngine<S>) -> Self {
        let view = engine.view();
        Self {
            engine,
            view,
            input: String::new(),
            advisory: None,
            should_quit: false,
        }
    }

    pub fn view(&self) -> &GameStateView {
        &self.view
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    /// Draw / poll loop. Returns when the player quits.
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!("entering game loop");
        while !self.should_quit {
            terminal
                .draw(|f| renderer::render(f, self))
                .context("drawing frame")?;

            if event::poll(POLL_INTERVAL).context("polling terminal events")? {
                if let Event::Key(key) = event::read().context("reading terminal event")? {
                    // Windows also reports releases
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        info!(sessions = self.engine.session(), "leaving game loop");
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        self.advisory = None;

        if self.view.is_over {
            match key.code {
                KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
                KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '+' => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    /// Send the current input to the engine.
    ///
    /// A rejected guess keeps the typed text so it can be corrected.
    pub fn submit(&mut self) {
        match self.engine.submit_guess(&self.input) {
            Ok(view) => {
                self.view = view;
                self.input.clear();
            }
            Err(e) => {
                debug!(input = %self.input, "showing advisory");
                self.advisory = Some(e.to_string());
            }
        }
    }

    pub fn restart(&mut self) {
        self.view = self.engine.new_game();
        self.input.clear();
        self.advisory = None;
    }
}
