//! Terminal implementation of [`GameUi`].
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use game_core::{GameUi, Input, Level};

use crate::config::CliConfig;
use crate::input::InputHandler;
use crate::presentation::{
    terminal::{self, TerminalGuard, Tui},
    ui::{self, RenderContext},
};
use client_frontend_core::{FrontendConfig, view_model::ViewModel};

/// Full-screen terminal frontend.
///
/// Owns the terminal for its whole lifetime; dropping it restores the
/// user's screen.
pub struct CliFrontend {
    terminal: Tui,
    input: InputHandler,
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    _guard: TerminalGuard,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Result<Self> {
        let terminal = terminal::init()?;
        tracing::info!("Terminal initialized");

        Ok(Self {
            terminal,
            input: InputHandler::new(),
            frontend_config,
            cli_config,
            _guard: TerminalGuard,
        })
    }
}

impl GameUi for CliFrontend {
    type Error = anyhow::Error;

    fn draw(&mut self, level: &Level) -> Result<()> {
        let view_model = ViewModel::from_level(level);
        let ctx = RenderContext {
            view_model: &view_model,
            frontend: &self.frontend_config,
            cli: &self.cli_config,
        };

        ui::render_with_view_model(&mut self.terminal, &ctx)
    }

    fn input(&mut self) -> Result<Input> {
        loop {
            if let Some(input) = decode_event(&self.input, event::read()?) {
                return Ok(input);
            }
        }
    }
}

/// Maps a terminal event to a game input, or `None` if it should be skipped.
///
/// Presses and auto-repeats are decoded. Resizes yield [`Input::None`] so the
/// loop redraws at the new size.
fn decode_event(handler: &InputHandler, event: Event) -> Option<Input> {
    match event {
        Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
            Some(handler.handle_key(key))
        }
        Event::Resize(..) => Some(Input::None),
        _ => None,
    }
}
