//! Main render entry point composing the header, map, and footer widgets.
use anyhow::Result;
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};

use crate::{
    config::CliConfig,
    presentation::{theme::RatatuiTheme, widgets},
};
use client_frontend_core::{FrontendConfig, view_model::ViewModel};

/// Everything needed to draw one frame.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub frontend: &'a FrontendConfig,
    pub cli: &'a CliConfig,
}

/// Draw one full frame to the terminal.
pub fn render_with_view_model<B: Backend>(
    terminal: &mut Terminal<B>,
    ctx: &RenderContext,
) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| render_game_ui(frame, ctx, &theme))?;

    Ok(())
}

fn render_game_ui(frame: &mut Frame, ctx: &RenderContext, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ctx.cli.ui.header_height),
            Constraint::Min(0),
            Constraint::Length(ctx.cli.ui.footer_height),
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.view_model, ctx.frontend, theme);
    widgets::map::render(frame, chunks[1], ctx.view_model, theme);
    widgets::footer::render(frame, chunks[2]);
}
