//! Header widget displaying player status.

use client_frontend_core::{FrontendConfig, view_model::ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel with the player position and the tile underfoot.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    config: &FrontendConfig,
    theme: &RatatuiTheme,
) {
    let mut spans = Vec::new();

    if config.show_coordinates {
        spans.push(Span::styled("Position: ", theme.label()));
        spans.push(Span::styled(
            view_model.player.position.to_string(),
            theme.value(),
        ));
    }

    if config.show_tile_under_player {
        if !spans.is_empty() {
            spans.push(Span::raw(" | "));
        }
        spans.push(Span::styled("On: ", theme.label()));
        match view_model.player.standing_on {
            Some(tile) => spans.push(Span::styled(tile.to_string(), theme.value())),
            None => spans.push(Span::styled("outside the map", theme.warning())),
        }
    }

    let paragraph = Paragraph::new(vec![Line::from(spans)])
        .block(Block::default().borders(Borders::ALL).title("Dungeon"));

    frame.render_widget(paragraph, area);
}
