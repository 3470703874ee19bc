//! Map widget rendering the 2D tile grid with the player.

use client_frontend_core::view_model::{PresentationMapper, ViewModel};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the map panel. Glyphs and styles come from the theme; the player
/// takes priority over the terrain beneath it.
pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    view_model: &ViewModel,
    theme: &T,
) {
    let rows: Vec<Line> = view_model
        .map
        .tiles
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| {
                    let (glyph, style) = theme.render_cell(cell);
                    Span::styled(glyph.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(rows).block(Block::default().borders(Borders::ALL).title("Map"));

    frame.render_widget(paragraph, area);
}
