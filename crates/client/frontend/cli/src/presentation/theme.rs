//! Ratatui theme implementation of PresentationMapper.
//!
//! This module provides concrete styling for the terminal UI, implementing
//! the framework-agnostic PresentationMapper trait from client-frontend-core.

use client_frontend_core::PresentationMapper;
use game_core::Tile;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme implementing PresentationMapper.
///
/// This provides consistent color schemes and styling rules for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl PresentationMapper for RatatuiTheme {
    type Style = Style;

    fn render_tile(&self, tile: Tile) -> (char, Self::Style) {
        let color = match tile {
            Tile::Wall => Color::Gray,
            Tile::Floor => Color::DarkGray,
            Tile::Door => Color::Green,
            Tile::Blank => Color::Reset,
            // Never reaches a loaded level; make it loud if it does.
            Tile::Unresolved => Color::LightMagenta,
        };

        (tile.glyph(), Style::default().fg(color))
    }

    fn render_player(&self) -> (char, Self::Style) {
        (
            '@',
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    }
}

impl RatatuiTheme {
    /// Create a new RatatuiTheme instance.
    pub fn new() -> Self {
        Self
    }

    /// Style for labels in the status header.
    pub fn label(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    /// Style for values in the status header.
    pub fn value(&self) -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    /// Style used when the player has walked off the map.
    pub fn warning(&self) -> Style {
        Style::default().fg(Color::LightRed)
    }
}
