//! Footer widget displaying key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let text = vec![Line::from(vec![
        Span::raw("[hjkl/WASD/Arrows] Move | "),
        Span::raw("[q/Esc] Quit"),
    ])];

    frame.render_widget(Paragraph::new(text), area);
}
