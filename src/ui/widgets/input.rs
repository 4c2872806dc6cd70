// src/ui/widgets/input.rs
use crate::app::{App, AppState};
use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Renders the target input box.
pub fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let input_block = Block::default()
        .borders(Borders::ALL)
        .title("Target (URL or .apk file name)");
    let input_paragraph = Paragraph::new(app.input.as_str())
        .block(input_block)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(input_paragraph, area);

    // Show the cursor only while typing.
    if let AppState::Idle = app.state {
        frame.set_cursor_position(Position::new(
            area.x + app.input.chars().count() as u16 + 1,
            area.y + 1,
        ));
    }
}
