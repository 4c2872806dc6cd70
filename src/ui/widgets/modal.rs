// src/ui/widgets/modal.rs

use crate::app::{App, SPINNER_CHARS};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Renders the scanning modal on top of the existing UI.
///
/// `Clear` is essential here: it wipes the popup area before rendering so
/// the background widgets do not bleed through.
pub fn render_scan_modal(frame: &mut Frame, app: &App, area: Rect) {
    let spinner_char = SPINNER_CHARS[app.spinner_frame];
    let modal_text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{spinner_char} Scanning target"),
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Analyzing metadata..."),
        Line::from(""),
        Line::from(Span::styled(
            "Results appear when the scan resolves.",
            Style::default().fg(Color::DarkGray),
        )),
    ]);

    let block = Block::default()
        .title("Scanning")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let popup_area = centered_rect(40, 30, area);

    let popup = Paragraph::new(modal_text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup, popup_area);
}

/// Helper to center a popup `Rect` within a parent area by percentage.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
