// src/ui/widgets/footer.rs

use crate::app::{App, AppState, ExportStatus};
use ratatui::{
    prelude::*,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Renders the footer: available actions for the current state, or the
/// outcome of the last evidence export when there is one to report.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let spans = match &app.export_status {
        ExportStatus::Success(path) => Line::from(vec![
            Span::styled("Evidence kit written: ", Style::new().fg(Color::Green)),
            Span::raw(path.as_str()),
        ]),
        ExportStatus::Error(msg) => Line::from(vec![
            Span::styled("Export failed: ", Style::new().fg(Color::Red)),
            Span::raw(msg.as_str()),
        ]),
        ExportStatus::Idle => match app.state {
            AppState::Idle => Line::from(vec![
                Span::raw("Press "),
                Span::styled("Enter", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" to scan, "),
                Span::styled("Esc", Style::new().bold().fg(Color::Yellow)),
                Span::raw(" to quit."),
            ]),
            AppState::Finished => Line::from(vec![
                Span::styled("[S]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("ave, "),
                Span::styled("[D]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("ashboard, "),
                Span::styled("[E]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("vidence, "),
                Span::styled("[N]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("ew scan, "),
                Span::styled("[Q]", Style::new().bold().fg(Color::Yellow)),
                Span::raw("uit"),
            ]),
            AppState::Scanning => Line::from("Scanning... Press D for dashboard, Q to quit."),
        },
    };

    let footer = Paragraph::new(spans).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
