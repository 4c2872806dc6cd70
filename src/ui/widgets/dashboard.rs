// src/ui/widgets/dashboard.rs

use crate::app::App;
use crate::core::models::{RiskBand, sanitize_label};
use crate::ui::widgets::scan_view::risk_style;
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Renders the recent-scans list, newest first.
///
/// The list is rebuilt from the store snapshot on every frame, so it is
/// always a full replacement of what was visible before. Names are
/// attacker-controlled and pass through `sanitize_label` before display.
pub fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let list_block = Block::default().borders(Borders::ALL).title("Recent Scans");

    if app.store.is_empty() {
        let placeholder = Paragraph::new("No saved scans yet.")
            .block(list_block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .records()
        .iter()
        .map(|record| {
            let band = RiskBand::of(record.risk);
            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(sanitize_label(&record.name)),
                    Span::raw("  "),
                    Span::styled(format!("{}%", record.risk), risk_style(band).bold()),
                ]),
                Line::from(Span::styled(
                    format!("  {}", record.id),
                    Style::default().fg(Color::DarkGray),
                )),
                Line::from(Span::styled(
                    format!("  {}", record.url),
                    Style::default().fg(Color::DarkGray).italic(),
                )),
            ])
        })
        .collect();

    let list = List::new(items).block(list_block);
    frame.render_widget(list, area);
}
