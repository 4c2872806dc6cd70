// src/ui/widgets/scan_view.rs

use crate::app::{App, AppState, SPINNER_CHARS};
use crate::core::models::{RiskBand, sanitize_label};
use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Renders the main content area: instructions when idle, a spinner while
/// scanning, and the latest scan result (or its error) once finished.
pub fn render_scan_view(frame: &mut Frame, app: &App, area: Rect) {
    let main_block = Block::default().borders(Borders::ALL).title("Scan Result");

    match app.state {
        AppState::Idle => {
            let instructions = Paragraph::new(
                "Enter a URL or an .apk file name and press Enter to start a scan.\n\
                 Press Esc to quit.",
            )
            .block(main_block)
            .wrap(Wrap { trim: true });
            frame.render_widget(instructions, area);
        }
        AppState::Scanning => {
            let spinner_char = SPINNER_CHARS[app.spinner_frame];
            let scanning_text = Paragraph::new(Line::from(vec![
                Span::styled(format!("{spinner_char} "), Style::default().fg(Color::Cyan)),
                Span::raw(format!(
                    "Scanning... {} in flight. Please wait.",
                    app.pending_scans
                )),
            ]))
            .block(main_block)
            .alignment(Alignment::Center);
            frame.render_widget(scanning_text, area);
        }
        AppState::Finished => {
            let text = match &app.last_result {
                Some(Ok(outcome)) => {
                    let band = RiskBand::of(outcome.risk);
                    let risk_style = risk_style(band);
                    let save_hint = if app.result_saved {
                        Line::from(Span::styled(
                            "✓ Saved to dashboard.",
                            Style::default().fg(Color::Green),
                        ))
                    } else {
                        Line::from("Press S to save this result to the dashboard.")
                    };
                    Text::from(vec![
                        Line::from(vec![
                            Span::styled(
                                format!("[{}] ", outcome.kind.label()),
                                Style::default().fg(Color::DarkGray),
                            ),
                            Span::raw(sanitize_label(&outcome.name)),
                        ]),
                        Line::from(""),
                        Line::from(vec![
                            Span::raw("Risk Score: "),
                            Span::styled(format!("{}%", outcome.risk), risk_style.bold()),
                            Span::styled(format!(" ({})", band.label()), risk_style),
                        ]),
                        Line::from(""),
                        save_hint,
                    ])
                }
                Some(Err(e)) => Text::from(vec![
                    Line::from(Span::styled(
                        "Scan failed",
                        Style::default().fg(Color::Red).bold(),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(e.to_string(), Style::default().fg(Color::Red))),
                ]),
                None => Text::from("No result."),
            };
            let result_paragraph = Paragraph::new(text).block(main_block).wrap(Wrap { trim: true });
            frame.render_widget(result_paragraph, area);
        }
    }
}

pub fn risk_style(band: RiskBand) -> Style {
    match band {
        RiskBand::Low => Style::default().fg(Color::Green),
        RiskBand::Elevated => Style::default().fg(Color::Yellow),
        RiskBand::High => Style::default().fg(Color::Red),
    }
}
