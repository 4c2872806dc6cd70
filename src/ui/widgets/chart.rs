// src/ui/widgets/chart.rs

use crate::app::App;
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Renders the risk trend chart over the most recent saved scans.
///
/// The chart is rebuilt from `chart_series()` on every frame rather than
/// updated incrementally; with at most seven points the redraw cost is
/// irrelevant and there is no stale dataset to get wrong. The y axis is
/// pinned to [0, 100] regardless of the data. An empty store draws an
/// empty chart.
pub fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let series = app.store.chart_series();

    let points: Vec<(f64, f64)> = series
        .values
        .iter()
        .enumerate()
        .map(|(i, risk)| (i as f64, f64::from(*risk)))
        .collect();

    let dataset = Dataset::default()
        .name("Risk Score")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&points);

    let x_labels: Vec<Span> = series
        .labels
        .iter()
        .map(|id| Span::styled(id.clone(), Style::default().fg(Color::DarkGray)))
        .collect();
    let x_upper = points.len().saturating_sub(1).max(1) as f64;

    let chart = Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title("Risk Trend"))
        .x_axis(
            Axis::default()
                .bounds([0.0, x_upper])
                .labels(x_labels)
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([0.0, 100.0])
                .labels(["0", "50", "100"])
                .style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(chart, area);
}
