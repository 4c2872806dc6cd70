// src/ui/layout.rs

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Defines the areas of the application's user interface.
///
/// Each `Rect` is a widget area on the terminal screen, computed once per
/// frame so the widgets never re-derive dimensions themselves.
pub struct AppLayout {
    pub input: Rect,
    pub result: Rect,
    pub dashboard: Rect,
    pub chart: Rect,
    pub footer: Rect,
}

/// Splits the frame into the input bar, the main content area, and the
/// footer. When the dashboard panel is visible, the content area is split
/// horizontally between the scan result and a right-hand column holding
/// the recent-scans list above the risk chart.
pub fn create_layout(frame_size: Rect, show_dashboard: bool) -> AppLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame_size);

    let content_constraints = if show_dashboard {
        vec![Constraint::Percentage(55), Constraint::Percentage(45)]
    } else {
        vec![Constraint::Percentage(100)]
    };

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(content_constraints)
        .split(main_chunks[1]);

    let (dashboard, chart) = if show_dashboard {
        let panel_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(content_chunks[1]);
        (panel_chunks[0], panel_chunks[1])
    } else {
        (Rect::default(), Rect::default())
    };

    AppLayout {
        input: main_chunks[0],
        result: content_chunks[0],
        dashboard,
        chart,
        footer: main_chunks[2],
    }
}
