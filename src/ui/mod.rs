// src/ui/mod.rs

use crate::app::{App, AppState};
use ratatui::prelude::*;

mod layout;
mod widgets;

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = layout::create_layout(frame.area(), app.show_dashboard);

    widgets::input::render_input(frame, app, layout.input);
    widgets::scan_view::render_scan_view(frame, app, layout.result);

    if app.show_dashboard {
        widgets::dashboard::render_dashboard(frame, app, layout.dashboard);
        widgets::chart::render_chart(frame, app, layout.chart);
    }

    widgets::footer::render_footer(frame, app, layout.footer);

    // The modal sits on top of everything while scans are in flight.
    if matches!(app.state, AppState::Scanning) {
        widgets::modal::render_scan_modal(frame, app, frame.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &mut App) -> ratatui::buffer::Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn empty_store_renders_without_panicking() {
        let mut app = App::new();
        app.show_dashboard = true;
        draw(&mut app);
    }

    #[test]
    fn render_is_idempotent_over_the_same_snapshot() {
        let mut app = App::new();
        app.show_dashboard = true;
        app.store.append("http://a.com", 40);
        app.store.append("http://b.com", 90);

        let first = draw(&mut app);
        let second = draw(&mut app);
        assert_eq!(first, second);
    }

    #[test]
    fn boundary_risks_render_without_clamping() {
        let mut app = App::new();
        app.show_dashboard = true;
        app.store.append("floor", 0);
        app.store.append("ceiling", 100);
        draw(&mut app);
    }

    #[test]
    fn large_store_renders_with_a_capped_chart() {
        let mut app = App::new();
        app.show_dashboard = true;
        for i in 0..50u8 {
            app.store.append(&format!("target-{i}"), i % 100);
        }
        draw(&mut app);
        assert_eq!(app.store.chart_series().values.len(), 7);
    }
}
