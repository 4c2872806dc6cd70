// src/app.rs

use std::path::Path;

use crate::core::evidence;
use crate::core::models::{ScanError, ScanOutcome};
use crate::core::store::ScanRecordStore;

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub enum ExportStatus {
    Idle,
    Success(String),
    Error(String),
}

pub enum AppState {
    Idle,
    Scanning,
    Finished,
}

/// The whole UI state. The record store lives here and is handed to the
/// rendering layer by reference; nothing outside the key handlers in the
/// event loop ever writes to it.
pub struct App {
    pub should_quit: bool,
    pub state: AppState,
    pub input: String,
    pub last_result: Option<Result<ScanOutcome, ScanError>>,
    pub result_saved: bool,
    pub pending_scans: usize,
    pub store: ScanRecordStore,
    pub show_dashboard: bool,
    pub spinner_frame: usize,
    pub export_status: ExportStatus,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            state: AppState::Idle,
            input: String::new(),
            last_result: None,
            result_saved: false,
            pending_scans: 0,
            store: ScanRecordStore::new(),
            show_dashboard: false,
            spinner_frame: 0,
            export_status: ExportStatus::Idle,
        }
    }

    pub fn on_tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_CHARS.len();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Marks one more scan as in flight. Several can overlap; each resolves
    /// independently and the dashboard reflects completion order.
    pub fn begin_scan(&mut self) {
        self.pending_scans += 1;
        self.state = AppState::Scanning;
    }

    /// Records a scan completion delivered over the channel. The latest
    /// completion always replaces the displayed result.
    pub fn complete_scan(&mut self, result: Result<ScanOutcome, ScanError>) {
        self.pending_scans = self.pending_scans.saturating_sub(1);
        self.last_result = Some(result);
        self.result_saved = false;
        if self.pending_scans == 0 {
            self.state = AppState::Finished;
        }
    }

    /// Saves the displayed outcome to the dashboard. Saving twice is a
    /// no-op, as is saving a failed scan. Returns whether a record was
    /// appended.
    pub fn save_result(&mut self) -> bool {
        if self.result_saved {
            return false;
        }
        match &self.last_result {
            Some(Ok(outcome)) => {
                self.store.append(&outcome.name, outcome.risk);
                self.result_saved = true;
                self.show_dashboard = true;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_dashboard(&mut self) {
        self.show_dashboard = !self.show_dashboard;
    }

    /// Exports the evidence kit for the most recently saved record and
    /// surfaces the outcome in the footer.
    pub fn export_latest(&mut self, dir: &Path) {
        let Some(record) = self.store.latest() else {
            self.export_status = ExportStatus::Error("nothing saved yet".to_string());
            return;
        };
        self.export_status = match evidence::write_evidence_kit(record, dir) {
            Ok(path) => ExportStatus::Success(path.display().to_string()),
            Err(e) => ExportStatus::Error(e.to_string()),
        };
    }

    /// Returns to the input prompt for a new scan. Saved records survive:
    /// the store lives for the whole session.
    pub fn reset(&mut self) {
        self.state = AppState::Idle;
        self.input = String::new();
        self.last_result = None;
        self.result_saved = false;
        self.export_status = ExportStatus::Idle;
    }
}
