// src/core/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// --- Core Data Models ---

/// What kind of simulated scan produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanKind {
    Url,
    Apk,
}

impl ScanKind {
    pub fn label(self) -> &'static str {
        match self {
            ScanKind::Url => "URL",
            ScanKind::Apk => "APK",
        }
    }
}

/// The result of a completed scan, before the user saves it to the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOutcome {
    pub kind: ScanKind,
    pub name: String,
    pub risk: u8,
    pub finished_at: DateTime<Utc>,
}

/// One saved scan on the dashboard.
///
/// `name` is user-supplied (URL text or file name) and must go through
/// [`sanitize_label`] before it reaches the screen or an exported file.
/// `url` is a synthetic store link derived from the id, not a real
/// destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: String,
    pub name: String,
    pub url: String,
    pub risk: u8,
    pub saved_at: DateTime<Utc>,
}

/// Errors a scan request can fail with before producing a score.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("enter a URL or an .apk file name first")]
    EmptyTarget,
    #[error("only .apk files are accepted, got '{name}'")]
    UnsupportedFile { name: String },
    #[error("'{input}' is not a valid URL")]
    InvalidUrl { input: String },
}

/// Display bands for a risk score. Thresholds match the rating shown
/// next to each score in the result view and the dashboard list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Elevated,
    High,
}

impl RiskBand {
    pub fn of(risk: u8) -> Self {
        match risk {
            0..=39 => RiskBand::Low,
            40..=69 => RiskBand::Elevated,
            _ => RiskBand::High,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Elevated => "Elevated",
            RiskBand::High => "High",
        }
    }
}

/// Strips control characters from a user-supplied label.
///
/// Record names are echoed back into the list, the result view, and the
/// evidence kit. A name containing escape sequences must not be able to
/// corrupt the terminal or the exported JSON, so every render site goes
/// through this.
pub fn sanitize_label(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_label_strips_control_characters() {
        assert_eq!(sanitize_label("evil\x1b[2Japp.apk"), "evil[2Japp.apk");
        assert_eq!(sanitize_label("line\r\nbreak\ttab"), "linebreaktab");
    }

    #[test]
    fn sanitize_label_preserves_printable_text() {
        assert_eq!(sanitize_label("https://example.com/?q=1"), "https://example.com/?q=1");
        assert_eq!(sanitize_label("società.apk"), "società.apk");
    }

    #[test]
    fn risk_bands_cover_the_full_range() {
        assert_eq!(RiskBand::of(0), RiskBand::Low);
        assert_eq!(RiskBand::of(39), RiskBand::Low);
        assert_eq!(RiskBand::of(40), RiskBand::Elevated);
        assert_eq!(RiskBand::of(69), RiskBand::Elevated);
        assert_eq!(RiskBand::of(70), RiskBand::High);
        assert_eq!(RiskBand::of(100), RiskBand::High);
    }
}
