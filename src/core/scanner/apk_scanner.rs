// src/core/scanner/apk_scanner.rs

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};

use crate::core::models::{ScanError, ScanKind, ScanOutcome};

// Simulated APK scans score in [30, 90), a slightly hotter band than URL
// scans since sideloaded packages are the product's scare story.
const RISK_FLOOR: u8 = 30;
const RISK_CEILING: u8 = 90;

/// Runs a simulated static analysis of an uploaded APK.
///
/// Only the file name is inspected: anything not ending in `.apk` is
/// rejected before the delay starts. The "analysis" is a fixed wait plus a
/// random risk score.
pub async fn run_apk_scan(file_name: &str, delay: Duration) -> Result<ScanOutcome, ScanError> {
    let name = file_name.trim();
    if !name.ends_with(".apk") {
        return Err(ScanError::UnsupportedFile { name: name.to_string() });
    }
    info!(file = %name, "Starting APK scan.");

    tokio::time::sleep(delay).await;

    let risk = rand::rng().random_range(RISK_FLOOR..RISK_CEILING);
    debug!(risk, "APK scan resolved.");

    Ok(ScanOutcome {
        kind: ScanKind::Apk,
        name: name.to_string(),
        risk,
        finished_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn non_apk_files_are_rejected_before_the_delay() {
        let started = tokio::time::Instant::now();
        let err = run_apk_scan("malware.exe", Duration::from_secs(2)).await.unwrap_err();
        assert_eq!(err, ScanError::UnsupportedFile { name: "malware.exe".into() });
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn scan_scores_inside_the_documented_band() {
        for _ in 0..20 {
            let outcome = run_apk_scan("demo.apk", Duration::from_secs(2)).await.unwrap();
            assert_eq!(outcome.kind, ScanKind::Apk);
            assert_eq!(outcome.name, "demo.apk");
            assert!((RISK_FLOOR..RISK_CEILING).contains(&outcome.risk));
        }
    }
}
