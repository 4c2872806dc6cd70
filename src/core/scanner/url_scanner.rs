// src/core/scanner/url_scanner.rs

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info};
use url::Url;

use crate::core::models::{ScanError, ScanKind, ScanOutcome};

// Simulated URL scans score in [20, 90).
const RISK_FLOOR: u8 = 20;
const RISK_CEILING: u8 = 90;

/// Validates and normalizes a raw URL target.
///
/// Inputs without a scheme get `https://` prepended before parsing, so a
/// bare `example.com` is accepted the way a user would expect.
pub fn normalize_target(raw: &str) -> Result<Url, ScanError> {
    let trimmed = raw.trim();
    let with_scheme = if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        format!("https://{trimmed}")
    } else {
        trimmed.to_string()
    };
    Url::parse(&with_scheme).map_err(|_| ScanError::InvalidUrl { input: trimmed.to_string() })
}

/// Runs a simulated scan of a URL target.
///
/// The target is validated up front; the scan itself is a fixed delay
/// followed by a randomly generated risk score. There is no real analysis
/// behind it. The outcome keeps the user's own text as its display name.
pub async fn run_url_scan(target: &str, delay: Duration) -> Result<ScanOutcome, ScanError> {
    let url = normalize_target(target)?;
    info!(target = %url, "Starting URL scan.");

    tokio::time::sleep(delay).await;

    let risk = rand::rng().random_range(RISK_FLOOR..RISK_CEILING);
    debug!(risk, "URL scan resolved.");

    Ok(ScanOutcome {
        kind: ScanKind::Url,
        name: target.trim().to_string(),
        risk,
        finished_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_domains_get_an_https_scheme() {
        let url = normalize_target("example.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn explicit_schemes_are_kept() {
        let url = normalize_target("http://example.com/path").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn unparseable_targets_are_rejected() {
        let err = normalize_target("http://").unwrap_err();
        assert_eq!(err, ScanError::InvalidUrl { input: "http://".into() });
    }

    #[tokio::test(start_paused = true)]
    async fn scan_scores_inside_the_documented_band() {
        for _ in 0..20 {
            let outcome = run_url_scan("example.com", Duration::from_secs(2)).await.unwrap();
            assert_eq!(outcome.kind, ScanKind::Url);
            assert_eq!(outcome.name, "example.com");
            assert!((RISK_FLOOR..RISK_CEILING).contains(&outcome.risk));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_targets_fail_before_the_delay() {
        let started = tokio::time::Instant::now();
        let result = run_url_scan("https://", Duration::from_secs(2)).await;
        assert!(result.is_err());
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
