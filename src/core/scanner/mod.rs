// src/core/scanner/mod.rs

// Public interface for the `scanner` module: one sub-scanner per target
// kind, plus the routing logic that decides which one a raw input goes to.
pub mod apk_scanner;
pub mod url_scanner;

use std::time::Duration;

use crate::core::models::{ScanError, ScanKind, ScanOutcome};

/// Fixed delay every simulated scan waits before resolving.
pub const SCAN_DELAY: Duration = Duration::from_secs(2);

/// Decides which scan flow a raw input belongs to.
///
/// An empty (or whitespace-only) input is rejected up front. A target
/// ending in `.apk` goes to the APK flow; everything else is treated as a
/// URL and validated by the URL scanner itself.
pub fn classify_target(input: &str) -> Result<ScanKind, ScanError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ScanError::EmptyTarget);
    }
    if trimmed.ends_with(".apk") {
        Ok(ScanKind::Apk)
    } else {
        Ok(ScanKind::Url)
    }
}

/// Routes a raw input to the matching simulated scan and awaits it.
///
/// This is the entry point the event loop spawns onto the runtime; the
/// returned result travels back over the completion channel. Each call
/// resolves independently after its own delay, so concurrent scans finish
/// in completion order, not start order.
pub async fn run_scan(target: String, delay: Duration) -> Result<ScanOutcome, ScanError> {
    match classify_target(&target)? {
        ScanKind::Apk => apk_scanner::run_apk_scan(&target, delay).await,
        ScanKind::Url => url_scanner::run_url_scan(&target, delay).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_target_is_rejected() {
        assert_eq!(classify_target(""), Err(ScanError::EmptyTarget));
        assert_eq!(classify_target("   "), Err(ScanError::EmptyTarget));
    }

    #[test]
    fn apk_suffix_routes_to_the_apk_flow() {
        assert_eq!(classify_target("app.apk"), Ok(ScanKind::Apk));
        assert_eq!(classify_target("  totally-legit.apk  "), Ok(ScanKind::Apk));
    }

    #[test]
    fn everything_else_routes_to_the_url_flow() {
        assert_eq!(classify_target("example.com"), Ok(ScanKind::Url));
        assert_eq!(classify_target("https://example.com"), Ok(ScanKind::Url));
        // `.apk` must be the suffix, not just a substring.
        assert_eq!(classify_target("bad.apk.txt"), Ok(ScanKind::Url));
    }

    #[tokio::test(start_paused = true)]
    async fn run_scan_routes_by_target_kind() {
        let apk = run_scan("demo.apk".into(), Duration::from_secs(2)).await.unwrap();
        assert_eq!(apk.kind, ScanKind::Apk);

        let url = run_scan("example.com".into(), Duration::from_secs(2)).await.unwrap();
        assert_eq!(url.kind, ScanKind::Url);
    }
}
