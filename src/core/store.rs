// src/core/store.rs

use chrono::Utc;

use crate::core::models::ScanRecord;

/// How many of the most recent records the risk chart plots.
pub const CHART_WINDOW: usize = 7;

/// In-memory, session-lifetime collection of saved scans, newest first.
///
/// The store is a plain owned value (held by `App`, handed to rendering by
/// reference) rather than process-global state, so it can be exercised in
/// tests without a terminal. Records are only ever inserted at the front;
/// nothing reorders, mutates, or removes them afterwards.
#[derive(Debug, Default)]
pub struct ScanRecordStore {
    records: Vec<ScanRecord>,
}

/// The dataset the risk chart renders from: record ids as x-axis labels,
/// risk scores as values, newest first, capped at [`CHART_WINDOW`] points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<u8>,
}

impl ScanRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a completed scan and returns the new record.
    ///
    /// The id is derived from the save timestamp (`scan-<millis>`), so
    /// uniqueness is best-effort: two saves within the same millisecond
    /// collide. The synthetic store link points at the id, not at the
    /// scanned target. Risk scores above 100 are clamped to 100; `u8`
    /// already rules out negatives.
    pub fn append(&mut self, name: &str, risk: u8) -> &ScanRecord {
        let saved_at = Utc::now();
        let id = format!("scan-{}", saved_at.timestamp_millis());
        let record = ScanRecord {
            url: format!("https://play.google.com/store/apps/details?id={id}"),
            id,
            name: name.to_string(),
            risk: risk.min(100),
            saved_at,
        };
        self.records.insert(0, record);
        &self.records[0]
    }

    /// All saved records, newest first.
    pub fn records(&self) -> &[ScanRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The most recently saved record, if any.
    pub fn latest(&self) -> Option<&ScanRecord> {
        self.records.first()
    }

    /// Builds the chart dataset from the `min(CHART_WINDOW, len)` most
    /// recent records. An empty store yields an empty series.
    pub fn chart_series(&self) -> ChartSeries {
        let mut series = ChartSeries::default();
        for record in self.records.iter().take(CHART_WINDOW) {
            series.labels.push(record.id.clone());
            series.values.push(record.risk);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_inserts_newest_first() {
        let mut store = ScanRecordStore::new();
        store.append("http://a.com", 40);
        store.append("http://b.com", 90);

        assert_eq!(store.len(), 2);
        assert_eq!(store.records()[0].name, "http://b.com");
        assert_eq!(store.records()[0].risk, 90);
        assert_eq!(store.records()[1].name, "http://a.com");
        assert_eq!(store.records()[1].risk, 40);

        let series = store.chart_series();
        assert_eq!(series.values, vec![90, 40]);
        assert_eq!(series.labels[0], store.records()[0].id);
        assert_eq!(series.labels[1], store.records()[1].id);
    }

    #[test]
    fn length_tracks_number_of_appends() {
        let mut store = ScanRecordStore::new();
        for i in 0..25 {
            store.append(&format!("app-{i}.apk"), 50);
        }
        assert_eq!(store.len(), 25);
        // Most recent append is always at index 0.
        assert_eq!(store.records()[0].name, "app-24.apk");
        assert_eq!(store.records()[24].name, "app-0.apk");
    }

    #[test]
    fn chart_window_caps_at_seven_most_recent() {
        let mut store = ScanRecordStore::new();
        for i in 0..10u8 {
            store.append(&format!("target-{i}"), i * 10);
        }

        let series = store.chart_series();
        assert_eq!(series.labels.len(), 7);
        assert_eq!(series.values.len(), 7);
        // Newest first: the 10th insert leads, the 4th insert closes the
        // window; inserts 1-3 fell off.
        assert_eq!(series.values, vec![90, 80, 70, 60, 50, 40, 30]);
    }

    #[test]
    fn chart_series_is_empty_for_an_empty_store() {
        let store = ScanRecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.chart_series(), ChartSeries::default());
    }

    #[test]
    fn boundary_risks_are_stored_unclamped() {
        let mut store = ScanRecordStore::new();
        store.append("floor", 0);
        store.append("ceiling", 100);
        assert_eq!(store.records()[0].risk, 100);
        assert_eq!(store.records()[1].risk, 0);
    }

    #[test]
    fn out_of_range_risk_is_clamped_to_100() {
        let mut store = ScanRecordStore::new();
        store.append("overflow", 250);
        assert_eq!(store.records()[0].risk, 100);
    }

    #[test]
    fn records_carry_a_synthetic_store_link() {
        let mut store = ScanRecordStore::new();
        let record = store.append("http://a.com", 40);
        assert!(record.id.starts_with("scan-"));
        assert_eq!(
            record.url,
            format!("https://play.google.com/store/apps/details?id={}", record.id)
        );
    }
}
