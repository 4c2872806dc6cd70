// src/core/evidence.rs

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use color_eyre::eyre::Result;
use serde::Serialize;
use tracing::info;

use crate::core::models::{ScanRecord, sanitize_label};

/// The JSON blob an evidence kit contains. This is demo output: it records
/// what the dashboard shows, not any real analysis artifacts.
#[derive(Debug, Serialize)]
struct EvidenceKit<'a> {
    scan_id: &'a str,
    name: String,
    risk: u8,
    generated_at: String,
    status: &'static str,
}

/// Writes the evidence kit for a saved record as `<id>-evidence.json`
/// under `dir`, creating the directory if needed. Returns the kit path.
pub fn write_evidence_kit(record: &ScanRecord, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let kit = EvidenceKit {
        scan_id: &record.id,
        name: sanitize_label(&record.name),
        risk: record.risk,
        generated_at: Utc::now().to_rfc3339(),
        status: "DEMO VERSION",
    };

    let path = dir.join(format!("{}-evidence.json", record.id));
    fs::write(&path, serde_json::to_string_pretty(&kit)?)?;
    info!(path = %path.display(), "Evidence kit written.");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ScanRecordStore;

    #[test]
    fn kit_is_written_as_valid_json_carrying_the_scan_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = ScanRecordStore::new();
        let record = store.append("shady\x1b.apk", 77).clone();

        let path = write_evidence_kit(&record, dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            format!("{}-evidence.json", record.id)
        );

        let kit: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(kit["scan_id"], record.id.as_str());
        assert_eq!(kit["risk"], 77);
        assert_eq!(kit["status"], "DEMO VERSION");
        // Control characters in the name never reach the file.
        assert_eq!(kit["name"], "shady.apk");
    }
}
