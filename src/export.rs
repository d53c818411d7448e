use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::LeafReport;

/// Write every collected leaf report to `path` as pretty-printed JSON.
/// Written via a temp file and rename so a crash never leaves half a file.
pub fn write_reports(path: &Path, reports: &[LeafReport]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = fs::create_dir_all(parent);
        }
    }
    let json = serde_json::to_string_pretty(reports).context("serialize projection reports")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swap {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{FixtureSummary, StandingRow};

    #[test]
    fn reports_round_trip_through_json() {
        let reports = vec![LeafReport {
            rank: 2,
            standings: vec![StandingRow {
                team: "IND".to_string(),
                points: 12,
            }],
            fixtures: vec![FixtureSummary {
                winner: "AUS".to_string(),
                loser: "ENG".to_string(),
                inconsequential: true,
            }],
        }];
        let json = serde_json::to_string(&reports).unwrap();
        let back: Vec<LeafReport> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].rank, 2);
        assert_eq!(back[0].standings[0].team, "IND");
        assert!(back[0].fixtures[0].inconsequential);
    }

    #[test]
    fn write_reports_creates_the_file() {
        let dir = std::env::temp_dir().join("ptable_projector_export_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("reports.json");
        write_reports(&path, &[]).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert_eq!(raw.trim(), "[]");
        let _ = fs::remove_dir_all(&dir);
    }
}
