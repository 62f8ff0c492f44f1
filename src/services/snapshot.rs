use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use crate::interfaces::{RankedTrader, Snapshot};

/// ISO-8601 UTC with microseconds, e.g. `2025-01-31T12:00:00.123456Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

pub fn build_snapshot(daily: Vec<RankedTrader>, weekly: Vec<RankedTrader>) -> Snapshot {
    Snapshot {
        daily,
        weekly,
        last_updated: format_timestamp(Utc::now()),
    }
}

/// Overwrite `path` with the snapshot as 2-space indented JSON.
pub async fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
