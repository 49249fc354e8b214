//! Refresh scheduling: decide whether the existing catalog is stale.

use std::path::Path;
use std::time::Duration;
use time::UtcDateTime;

/// Current wall-clock time in milliseconds since the epoch, matching the
/// `last_update` field written to the stats artifact.
pub fn now_ms() -> u64 {
    (UtcDateTime::now().unix_timestamp_nanos() / 1_000_000) as u64
}

/// Whether a refresh is due given the previous run's `last_update` stamp.
/// No stamp (first run, missing or unreadable stats file) always means due.
pub fn refresh_due(last_update_ms: Option<u64>, max_age: Duration, now_ms: u64) -> bool {
    match last_update_ms {
        None => true,
        Some(stamp) => now_ms.saturating_sub(stamp) >= max_age.as_millis() as u64,
    }
}

/// Reads `last_update` out of a previously written stats artifact. Any
/// failure (absent file, stale schema, corrupt JSON) just means "unknown",
/// which in turn means a refresh.
pub async fn last_update(stats_path: &Path) -> Option<u64> {
    let body = tokio::fs::read_to_string(stats_path).await.ok()?;
    let value: serde_json::Value = serde_json::from_str(&body).ok()?;
    value.get("last_update")?.as_u64()
}
