//! Scan result accumulator.

use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// The entry holding the maximum modification time seen so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewestEntry {
    /// Path of the entry.
    pub path: PathBuf,
    /// Modification time in whole seconds since the Unix epoch.
    pub mtime: u64,
}

/// Outcome of a scan: the newest entry plus how many entries were visited.
///
/// Constructed fresh per scan, populated incrementally via
/// [`record`](Self::record) during traversal, and returned once the walk
/// completes. A successful scan always visits at least the root, so callers
/// observe `newest` as `Some`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    /// Entry with the maximum mtime, `None` until the first visit.
    pub newest: Option<NewestEntry>,
    /// Number of entries visited. Files, directories, and symlinks all
    /// count, including the root itself.
    pub total_count: u64,
}

impl ScanResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visited entry.
    ///
    /// The current winner is replaced only on a strictly greater mtime, so
    /// on equal timestamps the first visited entry wins.
    pub fn record(&mut self, path: impl Into<PathBuf>, mtime: u64) {
        self.total_count += 1;

        if self.newest.as_ref().is_none_or(|e| mtime > e.mtime) {
            self.newest = Some(NewestEntry {
                path: path.into(),
                mtime,
            });
        }
    }

    /// Path of the newest entry, if any entry was visited.
    pub fn newest_path(&self) -> Option<&Path> {
        self.newest.as_ref().map(|e| e.path.as_path())
    }

    /// Newest mtime in seconds since the epoch (0 before any visit).
    pub fn newest_mtime(&self) -> u64 {
        self.newest.as_ref().map_or(0, |e| e.mtime)
    }

    /// Newest mtime as a local date-time, for display.
    pub fn newest_local(&self) -> Option<DateTime<Local>> {
        self.newest.as_ref().map(|e| local_from_epoch(e.mtime))
    }
}

/// Convert epoch seconds to a local date-time.
pub fn local_from_epoch(secs: u64) -> DateTime<Local> {
    DateTime::<Local>::from(UNIX_EPOCH + Duration::from_secs(secs))
}
