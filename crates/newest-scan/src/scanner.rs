//! Serial jwalk-based directory scanner.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::UNIX_EPOCH;

use jwalk::{Parallelism, WalkDir};

use newest_core::{ScanError, ScanResult};

/// Walks a directory tree and reduces it to a [`ScanResult`].
///
/// Every entry reachable from the root is visited, the root itself
/// included; a root naming a single file yields exactly that one entry.
/// Symlinks are visited but never followed. The scanner holds no per-scan
/// state, so concurrent scans of disjoint trees need no coordination.
pub struct Scanner {
    cancel: Arc<AtomicBool>,
}

impl Scanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self {
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Flag that aborts the scan at the next visit when set.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Perform a scan rooted at the given path.
    ///
    /// Fail-fast: an unreadable root, a walker error, or a metadata read
    /// failure aborts the scan with a [`ScanError`].
    pub fn scan(&self, root: &Path) -> Result<ScanResult, ScanError> {
        // Fail on an unreadable root up front rather than on the first entry.
        std::fs::symlink_metadata(root).map_err(|e| ScanError::io(root, e))?;

        let walker = WalkDir::new(root)
            .parallelism(Parallelism::Serial)
            .skip_hidden(false)
            .follow_links(false)
            .min_depth(0);

        let mut result = ScanResult::new();

        for entry_result in walker {
            if self.cancel.load(Ordering::Relaxed) {
                return Err(ScanError::Interrupted);
            }

            let entry = entry_result.map_err(|e| walk_error(e, root))?;
            let path = entry.path();

            let metadata = entry.metadata().map_err(|e| walk_error(e, &path))?;
            let mtime = mtime_secs(&metadata).map_err(|e| ScanError::io(&path, e))?;

            result.record(path, mtime);
        }

        Ok(result)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a jwalk error to a [`ScanError`], keeping path context.
fn walk_error(err: jwalk::Error, fallback: &Path) -> ScanError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| fallback.to_path_buf());

    match err.into_io_error() {
        Some(source) => ScanError::io(path, source),
        None => ScanError::Io {
            path,
            source: std::io::Error::other("walk aborted"),
        },
    }
}

/// Modification time in whole seconds since the epoch.
///
/// Pre-epoch mtimes clamp to 0; the accumulator treats 0 as older than any
/// real timestamp.
fn mtime_secs(metadata: &std::fs::Metadata) -> std::io::Result<u64> {
    let modified = metadata.modified()?;
    Ok(modified
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();

        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();

        temp
    }

    #[test]
    fn test_basic_scan_counts_every_entry() {
        let temp = create_test_tree();

        let scanner = Scanner::new();
        let result = scanner.scan(temp.path()).unwrap();

        // root + dir1 + subdir + 3 files
        assert_eq!(result.total_count, 6);
        assert!(result.newest.is_some());
    }

    #[test]
    fn test_missing_root_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("does-not-exist");

        let scanner = Scanner::new();
        let err = scanner.scan(&missing).unwrap_err();

        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    #[test]
    fn test_cancelled_scan_is_interrupted() {
        let temp = create_test_tree();

        let scanner = Scanner::new();
        scanner.cancel_handle().store(true, Ordering::Relaxed);

        let err = scanner.scan(temp.path()).unwrap_err();
        assert!(matches!(err, ScanError::Interrupted));
    }
}
