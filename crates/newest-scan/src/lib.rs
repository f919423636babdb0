//! Directory traversal engine for newest.
//!
//! This crate walks a directory tree with jwalk and reduces it to a single
//! [`ScanResult`]: the most recently modified entry and the number of
//! entries visited.
//!
//! The walk is strictly serial and fail-fast: entries are visited in
//! directory-listing order (never re-sorted), and any walker or metadata
//! error aborts the whole scan.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use newest_scan::Scanner;
//!
//! let scanner = Scanner::new();
//! let result = scanner.scan(Path::new("/path/to/scan")).unwrap();
//!
//! println!("visited {} entries", result.total_count);
//! if let Some(entry) = &result.newest {
//!     println!("newest: {} ({})", entry.path.display(), entry.mtime);
//! }
//! ```

mod scanner;

pub use scanner::Scanner;

// Re-export core types for convenience
pub use newest_core::{NewestEntry, ScanError, ScanResult, local_from_epoch};
