//! Core types for newest.
//!
//! This crate provides the scan result accumulator and the error taxonomy
//! shared by the traversal engine and the CLI.

mod error;
mod result;

pub use error::ScanError;
pub use result::{NewestEntry, ScanResult, local_from_epoch};
