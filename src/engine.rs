//! Scan, classification and stale-baseline detection

pub mod classify;
pub mod file_walker;
pub mod line_count;
pub mod scanner;
pub mod stale;

pub use classify::{Classification, Violation};
pub use scanner::{CheckReport, ScanResult, Scanner};
pub use stale::{StaleEntries, StaleReason};
