//! Core types and traits for filemanifest.
//!
//! This crate provides the fundamental data structures used throughout
//! the filemanifest workspace: inventory entries, digests, scan
//! configuration, and error/warning types.

mod config;
mod entry;
mod error;
mod inventory;

pub use config::{ScanConfig, ScanConfigBuilder};
pub use entry::{ContentDigest, EntryKind, InventoryEntry, EXECUTABLE_EXTENSIONS};
pub use error::{ScanError, ScanWarning, WarningKind};
pub use inventory::{Inventory, InventoryStats};
