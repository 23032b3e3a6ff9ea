//! Scanning engine for filemanifest.
//!
//! This crate turns a directory tree into an ordered [`Inventory`]: it
//! enumerates files, then builds one metadata record per file by combining
//! a filesystem stat, a content hash, and (for PE candidates) fixed-offset
//! header fields and version information.
//!
//! # Overview
//!
//! - **Traversal** via jwalk, sorted for deterministic output
//! - **Entry building** in parallel via rayon, order restored
//! - **Per-file failure isolation**: a bad file degrades its own record
//!   and nothing else
//!
//! # Example
//!
//! ```rust,no_run
//! use filemanifest_scan::{InventoryScanner, ScanConfig};
//!
//! let config = ScanConfig::new("/srv/release");
//! let scanner = InventoryScanner::new();
//! let inventory = scanner.scan(&config).unwrap();
//!
//! println!("{} files, {} bytes", inventory.total_files(), inventory.total_size());
//! ```

mod builder;
mod hash;
mod pe;
mod scanner;
mod version;
mod walker;

pub use builder::build_entry;
pub use scanner::InventoryScanner;

// Re-export core types for convenience
pub use filemanifest_core::{
    ContentDigest, EntryKind, Inventory, InventoryEntry, InventoryStats, ScanConfig, ScanError,
    ScanWarning, WarningKind,
};
