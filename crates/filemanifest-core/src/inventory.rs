//! Inventory container and summary statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::config::ScanConfig;
use crate::entry::InventoryEntry;
use crate::error::ScanWarning;

/// Summary statistics for a completed scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventoryStats {
    /// Total size in bytes.
    pub total_size: u64,
    /// Total number of files.
    pub total_files: u64,
    /// Files classified as executables by extension.
    pub executable_files: u64,
    /// Files whose content hash could not be computed.
    pub degraded_files: u64,
}

impl InventoryStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update stats with a built entry.
    pub fn record_entry(&mut self, entry: &InventoryEntry) {
        self.total_files += 1;
        self.total_size += entry.file_size;
        if entry.kind.is_executable() {
            self.executable_files += 1;
        }
        if entry.is_degraded() {
            self.degraded_files += 1;
        }
    }
}

/// Complete inventory of a scanned directory tree.
///
/// Entries are ordered lexicographically by path so repeated scans of an
/// unmodified tree render identically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// One entry per discovered file, in output order.
    pub entries: Vec<InventoryEntry>,

    /// Root path that was scanned.
    pub root_path: PathBuf,

    /// When this scan was performed.
    pub scanned_at: SystemTime,

    /// Duration of the scan.
    pub scan_duration: Duration,

    /// Scan configuration used.
    pub config: ScanConfig,

    /// Summary statistics.
    pub stats: InventoryStats,

    /// Warnings encountered during the scan.
    pub warnings: Vec<ScanWarning>,
}

impl Inventory {
    /// Create a new inventory.
    pub fn new(
        entries: Vec<InventoryEntry>,
        root_path: PathBuf,
        config: ScanConfig,
        stats: InventoryStats,
        scan_duration: Duration,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        Self {
            entries,
            root_path,
            scanned_at: SystemTime::now(),
            scan_duration,
            config,
            stats,
            warnings,
        }
    }

    /// Get the total number of files.
    pub fn total_files(&self) -> u64 {
        self.stats.total_files
    }

    /// Get the total size of all files.
    pub fn total_size(&self) -> u64 {
        self.stats.total_size
    }

    /// Check whether the scan found no files at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{ContentDigest, EntryKind};

    fn entry(name: &str, kind: EntryKind, size: u64, hashed: bool) -> InventoryEntry {
        InventoryEntry {
            name: name.into(),
            file_path: PathBuf::from(name),
            kind,
            file_size: size,
            last_write_time: None,
            file_version: String::new(),
            product_version: String::new(),
            build_date_time: None,
            linker_version: String::new(),
            digest: hashed.then(|| ContentDigest::new([0u8; 32])),
        }
    }

    #[test]
    fn test_stats_record_entry() {
        let mut stats = InventoryStats::new();
        stats.record_entry(&entry("a.txt", EntryKind::Generic, 5, true));
        stats.record_entry(&entry("b.exe", EntryKind::Executable, 10, true));
        stats.record_entry(&entry("gone.dll", EntryKind::Executable, 0, false));

        assert_eq!(stats.total_files, 3);
        assert_eq!(stats.total_size, 15);
        assert_eq!(stats.executable_files, 2);
        assert_eq!(stats.degraded_files, 1);
    }

    #[test]
    fn test_inventory_accessors() {
        let mut stats = InventoryStats::new();
        let entries = vec![entry("a.txt", EntryKind::Generic, 5, true)];
        for e in &entries {
            stats.record_entry(e);
        }

        let inventory = Inventory::new(
            entries,
            PathBuf::from("/dist"),
            ScanConfig::new("/dist"),
            stats,
            Duration::from_millis(10),
            Vec::new(),
        );

        assert_eq!(inventory.total_files(), 1);
        assert_eq!(inventory.total_size(), 5);
        assert!(!inventory.is_empty());
        assert!(!inventory.has_warnings());
    }
}
