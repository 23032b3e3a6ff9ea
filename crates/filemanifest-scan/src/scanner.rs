//! Scan orchestration.

use std::time::Instant;

use rayon::prelude::*;

use filemanifest_core::{Inventory, InventoryEntry, InventoryStats, ScanConfig, ScanError};

use crate::builder::build_entry;
use crate::walker::{discover_files, DiscoveredFile};

/// Builds a complete [`Inventory`] from a [`ScanConfig`].
///
/// Traversal and entry building run in parallel; the output order is
/// the lexicographic path order established during discovery, never the
/// completion order of the workers.
pub struct InventoryScanner;

impl InventoryScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Perform a scan of the configured root.
    pub fn scan(&self, config: &ScanConfig) -> Result<Inventory, ScanError> {
        let start = Instant::now();
        let root_path = config
            .root
            .canonicalize()
            .map_err(|e| ScanError::io(&config.root, e))?;

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory { path: root_path });
        }

        let (files, warnings) = discover_files(config, &root_path)?;
        let entries = build_entries(config, files)?;

        let mut stats = InventoryStats::new();
        for entry in &entries {
            stats.record_entry(entry);
        }

        Ok(Inventory::new(
            entries,
            root_path,
            config.clone(),
            stats,
            start.elapsed(),
            warnings,
        ))
    }
}

impl Default for InventoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Build all entries, in parallel, preserving discovery order.
fn build_entries(
    config: &ScanConfig,
    files: Vec<DiscoveredFile>,
) -> Result<Vec<InventoryEntry>, ScanError> {
    let build_all = move || {
        files
            .into_par_iter()
            .map(|file| build_entry(file.name, file.path))
            .collect::<Vec<_>>()
    };

    match config.threads {
        0 => Ok(build_all()),
        threads => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| ScanError::InvalidConfig {
                    message: format!("cannot build worker pool: {e}"),
                })?;
            Ok(pool.install(build_all))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_counts_and_order() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("z.txt"), "zz").unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();
        fs::write(temp.path().join("sub/m.txt"), "mmm").unwrap();

        let config = ScanConfig::new(temp.path());
        let inventory = InventoryScanner::new().scan(&config).unwrap();

        let names: Vec<&str> = inventory.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a.txt", "sub/m.txt", "z.txt"]);
        assert_eq!(inventory.total_files(), 3);
        assert_eq!(inventory.total_size(), 6);
    }

    #[test]
    fn test_scan_rejects_file_root() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not_a_dir");
        fs::write(&file, "x").unwrap();

        let config = ScanConfig::new(&file);
        assert!(matches!(
            InventoryScanner::new().scan(&config),
            Err(ScanError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_scan_rejects_missing_root() {
        let temp = TempDir::new().unwrap();
        let config = ScanConfig::new(temp.path().join("nowhere"));
        assert!(InventoryScanner::new().scan(&config).is_err());
    }

    #[test]
    fn test_scan_with_bounded_pool() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.txt"), "a").unwrap();

        let config = ScanConfig::builder()
            .root(temp.path())
            .threads(2usize)
            .build()
            .unwrap();

        let inventory = InventoryScanner::new().scan(&config).unwrap();
        assert_eq!(inventory.total_files(), 1);
    }
}
