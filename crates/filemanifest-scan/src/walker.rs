//! Directory traversal.

use std::path::{Path, PathBuf};
use std::time::Duration;

use compact_str::CompactString;
use jwalk::{Parallelism, WalkDir};

use filemanifest_core::{ScanConfig, ScanError, ScanWarning, WarningKind};

/// A file discovered during traversal, with its root-relative name.
pub(crate) struct DiscoveredFile {
    pub name: CompactString,
    pub path: PathBuf,
}

/// Enumerate all regular files under the root.
///
/// Walk errors become warnings rather than aborting the scan. The result
/// is sorted lexicographically by path components so output order is
/// independent of traversal scheduling.
pub(crate) fn discover_files(
    config: &ScanConfig,
    root_path: &Path,
) -> Result<(Vec<DiscoveredFile>, Vec<ScanWarning>), ScanError> {
    let parallelism = match config.threads {
        0 => Parallelism::RayonDefaultPool {
            busy_timeout: Duration::from_millis(100),
        },
        n => Parallelism::RayonNewPool(n),
    };

    let walker = WalkDir::new(root_path)
        .parallelism(parallelism)
        .skip_hidden(!config.include_hidden)
        .follow_links(config.follow_symlinks)
        .max_depth(config.max_depth.map(|d| d as usize).unwrap_or(usize::MAX));

    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for entry_result in walker {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
                let kind = match err.io_error().map(|e| e.kind()) {
                    Some(std::io::ErrorKind::PermissionDenied) => WarningKind::PermissionDenied,
                    _ => WarningKind::ReadError,
                };
                warnings.push(ScanWarning::new(path, err.to_string(), kind));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().to_string();
        if config.should_ignore(&file_name) {
            continue;
        }

        let path = entry.path();
        let name = match path.strip_prefix(root_path) {
            Ok(relative) => CompactString::new(relative.to_string_lossy()),
            Err(_) => CompactString::new(path.to_string_lossy()),
        };

        files.push(DiscoveredFile { name, path });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));

    Ok((files, warnings))
}
