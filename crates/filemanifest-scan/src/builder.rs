//! Per-file entry construction.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use compact_str::CompactString;

use filemanifest_core::{EntryKind, InventoryEntry};

use crate::{hash, pe, version};

/// Build one inventory entry for a file.
///
/// Never fails as a whole: each extraction step is attempted in
/// isolation and degrades to its default (`0`, empty string, `None`) on
/// error. The file is opened and closed per step; no handle outlives the
/// call.
pub fn build_entry(name: impl Into<CompactString>, file_path: impl Into<PathBuf>) -> InventoryEntry {
    let name = name.into();
    let file_path = file_path.into();
    let kind = EntryKind::from_path(&file_path);

    let (file_size, last_write_time) = read_stat(&file_path);
    let (file_version, product_version) = read_versions(&file_path, kind);
    let (build_date_time, linker_version) = read_header(&file_path, kind);

    let digest = match hash::sha256_file(&file_path) {
        Ok(digest) => Some(digest),
        Err(err) => {
            tracing::debug!(path = %file_path.display(), error = %err, "content hash failed");
            None
        }
    };

    InventoryEntry {
        name,
        file_path,
        kind,
        file_size,
        last_write_time,
        file_version,
        product_version,
        build_date_time,
        linker_version,
        digest,
    }
}

fn read_stat(file_path: &Path) -> (u64, Option<SystemTime>) {
    match fs::metadata(file_path) {
        Ok(meta) => (meta.len(), meta.modified().ok()),
        Err(err) => {
            tracing::debug!(path = %file_path.display(), error = %err, "stat failed");
            (0, None)
        }
    }
}

fn read_versions(file_path: &Path, kind: EntryKind) -> (String, String) {
    if !kind.is_executable() {
        return (String::new(), String::new());
    }
    match version::read_version_info(file_path) {
        Ok(Some(info)) => (info.file_version, info.product_version),
        Ok(None) => (String::new(), String::new()),
        Err(err) => {
            tracing::debug!(path = %file_path.display(), error = %err, "version info failed");
            (String::new(), String::new())
        }
    }
}

/// The two header outputs are one atomic attempt: a failure partway
/// through blanks both.
fn read_header(file_path: &Path, kind: EntryKind) -> (Option<DateTime<Utc>>, String) {
    if !kind.is_executable() {
        return (None, String::new());
    }
    match pe::read_header_fields(file_path) {
        Ok(fields) => (Some(fields.build_time), fields.linker_version()),
        Err(err) => {
            tracing::debug!(path = %file_path.display(), error = %err, "header read failed");
            (None, String::new())
        }
    }
}
