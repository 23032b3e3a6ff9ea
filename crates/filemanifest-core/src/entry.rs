//! Inventory entry types.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Extensions (lowercase, without dot) expected to carry a PE header.
pub const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "dll"];

/// SHA-256 content digest of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(pub [u8; 32]);

impl ContentDigest {
    /// Create a new ContentDigest from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Render the digest as 64 uppercase hex characters.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02X}")).collect()
    }
}

/// How a file is treated during metadata extraction.
///
/// Determined once per entry from the file extension; the binary-header
/// and version-info steps only run for `Executable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    /// Ordinary file: stat and content hash only.
    Generic,
    /// PE image candidate by extension, regardless of actual content.
    Executable,
}

impl EntryKind {
    /// Classify a path by case-insensitive extension match.
    pub fn from_path(path: &Path) -> Self {
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                EXECUTABLE_EXTENSIONS
                    .iter()
                    .any(|candidate| ext.eq_ignore_ascii_case(candidate))
            });
        if matches {
            Self::Executable
        } else {
            Self::Generic
        }
    }

    /// Check if this is the executable variant.
    pub fn is_executable(&self) -> bool {
        matches!(self, Self::Executable)
    }
}

/// One row of the inventory.
///
/// Every field is best-effort: a failed extraction leaves the documented
/// default (`0`, empty string, or `None`) without affecting the others.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryEntry {
    /// Display name, the path relative to the scan root.
    pub name: CompactString,

    /// Path used for all I/O on this file.
    pub file_path: PathBuf,

    /// Extension-derived classification.
    pub kind: EntryKind,

    /// Size in bytes; `0` if the size could not be read.
    pub file_size: u64,

    /// Last modification time; `None` if unreadable.
    pub last_write_time: Option<SystemTime>,

    /// Version string from the fixed version-information block.
    pub file_version: String,

    /// Product version string from the fixed version-information block.
    pub product_version: String,

    /// Build timestamp decoded from the PE header.
    pub build_date_time: Option<DateTime<Utc>>,

    /// Linker version as `"{major}.{minor}"`; empty when unavailable.
    pub linker_version: String,

    /// Content digest; `None` when the file could not be read.
    pub digest: Option<ContentDigest>,
}

impl InventoryEntry {
    /// Uppercase hex digest, or the empty string when the content could
    /// not be read.
    pub fn hash_string(&self) -> String {
        self.digest.map(|d| d.to_hex()).unwrap_or_default()
    }

    /// Check whether the content hash is missing.
    pub fn is_degraded(&self) -> bool {
        self.digest.is_none()
    }
}
