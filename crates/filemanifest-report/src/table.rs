//! Separator-joined table rendering.

use std::io::{self, Write};
use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};

use filemanifest_core::InventoryEntry;

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = '\t';

/// Column labels, in output order.
pub const COLUMNS: [&str; 8] = [
    "Name",
    "Size",
    "LastWriteTime",
    "Hash",
    "FileVersion",
    "ProductVersion",
    "BuildDateTime",
    "LinkerVersion",
];

/// Timestamps render in the host's local time zone; output is therefore
/// not portable across zones.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Incremental table writer.
///
/// The header row is emitted lazily before the first record, so writing
/// zero records produces zero output lines.
pub struct TableWriter<W: Write> {
    out: W,
    separator: char,
    header_written: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a writer with the default tab separator.
    pub fn new(out: W) -> Self {
        Self::with_separator(out, DEFAULT_SEPARATOR)
    }

    /// Create a writer with a custom separator.
    pub fn with_separator(out: W, separator: char) -> Self {
        Self {
            out,
            separator,
            header_written: false,
        }
    }

    /// Write one entry row, preceded by the header on first use.
    pub fn write_entry(&mut self, entry: &InventoryEntry) -> io::Result<()> {
        if !self.header_written {
            let header = COLUMNS.join(&self.separator.to_string());
            writeln!(self.out, "{header}")?;
            self.header_written = true;
        }

        writeln!(
            self.out,
            "{name}{sep}{size}{sep}{mtime}{sep}{hash}{sep}{fv}{sep}{pv}{sep}{build}{sep}{linker}",
            sep = self.separator,
            name = entry.name,
            size = entry.file_size,
            mtime = format_system_time(entry.last_write_time),
            hash = entry.hash_string(),
            fv = entry.file_version,
            pv = entry.product_version,
            build = format_build_time(entry.build_date_time),
            linker = entry.linker_version,
        )
    }
}

/// Render all entries as a table.
pub fn write_table(
    entries: &[InventoryEntry],
    separator: char,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut writer = TableWriter::with_separator(out, separator);
    for entry in entries {
        writer.write_entry(entry)?;
    }
    Ok(())
}

/// Local-time rendering of an optional timestamp; absent renders empty.
pub fn format_system_time(time: Option<SystemTime>) -> String {
    time.map(|t| DateTime::<Local>::from(t).format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Local-time rendering of an optional UTC instant; absent renders empty.
pub fn format_build_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.with_timezone(&Local).format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use filemanifest_core::{ContentDigest, EntryKind};
    use std::path::PathBuf;

    fn bare_entry(name: &str) -> InventoryEntry {
        InventoryEntry {
            name: name.into(),
            file_path: PathBuf::from(name),
            kind: EntryKind::Generic,
            file_size: 0,
            last_write_time: None,
            file_version: String::new(),
            product_version: String::new(),
            build_date_time: None,
            linker_version: String::new(),
            digest: None,
        }
    }

    #[test]
    fn test_no_entries_no_output() {
        let mut out = Vec::new();
        write_table(&[], DEFAULT_SEPARATOR, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_header_written_once() {
        let mut out = Vec::new();
        write_table(
            &[bare_entry("a.txt"), bare_entry("b.txt")],
            DEFAULT_SEPARATOR,
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Name\tSize\tLastWriteTime\tHash\tFileVersion\tProductVersion\tBuildDateTime\tLinkerVersion"
        );
        assert!(lines[1].starts_with("a.txt\t"));
        assert!(lines[2].starts_with("b.txt\t"));
    }

    #[test]
    fn test_absent_fields_render_empty() {
        let mut out = Vec::new();
        write_table(&[bare_entry("x")], DEFAULT_SEPARATOR, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "x\t0\t\t\t\t\t\t");
        assert_eq!(row.matches('\t').count(), 7);
    }

    #[test]
    fn test_populated_row() {
        let mut entry = bare_entry("app.exe");
        entry.kind = EntryKind::Executable;
        entry.file_size = 2048;
        entry.file_version = "1.2.3.4".to_string();
        entry.product_version = "1.2.0.0".to_string();
        entry.linker_version = "14.29".to_string();
        entry.digest = Some(ContentDigest::new([0xab; 32]));

        let mut out = Vec::new();
        write_table(&[entry], DEFAULT_SEPARATOR, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        let fields: Vec<&str> = row.split('\t').collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[0], "app.exe");
        assert_eq!(fields[1], "2048");
        assert_eq!(fields[3], "AB".repeat(32));
        assert_eq!(fields[4], "1.2.3.4");
        assert_eq!(fields[5], "1.2.0.0");
        assert_eq!(fields[7], "14.29");
    }

    #[test]
    fn test_custom_separator() {
        let mut out = Vec::new();
        write_table(&[bare_entry("a")], ';', &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Name;Size;"));
        assert!(text.lines().nth(1).unwrap().starts_with("a;0;"));
    }

    #[test]
    fn test_time_rendering() {
        assert_eq!(format_system_time(None), "");
        assert_eq!(format_build_time(None), "");

        let instant = Utc.timestamp_opt(1_600_000_000, 0).unwrap();
        let rendered = format_build_time(Some(instant));
        // Exact value depends on the host zone; the shape does not.
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[4..5], "-");
        assert_eq!(&rendered[10..11], " ");
    }
}
