use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use chrono::TimeZone;
use filemanifest_core::{ContentDigest, EntryKind, InventoryEntry};
use filemanifest_report::{write_table, TableWriter, COLUMNS, DEFAULT_SEPARATOR};

fn entry(name: &str) -> InventoryEntry {
    InventoryEntry {
        name: name.into(),
        file_path: PathBuf::from(name),
        kind: EntryKind::from_path(std::path::Path::new(name)),
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
fn test_column_contract() {
    assert_eq!(
        COLUMNS,
        [
            "Name",
            "Size",
            "LastWriteTime",
            "Hash",
            "FileVersion",
            "ProductVersion",
            "BuildDateTime",
            "LinkerVersion"
        ]
    );
    assert_eq!(DEFAULT_SEPARATOR, '\t');
}

#[test]
fn test_incremental_writer_matches_batch() {
    let mut executable = entry("bin/tool.exe");
    executable.file_size = 1024;
    executable.build_date_time = chrono::Utc.timestamp_opt(1_500_000_000, 0).single();
    executable.linker_version = "10.0".to_string();
    executable.digest = Some(ContentDigest::new([0x11; 32]));

    let mut text_file = entry("docs/readme.txt");
    text_file.file_size = 42;
    text_file.last_write_time = Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_700_000_000));
    text_file.digest = Some(ContentDigest::new([0x22; 32]));

    let entries = vec![executable, text_file];

    let mut batch = Vec::new();
    write_table(&entries, DEFAULT_SEPARATOR, &mut batch).unwrap();

    let mut incremental = Vec::new();
    let mut writer = TableWriter::new(&mut incremental);
    for e in &entries {
        writer.write_entry(e).unwrap();
    }
    drop(writer);

    assert_eq!(batch, incremental);

    let text = String::from_utf8(batch).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in &lines {
        assert_eq!(line.matches('\t').count(), 7);
    }
}

#[test]
fn test_every_row_has_eight_fields() {
    let names = ["a.txt", "b.exe", "deep/nested/c.dll"];
    let entries: Vec<InventoryEntry> = names.iter().map(|n| entry(n)).collect();

    let mut out = Vec::new();
    write_table(&entries, DEFAULT_SEPARATOR, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    for line in text.lines() {
        assert_eq!(line.split('\t').count(), 8);
    }
}
