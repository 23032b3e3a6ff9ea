//! Fixed-offset PE header reads.
//!
//! Only three fields are decoded: the extended-header pointer of the
//! legacy executable stub, the build timestamp, and the linker version
//! pair. Nothing else of the format is parsed or validated.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};

/// Offset of the extended-header pointer in the legacy stub.
const HEADER_POINTER_OFFSET: u64 = 60;

/// Offset of the build timestamp, relative to the extended header.
const TIMESTAMP_FIELD_OFFSET: u64 = 8;

/// Offset of the linker version pair, relative to the extended header.
const LINKER_FIELD_OFFSET: u64 = 26;

/// The three decoded header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeaderFields {
    /// Build timestamp, decoded from epoch seconds.
    pub build_time: DateTime<Utc>,
    pub linker_major: i8,
    pub linker_minor: i8,
}

impl HeaderFields {
    /// Render the linker version as `"{major}.{minor}"`.
    pub fn linker_version(&self) -> String {
        format!("{}.{}", self.linker_major, self.linker_minor)
    }
}

/// Read the three fixed header fields as one atomic attempt.
///
/// Any I/O failure, negative header pointer, or short read fails the
/// whole attempt so the caller never sees a partially-populated pair.
pub(crate) fn read_header_fields(path: &Path) -> io::Result<HeaderFields> {
    let mut file = File::open(path)?;

    file.seek(SeekFrom::Start(HEADER_POINTER_OFFSET))?;
    let pointer = read_i32_le(&mut file)?;
    let header_offset = u64::try_from(pointer)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "negative header offset"))?;

    file.seek(SeekFrom::Start(header_offset + TIMESTAMP_FIELD_OFFSET))?;
    let stamp = read_i32_le(&mut file)?;
    let build_time = Utc
        .timestamp_opt(i64::from(stamp), 0)
        .single()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "timestamp out of range"))?;

    file.seek(SeekFrom::Start(header_offset + LINKER_FIELD_OFFSET))?;
    let mut pair = [0u8; 2];
    file.read_exact(&mut pair)?;

    Ok(HeaderFields {
        build_time,
        linker_major: pair[0] as i8,
        linker_minor: pair[1] as i8,
    })
}

fn read_i32_le(reader: &mut impl Read) -> io::Result<i32> {
    let mut bytes = [0u8; 4];
    reader.read_exact(&mut bytes)?;
    Ok(i32::from_le_bytes(bytes))
}
