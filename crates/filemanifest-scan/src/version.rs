//! Fixed version-information block decoding.
//!
//! Locates the block by its little-endian signature rather than walking
//! the resource directory tree, then decodes the file and product version
//! quadruples from the fixed layout that follows.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Little-endian encoding of the fixed-info signature `0xFEEF04BD`.
const FIXED_INFO_SIGNATURE: [u8; 4] = 0xFEEF_04BDu32.to_le_bytes();

/// Bytes needed from the signature through the product version dwords.
const FIXED_INFO_LEN: usize = 24;

/// Chunk size for the sliding-window scan (64 KiB).
const READ_CHUNK: usize = 64 * 1024;

/// Decoded version strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VersionInfo {
    pub file_version: String,
    pub product_version: String,
}

/// Scan a file for the fixed version-information block.
///
/// Returns `Ok(None)` when no complete block exists; the scan keeps a
/// small overlap between reads so a block split across chunk boundaries
/// is still found.
pub(crate) fn read_version_info(path: &Path) -> io::Result<Option<VersionInfo>> {
    let mut file = File::open(path)?;
    let mut buf = vec![0u8; READ_CHUNK + FIXED_INFO_LEN];
    let mut carried = 0usize;

    loop {
        let read = file.read(&mut buf[carried..])?;
        if read == 0 {
            return Ok(None);
        }
        let filled = carried + read;

        if let Some(block) = find_fixed_info(&buf[..filled]) {
            return Ok(Some(decode_fixed_info(block)));
        }

        // Keep a tail so a block straddling two reads is still matched.
        let keep = filled.min(FIXED_INFO_LEN - 1);
        buf.copy_within(filled - keep..filled, 0);
        carried = keep;
    }
}

fn find_fixed_info(window: &[u8]) -> Option<&[u8]> {
    window
        .windows(FIXED_INFO_LEN)
        .find(|candidate| candidate[..4] == FIXED_INFO_SIGNATURE)
}

fn decode_fixed_info(block: &[u8]) -> VersionInfo {
    VersionInfo {
        file_version: format_version(read_u32_le(block, 8), read_u32_le(block, 12)),
        product_version: format_version(read_u32_le(block, 16), read_u32_le(block, 20)),
    }
}

fn read_u32_le(block: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&block[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

fn format_version(most: u32, least: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        most >> 16,
        most & 0xFFFF,
        least >> 16,
        least & 0xFFFF
    )
}
