//! Streaming SHA-256 content hashing.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use filemanifest_core::ContentDigest;

/// Buffer size for streaming file reads (64 KiB).
const BUF_SIZE: usize = 64 * 1024;

/// Compute the SHA-256 digest of a file's full content.
///
/// Streams the file in bounded reads so memory use stays constant
/// regardless of file size.
pub(crate) fn sha256_file(path: &Path) -> io::Result<ContentDigest> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; BUF_SIZE];

    loop {
        let read = file.read(&mut buf)?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }

    Ok(ContentDigest::new(hasher.finalize().into()))
}
