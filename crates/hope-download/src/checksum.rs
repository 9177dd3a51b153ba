//! MD5 verification of downloaded archives, computed after the transfer
//! completes and before anything is extracted.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use md5::{Digest, Md5};

use crate::error::DownloadError;

const BUF_SIZE: usize = 64 * 1024;

/// Compute the MD5 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large archives.
pub fn md5_hex(path: &Path) -> Result<String, DownloadError> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}
