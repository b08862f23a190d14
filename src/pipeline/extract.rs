//! Archive extraction into a scratch directory.
//!
//! Handles plain and gzip-compressed tar archives, auto-detected by magic
//! bytes with an extension fallback. Extraction never deletes pre-existing
//! content under the destination; the caller owns the scratch lifecycle.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{debug, info};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unreadable or corrupt archive {path}: {message}")]
    Archive { path: String, message: String },
}

/// Extract a tar archive (plain or gzip-compressed) into `dest`.
///
/// `dest` is created if absent. Returns the number of entries unpacked.
/// Entries whose paths would escape `dest` are skipped, not unpacked.
///
/// # Errors
///
/// Returns `ExtractError::Io` if the archive cannot be opened or `dest`
/// cannot be created, and `ExtractError::Archive` if the archive content is
/// unreadable or corrupt. Either failure is fatal for this archive only;
/// batch processing of other archives continues.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<usize, ExtractError> {
    std::fs::create_dir_all(dest)?;

    let mut file = File::open(archive)?;
    let gzipped = match read_magic(&mut file)? {
        Some(magic) => magic == GZIP_MAGIC,
        // Too short for magic bytes; fall back to the extension
        None => has_gzip_extension(archive),
    };
    debug!(archive = %archive.display(), gzipped, "detected archive compression");

    let reader = BufReader::new(file);
    let count = if gzipped {
        unpack(tar::Archive::new(GzDecoder::new(reader)), archive, dest)?
    } else {
        unpack(tar::Archive::new(reader), archive, dest)?
    };

    info!(archive = %archive.display(), entries = count, "extraction complete");
    Ok(count)
}

fn unpack<R: Read>(
    mut tar: tar::Archive<R>,
    archive: &Path,
    dest: &Path,
) -> Result<usize, ExtractError> {
    let mut count = 0usize;

    let entries = tar.entries().map_err(|e| archive_error(archive, &e))?;
    for entry in entries {
        let mut entry = entry.map_err(|e| archive_error(archive, &e))?;
        let unpacked = entry
            .unpack_in(dest)
            .map_err(|e| archive_error(archive, &e))?;
        count += usize::from(unpacked);
    }

    Ok(count)
}

/// Leading two bytes of the file, or `None` when it is shorter than that.
/// The read position is rewound either way.
fn read_magic(file: &mut File) -> io::Result<Option<[u8; 2]>> {
    let mut magic = [0u8; 2];
    let result = match file.read_exact(&mut magic) {
        Ok(()) => Some(magic),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => None,
        Err(e) => return Err(e),
    };
    file.rewind()?;
    Ok(result)
}

fn has_gzip_extension(archive: &Path) -> bool {
    archive
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".gz") || n.ends_with(".tgz"))
}

fn archive_error(path: &Path, message: &dyn Display) -> ExtractError {
    ExtractError::Archive {
        path: path.display().to_string(),
        message: message.to_string(),
    }
}
