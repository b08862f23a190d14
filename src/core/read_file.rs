use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

/// One discovered sequencing read file.
///
/// Identity is the path: two `ReadFile`s are never aliased. The handle is
/// read-only; it records where the file lives and, once known, how large it
/// is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct ReadFile {
    /// Full path to the file
    pub path: PathBuf,

    /// Bare file name, the classifier's only input
    pub file_name: String,

    /// Byte size, filled in when the locator has it cheaply
    #[serde(skip_serializing_if = "Option::is_none")]
    len: Option<u64>,
}

impl ReadFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            file_name,
            len: None,
        }
    }

    #[must_use]
    pub fn with_len(mut self, len: u64) -> Self {
        self.len = Some(len);
        self
    }

    /// Byte size of the file, queried from the filesystem when not already
    /// known.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the size is unknown and the
    /// file's metadata cannot be read.
    pub fn byte_len(&self) -> io::Result<u64> {
        match self.len {
            Some(len) => Ok(len),
            None => fs::metadata(&self.path).map(|m| m.len()),
        }
    }
}
