//! File reading and writing helpers.
//!
//! Input text comes from a file or from stdin; chunk files and manifests
//! are written with parent directories created on demand.

use crate::error::{IoError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Maximum input size accepted (64MB).
const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Source name that selects stdin instead of a file.
pub const STDIN_SOURCE: &str = "-";

/// Text file reader with a size guard.
///
/// # Examples
///
/// ```no_run
/// use speech_chunker::io::FileReader;
///
/// let reader = FileReader::open("chapter.txt").unwrap();
/// let content = reader.read_to_string().unwrap();
/// ```
pub struct FileReader {
    /// File handle.
    file: File,
    /// File size in bytes.
    size: u64,
    /// File path for error messages.
    path: String,
}

impl FileReader {
    /// Opens a file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or is
    /// larger than the input limit.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_FILE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_FILE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the file content as a string.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        read_limited(&self.file, &self.path, MAX_FILE_SIZE)
    }
}

/// Reads at most `limit` bytes of UTF-8 text from `reader`.
///
/// Input longer than `limit` is rejected rather than truncated.
fn read_limited<R: Read>(reader: R, name: &str, limit: u64) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| IoError::ReadFailed {
            path: name.to_string(),
            reason: e.to_string(),
        })?;

    if u64::try_from(buffer.len()).unwrap_or(u64::MAX) > limit {
        return Err(IoError::ReadFailed {
            path: name.to_string(),
            reason: format!("input too large: more than {limit} bytes"),
        }
        .into());
    }

    String::from_utf8(buffer).map_err(|e| {
        IoError::ReadFailed {
            path: name.to_string(),
            reason: format!("invalid UTF-8 at byte {}", e.utf8_error().valid_up_to()),
        }
        .into()
    })
}

/// Reads a file to string.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    FileReader::open(path)?.read_to_string()
}

/// Reads input text from a path, or from stdin when `source` is `-`.
///
/// # Errors
///
/// Returns an error if the source cannot be read, is larger than the input
/// limit, or is not valid UTF-8.
pub fn read_input(source: &str) -> Result<String> {
    if source == STDIN_SOURCE {
        return read_limited(std::io::stdin().lock(), "<stdin>", MAX_FILE_SIZE);
    }
    read_file(source)
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str,
        reason: e.to_string(),
    })?;

    Ok(())
}

/// Returns the file name used for the chunk at `index`.
///
/// # Examples
///
/// ```
/// use speech_chunker::io::chunk_file_name;
///
/// assert_eq!(chunk_file_name("part", 7), "part_0007.txt");
/// ```
#[must_use]
pub fn chunk_file_name(prefix: &str, index: usize) -> String {
    format!("{prefix}_{index:04}.txt")
}

/// Returns whether `name` is a chunk file name produced for `prefix`.
#[must_use]
pub fn is_chunk_file_name(prefix: &str, name: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('_'))
        .and_then(|rest| rest.strip_suffix(".txt"))
        .is_some_and(|digits| digits.len() >= 4 && digits.bytes().all(|b| b.is_ascii_digit()))
}
