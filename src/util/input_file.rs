//! Checks for files named on the command line
//!
//! Documents and scripts are small text files. Anything else (directories,
//! binaries, huge files) is rejected before it is read.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Largest input file accepted, in bytes (4 MB)
pub const MAX_INPUT_SIZE: u64 = 4 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub enum InputFileError {
    NotFound,
    PermissionDenied,
    IsDirectory,
    /// Contains null bytes in its first 8KB
    Binary,
    TooLarge { size_kb: u64 },
    Io(String),
}

impl std::fmt::Display for InputFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "file not found"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IsDirectory => write!(f, "is a directory"),
            Self::Binary => write!(f, "binary file"),
            Self::TooLarge { size_kb } => write!(
                f,
                "file too large ({} KB, max {} KB)",
                size_kb,
                MAX_INPUT_SIZE / 1024
            ),
            Self::Io(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for InputFileError {}

/// Check that `path` is a readable text file of reasonable size
pub fn check_input_file(path: &Path) -> Result<(), InputFileError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => InputFileError::NotFound,
        std::io::ErrorKind::PermissionDenied => InputFileError::PermissionDenied,
        _ => InputFileError::Io(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(InputFileError::IsDirectory);
    }

    if metadata.len() > MAX_INPUT_SIZE {
        return Err(InputFileError::TooLarge {
            size_kb: metadata.len() / 1024,
        });
    }

    if is_likely_binary(path) {
        return Err(InputFileError::Binary);
    }

    Ok(())
}

/// Scan the first 8KB for null bytes. Read errors count as text so the
/// actual read reports them.
fn is_likely_binary(path: &Path) -> bool {
    let Ok(mut file) = File::open(path) else {
        return false;
    };

    let mut buffer = [0u8; 8192];
    let Ok(bytes_read) = file.read(&mut buffer) else {
        return false;
    };

    buffer[..bytes_read].contains(&0)
}
