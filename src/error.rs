use std::path::PathBuf;
use thiserror::Error;

/// Failures a hashing run can hit, split so each phase reports distinctly:
/// validation errors fire before any file is opened, access errors during
/// the open/read itself.
#[derive(Debug, Error)]
pub enum HashError {
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Pre-check: the path does not exist.
    #[error("File '{}' does not exist.", .0.display())]
    DoesNotExist(PathBuf),

    /// Pre-check: the path exists but is not a regular file.
    #[error("'{}' is not a file.", .0.display())]
    NotAFile(PathBuf),

    /// The file vanished between validation and open, or mid-read.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure while reading the file.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
