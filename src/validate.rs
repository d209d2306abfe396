use std::path::Path;

use crate::error::HashError;

/// Confirm the path exists and denotes a regular file. Runs before the
/// algorithm is resolved, so bad paths never open an accumulator and the
/// diagnostic is clearer than a generic open failure.
pub fn validate_path(path: &Path) -> Result<(), HashError> {
    if !path.exists() {
        return Err(HashError::DoesNotExist(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(HashError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}
