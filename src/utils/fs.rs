use std::fs;
use std::path::Path;

use crate::utils::error::TocError;

/// Check if a path exists and is a file
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().is_file()
}

/// Read a file to string, naming the path in the error
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String, TocError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| {
        TocError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

/// Lowercased file extension, if any
pub fn extension_of<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}
