//! Common test utilities for integration tests

use std::io::Write;
use tempfile::NamedTempFile;

/// Write `contents` to a temporary settings file
///
/// The file is deleted when the returned handle is dropped.
pub fn settings_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write settings");
    file.flush().expect("Failed to flush settings");
    file
}
