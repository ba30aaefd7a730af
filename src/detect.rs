//! DOCX input detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Supported input extensions (lowercase, without the leading dot).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["docx"];

/// Local file header signature of a ZIP archive: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Check that `path` names an existing file with a supported extension.
///
/// # Returns
/// * `Err(Error::NotFound)` if the path does not exist
/// * `Err(Error::InvalidInput)` if the extension is not `.docx`
///
/// Nothing is read from the file.
pub fn validate_input<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    if !has_supported_extension(path) {
        return Err(Error::InvalidInput(
            "Input file must be a .docx file".to_string(),
        ));
    }

    Ok(())
}

/// Check if the path has a supported extension (case-insensitive).
pub fn has_supported_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let ext = e.to_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|s| *s == ext)
        })
        .unwrap_or(false)
}

/// Check if bytes start with a ZIP local file header.
///
/// Every DOCX package is a ZIP archive, so this rejects plain-text or legacy
/// `.doc` files renamed to `.docx` before the archive reader sees them.
pub fn is_zip_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC)
}

/// Check the ZIP signature of a file on disk.
pub fn check_container<P: AsRef<Path>>(path: P) -> Result<()> {
    let mut header = [0u8; 4];
    let mut file = File::open(path)?;
    let read = file.read(&mut header)?;
    if is_zip_bytes(&header[..read]) {
        Ok(())
    } else {
        Err(Error::Container("not a ZIP archive".to_string()))
    }
}
