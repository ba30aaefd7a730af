//! Output file naming and writing.

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::OutputWriter;
use crate::error::Result;

/// Extension of generated files.
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Writes Markdown to the local filesystem.
#[derive(Debug, Clone, Default)]
pub struct FsWriter {
    _private: (),
}

impl FsWriter {
    /// Create a new filesystem writer.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl OutputWriter for FsWriter {
    fn write(&self, dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(filename);
        fs::write(&path, content)?;
        Ok(path)
    }
}

/// Pick the output file name for `input`.
///
/// A non-empty `requested` name wins and gets `.md` appended unless it
/// already ends with it; otherwise the input's stem is used. The result is
/// passed through [`sanitize_filename`].
pub fn output_filename(input: &Path, requested: Option<&str>) -> String {
    let name = match requested.filter(|n| !n.is_empty()) {
        Some(name) if name.ends_with(MARKDOWN_EXTENSION) => name.to_string(),
        Some(name) => format!("{}{}", name, MARKDOWN_EXTENSION),
        None => {
            let stem = input
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            format!("{}{}", stem, MARKDOWN_EXTENSION)
        }
    };
    sanitize_filename(&name)
}

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
pub fn sanitize_filename(name: &str) -> String {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    let re = UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.\-]").unwrap());
    re.replace_all(name, "_").into_owned()
}
