//! DOCX document provider.

use std::path::Path;

use super::DocumentProvider;
use crate::detect::check_container;
use crate::error::Result;
use crate::model::DocumentModel;
use crate::parser::DocxReader;

/// Loads `.docx` packages with [`DocxReader`].
#[derive(Debug, Clone, Default)]
pub struct DocxProvider {
    _private: (),
}

impl DocxProvider {
    /// Create a new DOCX provider.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl DocumentProvider for DocxProvider {
    fn name(&self) -> &str {
        "docx"
    }

    fn load(&self, path: &Path) -> Result<DocumentModel> {
        check_container(path)?;
        DocxReader::open(path)?.parse()
    }
}
