//! # docx-md
//!
//! Word document (.docx) to Markdown conversion for categorized project
//! documentation.
//!
//! A document is read into a small model of paragraphs and tables, rendered
//! to Markdown with a YAML front matter block and a category banner, and
//! written under `<docs root>/<category>/`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docx_md::{convert_file, Category};
//!
//! fn main() -> docx_md::Result<()> {
//!     let result = convert_file("API Guide.docx", Category::Technical, None)?;
//!     println!("Output saved to: {}", result.output_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Mapping
//!
//! - **Headings**: styles containing "heading 1".."heading 6", "title", "subtitle"
//! - **Lists**: "list"/"bullet" styles become `- item`, "number" styles `1. item`
//! - **Inline**: bold, italic and Courier-font runs become `**`, `*` and backticks
//! - **Tables**: pipe tables with the first row as header

pub mod category;
pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use category::Category;
pub use convert::{
    ConversionResult, ConvertOptions, DocumentProvider, DocxProvider, FsWriter, OutputWriter,
    WordToMarkdown,
};
pub use detect::{has_supported_extension, validate_input};
pub use error::{Error, Result};
pub use model::{BodyElement, DocumentModel, Paragraph, Run, Table, TableRow};
pub use parser::DocxReader;
pub use render::{ExtractionStats, MarkdownRenderer, RenderResult};

use chrono::Local;
use std::path::Path;

/// Parse a DOCX file into a document model.
///
/// # Example
///
/// ```no_run
/// use docx_md::parse_file;
///
/// let doc = parse_file("design.docx").unwrap();
/// println!("Body elements: {}", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<DocumentModel> {
    let path = path.as_ref();
    validate_input(path)?;
    DocxProvider::new().load(path)
}

/// Parse a DOCX package from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<DocumentModel> {
    DocxReader::from_bytes(data)?.parse()
}

/// Convert a DOCX file to Markdown without writing it.
///
/// The front matter is dated today.
///
/// # Example
///
/// ```no_run
/// use docx_md::{to_markdown, Category};
///
/// let markdown = to_markdown("requirements.docx", Category::Functional).unwrap();
/// std::fs::write("requirements.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P, category: Category) -> Result<String> {
    let path = path.as_ref();
    let doc = parse_file(path)?;
    let source_file = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(render::to_markdown(
        &doc,
        &source_file,
        category,
        Local::now().date_naive(),
    ))
}

/// Convert a DOCX file and write it under the default docs root.
pub fn convert_file<P: AsRef<Path>>(
    path: P,
    category: Category,
    output_name: Option<&str>,
) -> Result<ConversionResult> {
    WordToMarkdown::new(category).convert(path, output_name)
}
