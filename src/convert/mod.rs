//! Document conversion: reading, rendering and writing in one call.
//!
//! [`WordToMarkdown`] ties the pieces together. The input and output
//! boundaries are traits so the transformer can be driven with any document
//! source or destination.
//!
//! # Example
//!
//! ```no_run
//! use docx_md::{Category, ConvertOptions, WordToMarkdown};
//!
//! fn main() -> docx_md::Result<()> {
//!     let options = ConvertOptions::new().with_docs_root("docs");
//!     let converter = WordToMarkdown::with_options(Category::Architecture, options);
//!
//!     let result = converter.convert("System Design.docx", None)?;
//!     println!("{}", result.output_path.display());
//!     Ok(())
//! }
//! ```

mod docx;
mod writer;

pub use docx::DocxProvider;
pub use writer::{output_filename, sanitize_filename, FsWriter};

use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};

use crate::category::Category;
use crate::detect::validate_input;
use crate::error::{Error, Result};
use crate::model::DocumentModel;
use crate::render::{ExtractionStats, MarkdownRenderer, RenderResult};

/// Default root directory for the category subdirectories.
pub const DEFAULT_DOCS_ROOT: &str = "docs";

/// Options for document conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory holding one subdirectory per category
    pub docs_root: PathBuf,

    /// Date written to the front matter (today if not set)
    pub created_date: Option<NaiveDate>,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the documentation root directory.
    pub fn with_docs_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.docs_root = root.into();
        self
    }

    /// Fix the creation date instead of reading the clock.
    pub fn with_created_date(mut self, date: NaiveDate) -> Self {
        self.created_date = Some(date);
        self
    }

    /// The date to stamp on the next conversion.
    pub fn resolved_date(&self) -> NaiveDate {
        self.created_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            docs_root: PathBuf::from(DEFAULT_DOCS_ROOT),
            created_date: None,
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    /// Generated Markdown
    pub markdown: String,

    /// Where the Markdown was written
    pub output_path: PathBuf,

    /// Rendering statistics
    pub stats: ExtractionStats,
}

impl ConversionResult {
    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.markdown.len()
    }
}

/// Input boundary: turns a file into a document model.
pub trait DocumentProvider: Send + Sync {
    /// Get the name of this provider.
    fn name(&self) -> &str;

    /// Load the document at `path`.
    fn load(&self, path: &Path) -> Result<DocumentModel>;
}

/// Output boundary: stores rendered Markdown.
pub trait OutputWriter: Send + Sync {
    /// Write `content` to `dir/filename`, creating `dir` as needed and
    /// overwriting any existing file. Returns the written path.
    fn write(&self, dir: &Path, filename: &str, content: &str) -> Result<PathBuf>;
}

/// Converts Word documents of one category to Markdown files.
pub struct WordToMarkdown {
    category: Category,
    options: ConvertOptions,
    provider: Box<dyn DocumentProvider>,
    writer: Box<dyn OutputWriter>,
}

impl WordToMarkdown {
    /// Create a converter with default options.
    pub fn new(category: Category) -> Self {
        Self::with_options(category, ConvertOptions::default())
    }

    /// Create a converter with custom options.
    pub fn with_options(category: Category, options: ConvertOptions) -> Self {
        Self {
            category,
            options,
            provider: Box::new(DocxProvider::new()),
            writer: Box::new(FsWriter::new()),
        }
    }

    /// Replace the document provider.
    pub fn with_provider(mut self, provider: impl DocumentProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    /// Replace the output writer.
    pub fn with_writer(mut self, writer: impl OutputWriter + 'static) -> Self {
        self.writer = Box::new(writer);
        self
    }

    /// The category this converter writes.
    pub fn category(&self) -> Category {
        self.category
    }

    /// The conversion options.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Directory receiving this converter's output.
    pub fn output_dir(&self) -> PathBuf {
        self.category.output_dir(&self.options.docs_root)
    }

    /// Render an already-loaded document without touching the filesystem.
    pub fn render(&self, doc: &DocumentModel, source_file: &str) -> RenderResult {
        MarkdownRenderer::new(self.category, self.options.resolved_date()).render(doc, source_file)
    }

    /// Convert the document at `input` and write the Markdown file.
    ///
    /// The file name is `output_name` (with `.md` appended if missing) or
    /// the input's stem plus `.md`, sanitized to `[A-Za-z0-9_.-]`.
    ///
    /// # Errors
    ///
    /// * [`Error::NotFound`] if `input` does not exist
    /// * [`Error::InvalidInput`] if `input` is not a `.docx` file
    /// * [`Error::ConversionFailed`] for any reading, rendering or writing failure
    pub fn convert<P: AsRef<Path>>(
        &self,
        input: P,
        output_name: Option<&str>,
    ) -> Result<ConversionResult> {
        let input = input.as_ref();
        validate_input(input)?;

        let source_file = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        log::debug!(
            "Converting {} as {} with provider '{}'",
            input.display(),
            self.category,
            self.provider.name()
        );
        let doc = self
            .provider
            .load(input)
            .map_err(Error::into_conversion_failure)?;

        let rendered = self.render(&doc, &source_file);
        let filename = output_filename(input, output_name);
        let output_path = self
            .writer
            .write(&self.output_dir(), &filename, &rendered.content)
            .map_err(Error::into_conversion_failure)?;

        log::info!(
            "Wrote {} ({} bytes)",
            output_path.display(),
            rendered.content_len()
        );

        Ok(ConversionResult {
            markdown: rendered.content,
            output_path,
            stats: rendered.stats,
        })
    }
}
