//! Rendering module for converting Word documents to Markdown.

mod header;
mod inline;
mod markdown;
mod paragraph;
mod result;
mod table;

pub use header::{category_banner, metadata_header, FrontMatter, FRONTMATTER_DELIMITER};
pub use inline::{apply_inline_formatting, format_run};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use paragraph::{classify_style, convert_paragraph, ParagraphKind, StyleRule, STYLE_RULES};
pub use result::{ExtractionStats, RenderResult};
pub use table::{convert_table, escape_cell};
