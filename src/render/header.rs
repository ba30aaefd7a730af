//! Front matter and category banner.

use chrono::NaiveDate;
use std::path::Path;

use crate::category::Category;

/// Marker line opening and closing the front matter block.
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Metadata placed in the front matter block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter {
    /// File name without extension
    pub title: String,
    /// Category identifier
    pub category: String,
    /// Category display name
    pub doc_type: String,
    /// Conversion date
    pub created_date: NaiveDate,
    /// Original file name with extension
    pub source_file: String,
}

impl FrontMatter {
    /// Build the metadata for a source file name.
    pub fn new(source_file: &str, category: Category, created_date: NaiveDate) -> Self {
        let title = Path::new(source_file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            title,
            category: category.id().to_string(),
            doc_type: category.display_name(),
            created_date,
            source_file: source_file.to_string(),
        }
    }

    /// Render as a YAML front matter block followed by a blank line.
    pub fn to_yaml(&self) -> String {
        let mut yaml = String::new();
        yaml.push_str(FRONTMATTER_DELIMITER);
        yaml.push('\n');
        push_field(&mut yaml, "title", &self.title);
        push_field(&mut yaml, "category", &self.category);
        push_field(&mut yaml, "type", &self.doc_type);
        push_field(
            &mut yaml,
            "created_date",
            &self.created_date.format("%Y-%m-%d").to_string(),
        );
        push_field(&mut yaml, "source_file", &self.source_file);
        yaml.push_str(FRONTMATTER_DELIMITER);
        yaml.push_str("\n\n");
        yaml
    }
}

fn push_field(yaml: &mut String, key: &str, value: &str) {
    yaml.push_str(&format!("{}: \"{}\"\n", key, value));
}

/// Generate the metadata header for a source file name.
pub fn metadata_header(source_file: &str, category: Category, created_date: NaiveDate) -> String {
    FrontMatter::new(source_file, category, created_date).to_yaml()
}

/// Block-quote banner naming the document type, then a horizontal rule.
pub fn category_banner(category: Category) -> String {
    format!(
        "\n> **Document Type**: {}\n>\n> This document describes {}.\n\n---\n\n",
        category.display_name(),
        category.description()
    )
}
