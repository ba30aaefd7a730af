//! Inline run formatting.

use crate::model::{Paragraph, Run};

/// Combine a paragraph's runs into one string with Markdown emphasis.
///
/// Empty runs are skipped. A paragraph without any runs falls back to its
/// plain text, unformatted.
pub fn apply_inline_formatting(paragraph: &Paragraph) -> String {
    if paragraph.runs.is_empty() {
        return paragraph.text.clone();
    }

    paragraph
        .runs
        .iter()
        .filter(|run| !run.is_empty())
        .map(format_run)
        .collect()
}

/// Format a single run; code styling wraps the emphasis markers.
pub fn format_run(run: &Run) -> String {
    let text = &run.text;
    let emphasized = match (run.bold, run.italic) {
        (true, true) => format!("***{}***", text),
        (true, false) => format!("**{}**", text),
        (false, true) => format!("*{}*", text),
        (false, false) => text.clone(),
    };

    if run.is_monospace() {
        format!("`{}`", emphasized)
    } else {
        emphasized
    }
}
