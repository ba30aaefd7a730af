//! DOCX parsing module.

mod docx;
mod styles;

pub use docx::{parse_body, DocxReader};
pub use styles::StyleTable;

use quick_xml::events::BytesStart;

/// Extract an attribute value by key from an element.
#[inline]
fn get_attr(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == key)
        .map(|a| String::from_utf8_lossy(&a.value).into_owned())
}

/// Check if `w:val` explicitly switches a toggle property off.
#[inline]
fn check_val_off(e: &BytesStart<'_>) -> bool {
    matches!(
        get_attr(e, b"w:val").as_deref(),
        Some("0" | "false" | "off")
    )
}
