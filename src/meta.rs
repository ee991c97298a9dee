// ABOUTME: Metadata extraction for the markdeck application
// ABOUTME: Scans the delimited metadata block at the start of a slide segment

use crate::errors::{DeckError, Result};

/// Opening marker of a slide metadata block.
pub const META_OPEN: &str = "<!-- meta";

/// Closing marker of a slide metadata block.
pub const META_CLOSE: &str = "-->";

/// The metadata block found at the start of a slide segment.
///
/// `span` is the byte length of the whole delimited region (markers plus
/// content), so the slide body starts at `segment[span..]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetaBlock {
    pub text: String,
    pub span: usize,
}

/// Extract the metadata block from the start of a slide segment.
///
/// The opening marker must sit at offset 0. Scans forward for the closing
/// marker; an absent opening marker and an unterminated block are distinct
/// fatal errors. Empty content between the markers is valid.
pub fn extract_meta(segment: &str) -> Result<MetaBlock> {
    let Some(rest) = segment.strip_prefix(META_OPEN) else {
        return Err(DeckError::MetaMissingError(snippet(segment)));
    };

    let Some(end) = rest.find(META_CLOSE) else {
        return Err(DeckError::MetaUnterminatedError(snippet(segment)));
    };

    Ok(MetaBlock {
        text: rest[..end].to_string(),
        span: META_OPEN.len() + end + META_CLOSE.len(),
    })
}

/// Short excerpt of a segment for error messages.
fn snippet(segment: &str) -> String {
    const MAX: usize = 60;
    let line = segment.lines().next().unwrap_or("");
    if line.len() > MAX {
        let mut cut = MAX;
        while !line.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &line[..cut])
    } else {
        line.to_string()
    }
}
