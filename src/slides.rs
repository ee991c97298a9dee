// ABOUTME: Slide pipeline for the markdeck application
// ABOUTME: Splits the document, parses raw slides, and transforms them into finished records

use crate::errors::{DeckError, Result};
use crate::meta::{MetaBlock, extract_meta};
use comrak::{ComrakOptions, markdown_to_html};
use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// A line consisting of exactly this string separates slides.
pub const SLIDE_SEPARATOR: &str = "---";

/// A slide before transformation: extracted metadata block plus the raw
/// markdown body borrowed from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSlide<'a> {
    pub meta: MetaBlock,
    pub body: &'a str,
}

/// Prev/next links to adjacent slides, by their `url` values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Navigation {
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// A finished slide: parsed metadata, rendered HTML body, and navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    pub meta: Mapping,
    pub url: String,
    pub content: String,
    pub navigation: Navigation,
}

/// Split the document into slide segments on standalone `---` lines.
///
/// Segments are contiguous subslices of the input, in document order.
/// Empty segments (leading or trailing separator) are passed through
/// unfiltered; they fail later at metadata extraction, which is the
/// intended error surface for malformed documents.
pub fn split_slides(source: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut seg_start = 0;
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let stripped = line.strip_suffix('\n').unwrap_or(line);
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        if stripped == SLIDE_SEPARATOR {
            segments.push(&source[seg_start..offset]);
            seg_start = offset + line.len();
        }
        offset += line.len();
    }

    segments.push(&source[seg_start..]);
    segments
}

/// Parse one raw segment: extract the metadata block, then slice the body
/// at the block's span. Pure, no I/O.
pub fn parse_slide(segment: &str) -> Result<RawSlide<'_>> {
    let meta = extract_meta(segment)?;
    let body = &segment[meta.span..];
    Ok(RawSlide { meta, body })
}

/// Transform a raw slide into a finished record.
///
/// Metadata parse failures and a missing `url` key are fatal; markdown
/// rendering is best-effort and never fails. Navigation is filled in
/// later by the normalizer.
pub fn transform_slide(raw: &RawSlide) -> Result<Slide> {
    let meta = parse_meta_mapping(&raw.meta.text)?;
    let url = match meta.get("url").and_then(Value::as_str) {
        Some(url) => url.to_string(),
        None => return Err(DeckError::MissingUrlError(raw.meta.text.trim().to_string())),
    };

    Ok(Slide {
        meta,
        url,
        content: render_markdown(raw.body),
        navigation: Navigation::default(),
    })
}

/// Run parse + transform over every segment, preserving document order.
pub fn process_slides(source: &str) -> Result<Vec<Slide>> {
    split_slides(source)
        .into_iter()
        .map(|segment| parse_slide(segment).and_then(|raw| transform_slide(&raw)))
        .collect()
}

/// Parse metadata block text as a YAML mapping.
/// Empty or whitespace-only text yields an empty mapping.
fn parse_meta_mapping(text: &str) -> Result<Mapping> {
    match serde_yaml::from_str::<Value>(text)? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(DeckError::ValidationError(format!(
            "Slide metadata must be a key/value mapping, got: {:?}",
            other
        ))),
    }
}

/// Render a markdown body to an HTML fragment with fixed options.
/// Raw HTML is allowed so slides can embed markup directly.
pub fn render_markdown(body: &str) -> String {
    let mut options = ComrakOptions::default();
    options.render.unsafe_ = true;
    markdown_to_html(body, &options)
}
