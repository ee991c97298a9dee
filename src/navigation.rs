// ABOUTME: Navigation normalization for the markdeck application
// ABOUTME: Links adjacent slides by url and enforces url uniqueness

use crate::errors::{DeckError, Result};
use crate::slides::{Navigation, Slide};
use log::info;
use std::collections::HashSet;

/// Compute prev/next links for every slide from its position in the deck.
///
/// Returns a new sequence of new records; the input records are not
/// mutated. The first slide has no `prev`, the last has no `next`, and a
/// single-slide deck has neither. Fails before linking if two slides share
/// a `url`, since urls double as output filenames and a collision would
/// silently overwrite a file.
pub fn normalize_slides(slides: &[Slide]) -> Result<Vec<Slide>> {
    validate_unique_urls(slides)?;
    info!("Linking navigation across {} slides", slides.len());

    let last = slides.len().saturating_sub(1);
    Ok(slides
        .iter()
        .enumerate()
        .map(|(index, slide)| {
            let navigation = Navigation {
                prev: (index > 0).then(|| slides[index - 1].url.clone()),
                next: (index < last).then(|| slides[index + 1].url.clone()),
            };
            Slide {
                navigation,
                ..slide.clone()
            }
        })
        .collect())
}

fn validate_unique_urls(slides: &[Slide]) -> Result<()> {
    let mut seen = HashSet::new();
    for slide in slides {
        if !seen.insert(slide.url.as_str()) {
            return Err(DeckError::DuplicateUrlError(slide.url.clone()));
        }
    }
    Ok(())
}
