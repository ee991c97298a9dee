// ABOUTME: Presentation assembly for the markdeck application
// ABOUTME: Loads inputs and composes the full slide pipeline in order

use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::navigation::normalize_slides;
use crate::slides::{Slide, process_slides};
use crate::utils::validate_file_exists;
use log::info;
use serde::Serialize;
use std::fs;

/// Template sources for a presentation. Currently a single page template
/// applied to every slide.
#[derive(Debug, Clone, Serialize)]
pub struct Templates {
    pub page: String,
}

/// The top-level aggregate: source document, templates, and the finished
/// slide collection. Constructed once per build, enriched by `assemble`,
/// then handed read-only to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Presentation {
    pub source: String,
    pub templates: Templates,
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create a presentation from loaded input text, with no slides yet.
    pub fn new(source: String, page_template: String) -> Self {
        Self {
            source,
            templates: Templates {
                page: page_template,
            },
            slides: Vec::new(),
        }
    }

    /// Run the full parsing pipeline over the source document.
    pub fn assemble(&mut self) -> Result<()> {
        self.slides = assemble_slides(&self.source)?;
        info!("Assembled {} slides", self.slides.len());
        Ok(())
    }
}

/// Split, parse, and transform the whole document, then link navigation.
/// Pure function of the source text; performs no transformation logic of
/// its own beyond sequencing the stages.
pub fn assemble_slides(source: &str) -> Result<Vec<Slide>> {
    let slides = process_slides(source)?;
    normalize_slides(&slides)
}

/// Read the source document and page template from disk.
pub fn load_presentation(config: &Config) -> Result<Presentation> {
    info!("Loading presentation from {:?}", config.source);

    validate_file_exists(&config.source)?;
    validate_file_exists(&config.template)?;

    let source = fs::read_to_string(&config.source).map_err(DeckError::FileReadError)?;
    let page_template = fs::read_to_string(&config.template).map_err(DeckError::FileReadError)?;

    Ok(Presentation::new(source, page_template))
}
