// ABOUTME: Build output module for the markdeck application
// ABOUTME: Prepares the output directory, copies assets, and writes rendered slides

use crate::config::Config;
use crate::errors::{DeckError, Result};
use crate::presentation::Presentation;
use crate::render::PageRenderer;
use crate::utils::{
    copy_dir_contents, ensure_directory_exists, ensure_parent_directory_exists,
    validate_directory_writable,
};
use log::info;
use std::fs;
use std::path::PathBuf;

/// Build the whole deck: prepare the output directory, copy static and
/// vendor assets into it, then render and write one HTML file per slide.
/// Returns the written slide paths in deck order. Any failure aborts the
/// build; the output directory may be left partially populated.
pub fn build(presentation: &Presentation, config: &Config) -> Result<Vec<PathBuf>> {
    init_output_dir(config)?;
    copy_assets(config)?;
    write_slides(presentation, config)
}

/// Ensure the output directory exists, empty it, and verify writability.
fn init_output_dir(config: &Config) -> Result<()> {
    info!("Preparing output directory {:?}", config.output_dir);

    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir).map_err(DeckError::FileReadError)?;
    }
    ensure_directory_exists(&config.output_dir)?;
    validate_directory_writable(&config.output_dir)
}

/// Copy the static resources directory, and the vendor directory when
/// configured, into the output directory. A configured but missing
/// directory is a fatal error.
fn copy_assets(config: &Config) -> Result<()> {
    info!("Copying resources from {:?}", config.resources_dir);
    copy_dir_contents(&config.resources_dir, &config.output_dir)?;

    if let Some(vendor_dir) = &config.vendor_dir {
        info!("Copying vendor assets from {:?}", vendor_dir);
        copy_dir_contents(vendor_dir, &config.output_dir)?;
    }
    Ok(())
}

/// Render each slide through the page template and write it to
/// `output_dir/<url>`, creating parent directories for nested urls.
fn write_slides(presentation: &Presentation, config: &Config) -> Result<Vec<PathBuf>> {
    let renderer = PageRenderer::new(&presentation.templates.page)?;
    let mut written = Vec::with_capacity(presentation.slides.len());

    for slide in &presentation.slides {
        let html = renderer.render(presentation, slide)?;
        let target = config.output_dir.join(&slide.url);
        ensure_parent_directory_exists(&target)?;
        fs::write(&target, html).map_err(DeckError::FileReadError)?;
        info!("Wrote slide {:?}", target);
        written.push(target);
    }

    Ok(written)
}
