// ABOUTME: Library module for the markdeck program.
// ABOUTME: Contains the slide parsing pipeline and the build collaborators.

// Reexport modules
pub mod config;
pub mod errors;
pub mod meta;
pub mod navigation;
pub mod output;
pub mod presentation;
pub mod render;
pub mod slides;
pub mod utils;

// Reexport common types and functions
pub use config::Config;
pub use errors::{DeckError, Result};
pub use meta::{MetaBlock, extract_meta};
pub use navigation::normalize_slides;
pub use output::build;
pub use presentation::{Presentation, Templates, assemble_slides, load_presentation};
pub use render::PageRenderer;
pub use slides::{
    Navigation, RawSlide, Slide, parse_slide, process_slides, render_markdown, split_slides,
    transform_slide,
};

#[cfg(test)]
mod tests;
