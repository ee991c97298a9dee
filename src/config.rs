// ABOUTME: Configuration module for the markdeck application
// ABOUTME: Provides path settings and environment variable handling

use std::env;
use std::path::PathBuf;

/// Global configuration for a build invocation.
pub struct Config {
    pub source: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    pub resources_dir: PathBuf,
    pub vendor_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from("presentation.md"),
            template: PathBuf::from("templates/page.html"),
            output_dir: PathBuf::from("build"),
            resources_dir: PathBuf::from("resources"),
            vendor_dir: None,
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let source = env::var("DECK_SOURCE")
            .map(PathBuf::from)
            .unwrap_or(defaults.source);
        let template = env::var("DECK_TEMPLATE")
            .map(PathBuf::from)
            .unwrap_or(defaults.template);
        let output_dir = env::var("DECK_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let resources_dir = env::var("DECK_RESOURCES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.resources_dir);
        let vendor_dir = env::var("DECK_VENDOR_DIR").ok().map(PathBuf::from);

        Self {
            source,
            template,
            output_dir,
            resources_dir,
            vendor_dir,
        }
    }
}
