// ABOUTME: Page rendering module for the markdeck application
// ABOUTME: Applies the page template to each slide with minijinja

use crate::errors::{DeckError, Result};
use crate::presentation::Presentation;
use crate::slides::Slide;
use minijinja::{Environment, context};

/// Renders slides through the presentation's page template.
///
/// The template is compiled once; rendering is then a pure function of
/// (slide, presentation). Slide content is an already-rendered HTML
/// fragment, so no autoescaping is applied.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new(template: &str) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template_owned("page".to_string(), template.to_string())
            .map_err(DeckError::TemplateError)?;
        Ok(Self { env })
    }

    /// Render one slide to a full HTML page. The template context exposes
    /// both the slide and the whole presentation.
    pub fn render(&self, presentation: &Presentation, slide: &Slide) -> Result<String> {
        let template = self.env.get_template("page")?;
        let html = template.render(context! {
            slide => slide,
            presentation => presentation,
        })?;
        Ok(html)
    }
}
