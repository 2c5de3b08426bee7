//! Built-in page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; the served and the
//! exported variant of every page go through the same renderer.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Stylesheet served at `css/style.css` and written into the export
pub const STYLE_CSS: &str = include_str!("folio/static/style.css");

/// Theme toggle / navigation script served at `js/app.js`
pub const APP_JS: &str = include_str!("folio/static/app.js");

/// Template renderer with the embedded page set
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all page templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Rendered markdown and config copy are trusted HTML; anything
        // user-supplied is escaped explicitly before it reaches a context.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("folio/layout.html")),
            ("home.html", include_str!("folio/home.html")),
            ("blog.html", include_str!("folio/blog.html")),
            ("post.html", include_str!("folio/post.html")),
            ("not_found.html", include_str!("folio/not_found.html")),
            (
                "contact_result.html",
                include_str!("folio/contact_result.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Data structures for template context

/// A post card on the homepage or the blog index
#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Pre-formatted display date from the index, shown verbatim
    pub date: String,
    pub category: Option<String>,
    pub url: String,
}

/// A fully rendered post page
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    /// Rendered HTML body
    pub content: String,
}
