//! Page generation
//!
//! One renderer behind both delivery modes: the server calls the
//! `render_*` functions per request, the static export writes the same
//! output to disk as an `index.html` tree plus feed, sitemap and assets.

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate, Utc};
use std::fs;
use tera::Context;

use crate::content::loader::ContentLoader;
use crate::content::{markdown, PostSummary};
use crate::helpers::{full_url_for, html_escape, post_url, strip_html, truncate};
use crate::templates::{PostView, SummaryView, TemplateRenderer, APP_JS, STYLE_CSS};
use crate::Site;

/// Number of entries in the Atom feed
const FEED_LIMIT: usize = 20;

pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Context variables every page shares
    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.site.config);
        context.insert("root", &self.site.config.root);
        context.insert("current_year", &Local::now().year().to_string());
        context
    }

    fn summary_views(&self, summaries: &[PostSummary]) -> Vec<SummaryView> {
        summaries
            .iter()
            .map(|s| SummaryView {
                slug: s.slug.clone(),
                title: s.title.clone(),
                description: s.description.clone(),
                date: s.pretty_date.clone(),
                category: s.category.clone(),
                url: post_url(&self.site.config, &s.slug),
            })
            .collect()
    }

    /// Homepage: hero, about, projects, latest posts, contact
    pub fn render_home(&self) -> Result<String> {
        let loader = ContentLoader::new(&self.site);
        let summaries = loader.load_summaries();
        let count = summaries.len().min(self.site.config.home_posts);
        let latest = self.summary_views(&summaries[..count]);

        let mut context = self.base_context();
        context.insert("posts", &latest);
        self.renderer.render("home.html", &context)
    }

    /// Blog index with every post card
    pub fn render_blog_index(&self) -> Result<String> {
        let loader = ContentLoader::new(&self.site);
        let posts = self.summary_views(&loader.load_summaries());

        let mut context = self.base_context();
        context.insert("posts", &posts);
        self.renderer.render("blog.html", &context)
    }

    /// A single post page, or `None` when the slug has no readable file
    pub fn render_post(&self, slug: &str) -> Result<Option<String>> {
        let loader = ContentLoader::new(&self.site);
        let Some(parsed) = loader.load_post(slug) else {
            return Ok(None);
        };

        let view = PostView {
            title: parsed.text("title").unwrap_or("Blog Post").to_string(),
            date: parsed.text("date").unwrap_or_default().to_string(),
            tags: parsed.list("tags"),
            content: markdown::render(&parsed.body),
        };

        // Meta description: the index entry when there is one, otherwise
        // the first stretch of the rendered body
        let description = loader
            .load_summaries()
            .into_iter()
            .find(|s| s.slug == slug)
            .map(|s| s.description)
            .unwrap_or_else(|| truncate(strip_html(&view.content).trim(), 150, None));

        let mut context = self.base_context();
        context.insert("post", &view);
        context.insert("description", &html_escape(&description));
        self.renderer.render("post.html", &context).map(Some)
    }

    /// The not-found page shown for unknown slugs (served with 200)
    pub fn render_not_found(&self) -> Result<String> {
        let context = self.base_context();
        self.renderer.render("not_found.html", &context)
    }

    /// The fragment swapped into the contact form after a submission
    pub fn render_contact_result(&self, ok: bool, detail: &str) -> Result<String> {
        let mut context = self.base_context();
        context.insert("ok", &ok);
        context.insert("detail", &html_escape(detail));
        self.renderer.render("contact_result.html", &context)
    }

    /// Generate the entire site into the public directory
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.site.public_dir)?;

        let loader = ContentLoader::new(&self.site);
        let summaries = loader.load_summaries();

        self.write_output("index.html", &self.render_home()?)?;
        self.write_output("blog/index.html", &self.render_blog_index()?)?;

        for summary in &summaries {
            match self.render_post(&summary.slug)? {
                Some(html) => {
                    self.write_output(&format!("blog/{}/index.html", summary.slug), &html)?;
                }
                None => {
                    tracing::warn!("Skipping '{}': post file missing or unreadable", summary.slug);
                }
            }
        }

        self.write_output("css/style.css", STYLE_CSS)?;
        self.write_output("js/app.js", APP_JS)?;

        self.copy_assets()?;
        self.generate_feed(&summaries)?;
        self.generate_sitemap(&summaries)?;

        tracing::info!("Generated {} post pages", summaries.len());
        Ok(())
    }

    fn write_output(&self, relative: &str, contents: &str) -> Result<()> {
        let output_path = self.site.public_dir.join(relative);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, contents)?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy the configured asset allow-list; absent files are skipped
    fn copy_assets(&self) -> Result<()> {
        let dest_dir = self.site.public_dir.join("assets");

        for name in &self.site.config.copy_assets {
            let src = self.site.assets_dir.join(name);
            if src.exists() {
                fs::create_dir_all(&dest_dir)?;
                fs::copy(&src, dest_dir.join(name))?;
                tracing::debug!("Copied asset: {}", name);
            }
        }

        Ok(())
    }

    /// Generate the Atom feed from the post index
    fn generate_feed(&self, summaries: &[PostSummary]) -> Result<()> {
        let config = &self.site.config;

        let mut feed = String::new();
        feed.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        feed.push_str("<feed xmlns=\"http://www.w3.org/2005/Atom\">\n");
        feed.push_str(&format!("  <title>{}</title>\n", escape_xml(&config.title)));
        feed.push_str(&format!(
            "  <link href=\"{}\" rel=\"self\"/>\n",
            full_url_for(config, "feed.xml")
        ));
        feed.push_str(&format!("  <link href=\"{}\"/>\n", full_url_for(config, "")));
        feed.push_str(&format!(
            "  <updated>{}</updated>\n",
            Utc::now().to_rfc3339()
        ));
        feed.push_str(&format!("  <id>{}</id>\n", full_url_for(config, "")));
        feed.push_str(&format!(
            "  <author><name>{}</name></author>\n",
            escape_xml(&config.author)
        ));

        for summary in summaries.iter().take(FEED_LIMIT) {
            let url = full_url_for(config, &format!("blog/{}/", summary.slug));
            feed.push_str("  <entry>\n");
            feed.push_str(&format!(
                "    <title>{}</title>\n",
                escape_xml(&summary.title)
            ));
            feed.push_str(&format!("    <link href=\"{}\"/>\n", url));
            feed.push_str(&format!("    <id>{}</id>\n", url));
            feed.push_str(&format!(
                "    <updated>{}</updated>\n",
                entry_updated(summary)
            ));
            feed.push_str(&format!(
                "    <summary>{}</summary>\n",
                escape_xml(&summary.description)
            ));
            feed.push_str("  </entry>\n");
        }

        feed.push_str("</feed>\n");

        self.write_output("feed.xml", &feed)?;
        tracing::info!("Generated feed.xml");
        Ok(())
    }

    /// Generate sitemap.xml over the exported route tree
    fn generate_sitemap(&self, summaries: &[PostSummary]) -> Result<()> {
        let config = &self.site.config;

        let mut sitemap = String::new();
        sitemap.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
        sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

        let mut push_url = |loc: String| {
            sitemap.push_str(&format!("  <url><loc>{}</loc></url>\n", escape_xml(&loc)));
        };

        push_url(full_url_for(config, ""));
        push_url(full_url_for(config, "blog/"));
        for summary in summaries {
            push_url(full_url_for(config, &format!("blog/{}/", summary.slug)));
        }

        sitemap.push_str("</urlset>\n");

        self.write_output("sitemap.xml", &sitemap)?;
        tracing::info!("Generated sitemap.xml");
        Ok(())
    }
}

/// Feed timestamp for an index entry. The display date parses in the
/// common "Aug 19, 2025" shape; anything else falls back to build time.
fn entry_updated(summary: &PostSummary) -> String {
    NaiveDate::parse_from_str(&summary.pretty_date, "%b %d, %Y")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| format!("{}Z", dt.format("%Y-%m-%dT%H:%M:%S")))
        .unwrap_or_else(|| Utc::now().to_rfc3339())
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_fixture(dir: &Path) {
        fs::create_dir_all(dir.join("assets")).unwrap();
        fs::create_dir_all(dir.join("_posts")).unwrap();
        fs::write(
            dir.join("_config.yml"),
            "title: Test Portfolio\nauthor: Test Author\nurl: https://example.com\n",
        )
        .unwrap();
        fs::write(
            dir.join("assets/posts.json"),
            r#"[{"slug": "hello", "title": "Hello World", "description": "The first post.", "prettyDate": "Aug 19, 2025", "category": "Notes"}]"#,
        )
        .unwrap();
        fs::write(
            dir.join("_posts/2025-08-19-hello.md"),
            "---\ntitle: \"Hello World\"\ndate: 2025-08-19\ntags: [intro, notes]\n---\n# Welcome\n\nFirst `post` body.",
        )
        .unwrap();
    }

    fn generator_in(dir: &Path) -> Generator {
        let site = Site::new(dir).unwrap();
        Generator::new(&site).unwrap()
    }

    #[test]
    fn test_render_home() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let html = generator_in(dir.path()).render_home().unwrap();
        assert!(html.contains("Test Author"));
        assert!(html.contains("Hello World"));
        assert!(html.contains("/blog/hello/"));
        assert!(html.contains("id=\"contact-form\""));
    }

    #[test]
    fn test_render_blog_index() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let html = generator_in(dir.path()).render_blog_index().unwrap();
        assert!(html.contains("Blog Posts"));
        assert!(html.contains("Aug 19, 2025"));
        assert!(html.contains("Notes"));
    }

    #[test]
    fn test_render_post() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let html = generator_in(dir.path()).render_post("hello").unwrap().unwrap();
        assert!(html.contains("<h1>Welcome</h1>"));
        assert!(html.contains("<code>post</code>"));
        assert!(html.contains("2025-08-19"));
        assert!(html.contains("intro"));
        // Meta description comes from the index entry
        assert!(html.contains("The first post."));
    }

    #[test]
    fn test_render_post_unknown_slug() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        assert!(generator_in(dir.path()).render_post("missing").unwrap().is_none());
    }

    #[test]
    fn test_render_not_found() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let html = generator_in(dir.path()).render_not_found().unwrap();
        assert!(html.contains("Post Not Found"));
    }

    #[test]
    fn test_contact_result_escapes_detail() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let html = generator_in(dir.path())
            .render_contact_result(false, "<script>bad</script>")
            .unwrap();
        assert!(html.contains("&lt;script&gt;bad&lt;/script&gt;"));
        assert!(!html.contains("<script>bad"));
    }

    #[test]
    fn test_generate_writes_route_tree() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        // One allow-listed asset present, one absent
        fs::write(dir.path().join("assets/robots.txt"), "User-agent: *\n").unwrap();

        generator_in(dir.path()).generate().unwrap();

        let public = dir.path().join("_site");
        assert!(public.join("index.html").exists());
        assert!(public.join("blog/index.html").exists());
        assert!(public.join("blog/hello/index.html").exists());
        assert!(public.join("css/style.css").exists());
        assert!(public.join("js/app.js").exists());
        assert!(public.join("feed.xml").exists());
        assert!(public.join("sitemap.xml").exists());
        assert!(public.join("assets/robots.txt").exists());
        assert!(!public.join("assets/profile-image.jpg").exists());
    }

    #[test]
    fn test_generate_skips_index_entry_without_file() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::write(
            dir.path().join("assets/posts.json"),
            r#"[{"slug": "ghost", "title": "Ghost", "description": "d", "prettyDate": "Aug 19, 2025"}]"#,
        )
        .unwrap();

        generator_in(dir.path()).generate().unwrap();
        assert!(!dir.path().join("_site/blog/ghost").exists());
    }

    #[test]
    fn test_feed_contains_entry() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        generator_in(dir.path()).generate().unwrap();
        let feed = fs::read_to_string(dir.path().join("_site/feed.xml")).unwrap();
        assert!(feed.contains("<title>Hello World</title>"));
        assert!(feed.contains("https://example.com/blog/hello/"));
        assert!(feed.contains("<updated>2025-08-19T00:00:00Z</updated>"));
    }

    #[test]
    fn test_entry_updated_fallback() {
        let summary = PostSummary {
            slug: "x".to_string(),
            title: "X".to_string(),
            description: String::new(),
            pretty_date: "someday".to_string(),
            category: None,
        };
        // Unparseable display dates still produce a timestamp
        assert!(entry_updated(&summary).contains('T'));
    }
}
