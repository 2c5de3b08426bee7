//! Content loader - reads the post index and individual posts
//!
//! Both loaders degrade instead of failing: a broken or missing index is an
//! empty list, a broken or missing post is `None`. Pages render per request
//! from whatever is on disk right now; nothing is cached.

use std::fs;
use std::path::PathBuf;

use super::{ParsedPost, PostSummary};
use crate::Site;

/// Loads content for page rendering and export
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load the post index. Never fails: any read or parse problem yields
    /// an empty list, logged as a warning.
    pub fn load_summaries(&self) -> Vec<PostSummary> {
        let path = self.site.index_path();

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Could not read post index {:?}: {}", path, e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(summaries) => summaries,
            Err(e) => {
                tracing::warn!("Malformed post index {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// File path a slug resolves to under the naming convention
    pub fn post_path(&self, slug: &str) -> PathBuf {
        self.site
            .posts_dir
            .join(format!("{}{}.md", self.site.config.post_file_prefix, slug))
    }

    /// Load and parse a post by slug. `None` for missing or unreadable
    /// files; callers render that as a not-found page.
    pub fn load_post(&self, slug: &str) -> Option<ParsedPost> {
        let path = self.post_path(slug);

        match fs::read_to_string(&path) {
            Ok(raw) => Some(ParsedPost::parse(&raw)),
            Err(e) => {
                tracing::warn!("Could not read post {:?}: {}", path, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_in(dir: &std::path::Path) -> Site {
        Site::new(dir).unwrap()
    }

    #[test]
    fn test_load_summaries_counts_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(
            dir.path().join("assets/posts.json"),
            r#"[
                {"slug": "a", "title": "A", "description": "d", "prettyDate": "Aug 19, 2025"},
                {"slug": "b", "title": "B", "description": "d", "prettyDate": "Aug 20, 2025", "category": "AI"}
            ]"#,
        )
        .unwrap();

        let site = site_in(dir.path());
        let loader = ContentLoader::new(&site);
        let summaries = loader.load_summaries();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[1].category.as_deref(), Some("AI"));
    }

    #[test]
    fn test_missing_index_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());
        assert!(ContentLoader::new(&site).load_summaries().is_empty());
    }

    #[test]
    fn test_malformed_index_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("assets/posts.json"), "{not json").unwrap();

        let site = site_in(dir.path());
        assert!(ContentLoader::new(&site).load_summaries().is_empty());
    }

    #[test]
    fn test_load_post_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("_posts")).unwrap();
        fs::write(
            dir.path().join("_posts/2025-08-19-hello.md"),
            "---\ntitle: \"Hello\"\ntags: [rust, web]\n---\nFirst post.",
        )
        .unwrap();

        let site = site_in(dir.path());
        let post = ContentLoader::new(&site).load_post("hello").unwrap();
        assert_eq!(post.text("title"), Some("Hello"));
        assert_eq!(post.list("tags"), vec!["rust", "web"]);
        assert_eq!(post.body, "First post.");
    }

    #[test]
    fn test_unknown_slug_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let site = site_in(dir.path());
        assert!(ContentLoader::new(&site).load_post("nope").is_none());
    }
}
