//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;

/// Characters escaped inside a path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'%')
    .add(b'/');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "blog/hello/") // -> "/blog/hello/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "blog/hello/") // -> "https://example.com/blog/hello/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Percent-encode a single path segment (slugs are already filename-safe,
/// so this is a no-op for well-formed indexes)
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Site-relative URL of a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(config, &format!("blog/{}/", encode_segment(slug)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com".to_string(),
            root: "/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "css/style.css"), "/css/style.css");
        assert_eq!(url_for(&config, ""), "/");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "blog/hello/"),
            "https://example.com/blog/hello/"
        );
    }

    #[test]
    fn test_post_url_encodes_segment() {
        let config = test_config();
        assert_eq!(post_url(&config, "hello-world"), "/blog/hello-world/");
        assert_eq!(post_url(&config, "a b"), "/blog/a%20b/");
    }
}
