//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Site;

/// Create a post file following the naming convention. The JSON index is
/// maintained by hand, so this only writes the markdown file.
pub fn run(site: &Site, title: &str) -> Result<()> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title produces an empty slug: {:?}", title);
    }

    let filename = format!("{}{}.md", site.config.post_file_prefix, slug);
    let file_path = site.posts_dir.join(&filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&site.posts_dir)?;

    let now = chrono::Local::now();
    let content = format!(
        "---\ntitle: \"{}\"\ndate: {}\n---\n\n",
        title,
        now.format("%Y-%m-%d")
    );

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);
    println!(
        "Add a matching entry (slug: {}) to {}",
        slug, site.config.index_file
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::loader::ContentLoader;

    #[test]
    fn test_new_post_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        run(&site, "My First Post").unwrap();

        let loader = ContentLoader::new(&site);
        let post = loader.load_post("my-first-post").unwrap();
        assert_eq!(post.text("title"), Some("My First Post"));
        assert_eq!(post.list("tags"), Vec::<String>::new());
    }

    #[test]
    fn test_new_post_refuses_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        run(&site, "Twice").unwrap();
        assert!(run(&site, "Twice").is_err());
    }
}
