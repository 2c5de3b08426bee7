//! List site content

use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::content::loader::ContentLoader;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = ContentLoader::new(site);

    match content_type {
        "post" | "posts" => {
            let summaries = loader.load_summaries();
            println!("Posts ({}):", summaries.len());
            for summary in summaries {
                println!(
                    "  {} - {} [{}]",
                    summary.pretty_date, summary.title, summary.slug
                );
            }
        }
        "orphan" | "orphans" => {
            let summaries = loader.load_summaries();
            let indexed: HashSet<PathBuf> = summaries
                .iter()
                .map(|s| loader.post_path(&s.slug))
                .collect();

            let on_disk = markdown_files(&site.posts_dir);

            let unindexed: Vec<_> = on_disk.difference(&indexed).collect();
            println!("Post files without an index entry ({}):", unindexed.len());
            for path in unindexed {
                println!("  {}", path.display());
            }

            let missing: Vec<_> = summaries
                .iter()
                .filter(|s| !on_disk.contains(&loader.post_path(&s.slug)))
                .collect();
            println!("Index entries without a post file ({}):", missing.len());
            for summary in missing {
                println!("  {}", summary.slug);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: posts, orphans",
                content_type
            );
        }
    }

    Ok(())
}

fn markdown_files(dir: &Path) -> HashSet<PathBuf> {
    let mut files = HashSet::new();

    if !dir.exists() {
        return files;
    }

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && is_markdown_file(path) {
            files.insert(path.to_path_buf());
        }
    }

    files
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_markdown_files_filters_extensions() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.md"), "x").unwrap();
        fs::write(dir.path().join("b.markdown"), "x").unwrap();
        fs::write(dir.path().join("c.txt"), "x").unwrap();

        let files = markdown_files(dir.path());
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_run_accepts_known_types() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        assert!(run(&site, "posts").is_ok());
        assert!(run(&site, "orphans").is_ok());
        assert!(run(&site, "tags").is_err());
    }
}
