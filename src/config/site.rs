//! Site configuration (_config.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::mail::RelayConfig;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub description: String,
    pub email: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub posts_dir: String,
    pub assets_dir: String,
    pub public_dir: String,

    /// JSON post index, relative to the base directory
    pub index_file: String,

    /// Date prefix of post filenames: `<posts_dir>/<prefix><slug>.md`
    pub post_file_prefix: String,

    /// Asset filenames copied verbatim into the export when present
    pub copy_assets: Vec<String>,

    /// Number of posts shown on the homepage
    pub home_posts: usize,

    // Content
    pub hero: HeroConfig,
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub skills: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub social: SocialConfig,

    // Contact relay
    #[serde(default)]
    pub contact: RelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Portfolio".to_string(),
            author: "John Doe".to_string(),
            tagline: "Programmer".to_string(),
            description: String::new(),
            email: String::new(),
            language: "en".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            posts_dir: "_posts".to_string(),
            assets_dir: "assets".to_string(),
            public_dir: "_site".to_string(),

            index_file: "assets/posts.json".to_string(),
            post_file_prefix: "2025-08-19-".to_string(),

            copy_assets: vec![
                "profile-image.jpg".to_string(),
                "resume.pdf".to_string(),
                "robots.txt".to_string(),
            ],

            home_posts: 3,

            hero: HeroConfig::default(),
            about: Vec::new(),
            skills: IndexMap::new(),
            projects: Vec::new(),
            social: SocialConfig::default(),

            contact: RelayConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Hero section copy
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub subtitle: String,
    pub description: String,
    /// Resume file linked from the hero, served from the assets directory
    pub resume: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            subtitle: String::new(),
            description: String::new(),
            resume: "resume.pdf".to_string(),
        }
    }
}

/// A project card on the homepage
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub title: String,
    pub description: String,
    /// Font Awesome icon class, e.g. `fas fa-chart-line`
    pub icon: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub repo: String,
}

/// Social profile links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
}
