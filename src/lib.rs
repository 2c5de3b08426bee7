//! folio-rs: a personal portfolio site in one binary
//!
//! The same content pipeline (post index, frontmatter, markdown) backs two
//! delivery modes: a live axum server that renders every page per request,
//! and a static exporter that writes the route tree to disk for hosting.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod mail;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main site handle: configuration plus resolved directories
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Directory holding the markdown posts
    pub posts_dir: std::path::PathBuf,
    /// Directory holding static assets and the post index
    pub assets_dir: std::path::PathBuf,
    /// Output directory for the static export
    pub public_dir: std::path::PathBuf,
}

impl Site {
    /// Create a new Site instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let assets_dir = base_dir.join(&config.assets_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            assets_dir,
            public_dir,
        })
    }

    /// Path of the JSON post index
    pub fn index_path(&self) -> std::path::PathBuf {
        self.base_dir.join(&self.config.index_file)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
