//! Generate static files

use anyhow::Result;
use notify::{RecursiveMode, Watcher};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Site;

/// Generate the static site
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(site)?;
    generator.generate()?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}

/// Watch for file changes and regenerate
pub async fn watch(site: &Site) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| {
        if let Ok(event) = res {
            let _ = tx.send(event);
        }
    })?;

    // Watch the content sources: posts, assets (the index lives there)
    // and the config file
    if site.posts_dir.exists() {
        watcher.watch(&site.posts_dir, RecursiveMode::Recursive)?;
    }
    if site.assets_dir.exists() {
        watcher.watch(&site.assets_dir, RecursiveMode::Recursive)?;
    }
    let config_path = site.base_dir.join("_config.yml");
    if config_path.exists() {
        watcher.watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    // Debounce events
    let mut last_rebuild = std::time::Instant::now();

    loop {
        match rx.recv_timeout(Duration::from_millis(100)) {
            Ok(_event) => {
                // Only rebuild if more than 500ms since last rebuild
                if last_rebuild.elapsed() > Duration::from_millis(500) {
                    tracing::info!("File changed, regenerating...");
                    if let Err(e) = run(site) {
                        tracing::error!("Generation failed: {}", e);
                    }
                    last_rebuild = std::time::Instant::now();
                }
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                // Continue waiting
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}
