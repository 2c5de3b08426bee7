//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Delete the export output
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Site;

    #[test]
    fn test_clean_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();

        fs::create_dir_all(site.public_dir.join("blog")).unwrap();
        run(&site).unwrap();
        assert!(!site.public_dir.exists());

        // A second run is a no-op
        run(&site).unwrap();
    }
}
