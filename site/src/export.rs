//! Static export: writes the rendered page plus crawler files to a directory.

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::seo::{robots_txt, sitemap_xml};
use std::fs;
use std::path::{Path, PathBuf};

/// Rendered landing page.
pub const INDEX_FILE: &str = "index.html";
/// Crawler directives.
pub const ROBOTS_FILE: &str = "robots.txt";
/// Single-entry sitemap.
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// Render the site and write `index.html`, `robots.txt` and `sitemap.xml`
/// into `out_dir`, creating it if needed. Existing files are overwritten.
///
/// Returns the written paths in that order.
pub fn write_export(out_dir: &Path, config: &SiteConfig) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|e| SiteError::io(out_dir, e))?;

    let html = crate::render_site(config)?;
    let files = [
        (INDEX_FILE, html),
        (ROBOTS_FILE, robots_txt(&config.site)),
        (SITEMAP_FILE, sitemap_xml(&config.site)),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, body) in files {
        let path = out_dir.join(name);
        fs::write(&path, body.as_bytes()).map_err(|e| SiteError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = body.len(), "wrote export file");
        written.push(path);
    }

    tracing::info!(dir = %out_dir.display(), files = written.len(), "static export complete");
    Ok(written)
}
