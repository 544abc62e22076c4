//! Configuration file support for the site.
//!
//! Loads optional `site.toml`: a `[site]` table overriding the head metadata
//! and a `[banner]` table for the event banner.

use crate::content::EventBanner;
use crate::error::{Result, SiteError};
use crate::seo::SiteMeta;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "site.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteMeta,
    pub banner: EventBanner,
}

impl SiteConfig {
    /// Load `site.toml` from the given directory.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    /// A missing file yields the defaults; an unreadable or invalid one is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        let config: Self = toml::from_str(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "loaded site config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.site, SiteMeta::default());
        assert!(!config.banner.is_active);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file = std::fs::File::create(temp.path().join(CONFIG_FILE)).expect("create config");
        writeln!(
            file,
            r#"
[site]
title = "Arriva Soft - Staging"
site_url = "https://staging.arrivasoft.com"

[site.organization]
email = "hello@arrivasoft.com"
same_as = ["https://github.com/arrivasoft"]

[banner]
is_active = true
message = "Meet us at Web Summit, Lisbon"
href = "/events/web-summit"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path()).expect("valid config");
        assert_eq!(config.site.title, "Arriva Soft - Staging");
        assert_eq!(config.site.canonical_url(), "https://staging.arrivasoft.com/");
        // untouched fields keep their defaults
        assert_eq!(config.site.description, SiteMeta::default().description);
        assert_eq!(config.site.organization.name, "Arriva Soft");
        assert_eq!(config.site.organization.email.as_deref(), Some("hello@arrivasoft.com"));
        assert!(config.banner.is_active);
        assert_eq!(config.banner.href.as_deref(), Some("/events/web-summit"));
        assert_eq!(config.banner.cta, None);
    }

    #[test]
    fn test_load_invalid_config_names_path() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[site\ntitle = ").expect("write config");

        let err = SiteConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, SiteError::Config { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }
}
