//! # arriva-site
//!
//! Leptos components and content for the Arriva Soft landing page.
//!
//! The same component tree serves two builds:
//!
//! - **Static export** (`ssr`, the default) renders the page to a single
//!   HTML document with inlined CSS and JSON-LD. See [`render_site`] and
//!   [`export::write_export`].
//! - **Browser build** (`csr`) mounts [`components::LandingPage`] into the
//!   body; the dashboard carousel rotates on a timer there.
//!
//! ## Quick Start
//!
//! ```rust
//! use arriva_site::{render_site, SiteConfig};
//!
//! let html = render_site(&SiteConfig::default()).unwrap();
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - dashboard datasets and the keyed builder
//! - [`data`] - the four built-in demo dashboards
//! - [`chart`] - chart derivation, legend rows and donut geometry
//! - [`rotation`] - carousel index and auto-rotate timer ownership
//! - [`components`] - Leptos UI components
//! - [`content`] - static navigation, stats and marketing copy
//! - [`seo`] - site metadata, JSON-LD, robots.txt and sitemap.xml
//! - [`config`] - `site.toml` loading
//! - [`styles`] - CSS constants

#![doc(html_root_url = "https://docs.rs/arriva-site/0.3.2")]
// Nested view! trees (carousel, document) exceed the default type depth.
#![recursion_limit = "512"]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chart;
pub mod components;
pub mod config;
pub mod content;
pub mod data;
pub mod error;
#[cfg(feature = "ssr")]
pub mod export;
pub mod rotation;
pub mod seo;
pub mod styles;
pub mod types;

pub use chart::{ChartData, ChartSegment};
pub use config::SiteConfig;
pub use data::dashboards;
pub use error::{Result, SiteError};
pub use rotation::Rotation;
pub use seo::SiteMeta;
pub use types::{DashboardDataset, DatasetBuilder, Metric, TimelineEntry};

#[cfg(feature = "ssr")]
use components::SiteDocument;
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page as a static HTML document.
///
/// The carousel is rendered at its first dashboard; nothing is hydrated.
///
/// # Errors
///
/// Fails only if the JSON-LD payload cannot be serialized.
///
/// # Example
///
/// ```rust
/// use arriva_site::{render_site, SiteConfig};
///
/// let mut config = SiteConfig::default();
/// config.site.title = "Arriva Soft".into();
///
/// let html = render_site(&config).unwrap();
/// assert!(html.contains("<title>Arriva Soft</title>"));
/// ```
#[cfg(feature = "ssr")]
pub fn render_site(config: &SiteConfig) -> Result<String> {
    let json_ld = seo::json_ld_script_body(&config.site)?;
    let config = config.clone();

    let owner = Owner::new();
    let html = owner.with(move || {
        view! { <SiteDocument config=config json_ld=json_ld /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    Ok(format!("<!DOCTYPE html>\n{}", html))
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::EventBanner;

    #[test]
    fn renders_full_document() {
        let html = render_site(&SiteConfig::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"en\""));
        assert!(html.contains("<title>"));
        assert!(html.contains("name=\"description\""));
        assert!(html.contains("rel=\"canonical\" href=\"https://arrivasoft.com/\""));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("Why Choose Arriva Soft"));
    }

    #[test]
    fn open_graph_tags_are_emitted() {
        let mut config = SiteConfig::default();
        config.site.og_image = Some("https://arrivasoft.com/og.png".into());
        let html = render_site(&config).unwrap();

        assert!(html.contains("property=\"og:title\""));
        assert!(html.contains("property=\"og:description\""));
        assert!(html.contains("property=\"og:url\" content=\"https://arrivasoft.com/\""));
        assert!(html.contains("property=\"og:site_name\""));
        assert!(html.contains("property=\"og:type\" content=\"website\""));
        assert!(html.contains("content=\"https://arrivasoft.com/og.png\""));
    }

    #[test]
    fn og_image_is_optional() {
        let mut config = SiteConfig::default();
        config.site.og_image = None;
        let html = render_site(&config).unwrap();
        assert!(!html.contains("og:image"));
    }

    #[test]
    fn first_dashboard_is_rendered() {
        let html = render_site(&SiteConfig::default()).unwrap();
        let first = &dashboards()[0];

        assert!(html.contains(&first.title));
        assert!(html.contains("Go to dashboard 4"));
    }

    #[test]
    fn json_ld_stays_inside_its_script() {
        let mut config = SiteConfig::default();
        config.site.description = "</script><b>x</b>".into();
        let html = render_site(&config).unwrap();

        let start = html.find("application/ld+json").unwrap();
        let script = &html[start..];
        let end = script.find("</script>").unwrap();
        assert!(script[..end].contains("\\u003c/script\\u003e"));
    }

    #[test]
    fn banner_follows_config() {
        let html = render_site(&SiteConfig::default()).unwrap();
        assert!(!html.contains("class=\"event-banner\""));

        let config = SiteConfig {
            banner: EventBanner {
                is_active: true,
                message: "Meet us at Web Summit".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let html = render_site(&config).unwrap();
        assert!(html.contains("Meet us at Web Summit"));
    }
}
