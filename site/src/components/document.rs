//! Root document component - the complete HTML page.
//!
//! [`SiteDocument`] is the static-export shell (head metadata, stylesheet,
//! JSON-LD). [`LandingPage`] is the body content, shared with the browser
//! build which mounts it directly.

use super::{EventBannerBar, Footer, Hero, SeoContentSection, SiteHeader};
use crate::config::SiteConfig;
use crate::content::EventBanner;
use crate::styles::SITE_CSS;
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;

/// The complete HTML document for the landing page.
#[component]
pub fn SiteDocument(
    config: SiteConfig,
    /// Pre-escaped JSON-LD payload, see [`crate::seo::json_ld_script_body`]
    json_ld: String,
) -> impl IntoView {
    let SiteConfig { site: meta, banner } = config;
    let canonical = meta.canonical_url();
    let keywords = meta.keywords_content();

    view! {
        <html lang=meta.locale.clone()>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{meta.title.clone()}</title>
                <meta name="description" content=meta.description.clone() />
                <meta name="keywords" content=keywords />
                <link rel="canonical" href=canonical.clone() />

                {og_tag("og:type", "website".to_string())}
                {og_tag("og:title", meta.title.clone())}
                {og_tag("og:description", meta.description.clone())}
                {og_tag("og:url", canonical)}
                {og_tag("og:site_name", meta.site_name.clone())}
                {meta.og_image.clone().map(|image| og_tag("og:image", image))}

                <meta name="twitter:card" content="summary_large_image" />
                <meta name="twitter:title" content=meta.title.clone() />
                <meta name="twitter:description" content=meta.description.clone() />

                <style>{SITE_CSS}</style>
                <script type="application/ld+json">{json_ld}</script>
            </head>
            <body>
                <LandingPage banner=banner />
            </body>
        </html>
    }
}

/// `<meta property=…>` is not a known attribute of `view!`, so Open Graph
/// tags go through the custom attribute builder.
fn og_tag(property: &'static str, content: String) -> impl IntoView {
    leptos::html::meta()
        .attr("property", property)
        .attr("content", content)
}

/// Everything inside `<body>`.
#[component]
pub fn LandingPage(#[prop(optional)] banner: EventBanner) -> impl IntoView {
    view! {
        <EventBannerBar banner=banner />
        <SiteHeader />
        <main>
            <Hero />
            <SeoContentSection />
        </main>
        <Footer />
    }
}
