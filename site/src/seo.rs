//! Page metadata and schema.org structured data.
//!
//! [`SiteMeta`] feeds the document `<head>` (title, description, keywords,
//! canonical link, Open Graph/Twitter tags) and the JSON-LD `@graph`
//! describing the company and the website. The same metadata drives the
//! `robots.txt` and `sitemap.xml` written by the static export.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Head metadata for the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMeta {
    /// Document title
    pub title: String,
    /// Meta description, also used for Open Graph
    pub description: String,
    /// Meta keywords
    pub keywords: Vec<String>,
    /// Public origin, e.g. `https://arrivasoft.com`
    pub site_url: String,
    /// Brand name used in Open Graph and JSON-LD
    pub site_name: String,
    /// BCP 47 language tag for `<html lang>`
    pub locale: String,
    /// Absolute URL of the social preview image
    pub og_image: Option<String>,
    /// Company described by the structured data
    pub organization: Organization,
}

/// The company node of the JSON-LD graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub name: String,
    pub logo_url: Option<String>,
    /// ISO year or date; omitted from the graph when unset
    pub founding_date: Option<String>,
    /// ISO 3166-1 alpha-2 code of the headquarters; omitted when unset
    pub address_country: Option<String>,
    pub email: Option<String>,
    /// Social profiles
    pub same_as: Vec<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Arriva Soft - Digital Transformation Platform".into(),
            description: "Custom Software Solutions That Transform Your Business. Expert software \
                          development across Fintech, Healthcare, E-commerce, and Enterprise industries."
                .into(),
            keywords: [
                "software development",
                "custom software",
                "fintech",
                "healthcare tech",
                "e-commerce",
                "enterprise solutions",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            site_url: "https://arrivasoft.com".into(),
            site_name: "Arriva Soft".into(),
            locale: "en".into(),
            og_image: None,
            organization: Organization::default(),
        }
    }
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            name: "Arriva Soft".into(),
            logo_url: None,
            founding_date: None,
            address_country: None,
            email: None,
            same_as: Vec::new(),
        }
    }
}

impl SiteMeta {
    /// Canonical URL of the landing page, always with a trailing slash.
    pub fn canonical_url(&self) -> String {
        format!("{}/", self.site_url.trim_end_matches('/'))
    }

    /// Keywords joined for the `<meta name="keywords">` tag.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    fn organization_id(&self) -> String {
        format!("{}#organization", self.canonical_url())
    }

    fn website_id(&self) -> String {
        format!("{}#website", self.canonical_url())
    }
}

/// schema.org graph with an `Organization` and a `WebSite` node.
pub fn structured_data(meta: &SiteMeta) -> Value {
    let org = &meta.organization;
    let mut organization = json!({
        "@type": "Organization",
        "@id": meta.organization_id(),
        "name": org.name,
        "url": meta.canonical_url(),
    });
    if let Some(founded) = &org.founding_date {
        organization["foundingDate"] = json!(founded);
    }
    if let Some(country) = &org.address_country {
        organization["address"] = json!({
            "@type": "PostalAddress",
            "addressCountry": country,
        });
    }
    if let Some(logo) = &org.logo_url {
        organization["logo"] = json!(logo);
    }
    if let Some(email) = &org.email {
        organization["email"] = json!(email);
    }
    if !org.same_as.is_empty() {
        organization["sameAs"] = json!(org.same_as);
    }

    json!({
        "@context": "https://schema.org",
        "@graph": [
            organization,
            {
                "@type": "WebSite",
                "@id": meta.website_id(),
                "url": meta.canonical_url(),
                "name": meta.site_name,
                "description": meta.description,
                "inLanguage": meta.locale,
                "publisher": { "@id": meta.organization_id() },
            },
        ],
    })
}

/// Serialized JSON-LD, safe to place inside a `<script>` element.
///
/// `<`, `>` and `&` are written as `\u003c`, `\u003e` and `\u0026`; they
/// only occur inside JSON strings, where the escapes decode to the same
/// text.
pub fn json_ld_script_body(meta: &SiteMeta) -> Result<String> {
    let raw = serde_json::to_string(&structured_data(meta))?;
    Ok(escape_script_json(&raw))
}

fn escape_script_json(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(ch),
        }
    }
    out
}

/// `robots.txt` allowing every crawler and pointing at the sitemap.
pub fn robots_txt(meta: &SiteMeta) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}sitemap.xml\n",
        meta.canonical_url()
    )
}

/// Single-page `sitemap.xml`.
pub fn sitemap_xml(meta: &SiteMeta) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
         <url>\n    <loc>{}</loc>\n    <changefreq>monthly</changefreq>\n    \
         <priority>1.0</priority>\n  </url>\n</urlset>\n",
        xml_escape(&meta.canonical_url())
    )
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_follow_layout_metadata() {
        let meta = SiteMeta::default();
        assert_eq!(meta.title, "Arriva Soft - Digital Transformation Platform");
        assert_eq!(
            meta.keywords_content(),
            "software development, custom software, fintech, healthcare tech, e-commerce, enterprise solutions"
        );
        assert!(meta.description.starts_with("Custom Software Solutions"));
    }

    #[test]
    fn canonical_url_normalizes_trailing_slash() {
        let mut meta = SiteMeta::default();
        meta.site_url = "https://example.com///".into();
        assert_eq!(meta.canonical_url(), "https://example.com/");
        meta.site_url = "https://example.com".into();
        assert_eq!(meta.canonical_url(), "https://example.com/");
    }

    #[test]
    fn graph_has_organization_and_website() {
        let meta = SiteMeta::default();
        let data = structured_data(&meta);
        let graph = data["@graph"].as_array().unwrap();

        assert_eq!(data["@context"], "https://schema.org");
        assert_eq!(graph.len(), 2);
        assert_eq!(graph[0]["@type"], "Organization");
        assert!(graph[0].get("sameAs").is_none());
        assert_eq!(graph[1]["@type"], "WebSite");
        assert_eq!(graph[1]["publisher"]["@id"], graph[0]["@id"]);
    }

    #[test]
    fn unset_company_facts_are_not_published() {
        let data = structured_data(&SiteMeta::default());
        let org = &data["@graph"][0];

        assert!(org.get("foundingDate").is_none());
        assert!(org.get("address").is_none());
        assert!(org.get("logo").is_none());
        assert!(org.get("email").is_none());
    }

    #[test]
    fn configured_company_facts_are_published() {
        let mut meta = SiteMeta::default();
        meta.organization.founding_date = Some("2001".into());
        meta.organization.address_country = Some("BD".into());
        let data = structured_data(&meta);

        assert_eq!(data["@graph"][0]["foundingDate"], "2001");
        assert_eq!(data["@graph"][0]["address"]["@type"], "PostalAddress");
        assert_eq!(data["@graph"][0]["address"]["addressCountry"], "BD");
    }

    #[test]
    fn optional_organization_fields_are_emitted() {
        let mut meta = SiteMeta::default();
        meta.organization.email = Some("hello@arrivasoft.com".into());
        meta.organization.same_as = vec!["https://www.linkedin.com/company/arrivasoft".into()];
        let data = structured_data(&meta);

        assert_eq!(data["@graph"][0]["email"], "hello@arrivasoft.com");
        assert_eq!(data["@graph"][0]["sameAs"][0], "https://www.linkedin.com/company/arrivasoft");
    }

    #[test]
    fn script_body_cannot_close_the_script_element() {
        let mut meta = SiteMeta::default();
        meta.description = "</script><script>alert(1)</script> & more".into();
        let body = json_ld_script_body(&meta).unwrap();

        assert!(!body.contains("</script"));
        assert!(!body.contains('<'));
        assert!(body.contains("\\u003c/script\\u003e"));

        let decoded: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(decoded["@graph"][1]["description"], meta.description.as_str());
    }

    #[test]
    fn robots_points_at_sitemap() {
        let robots = robots_txt(&SiteMeta::default());
        assert!(robots.starts_with("User-agent: *\nAllow: /"));
        assert!(robots.contains("Sitemap: https://arrivasoft.com/sitemap.xml"));
    }

    #[test]
    fn sitemap_escapes_location() {
        let mut meta = SiteMeta::default();
        meta.site_url = "https://example.com/?a=1&b=2".into();
        let xml = sitemap_xml(&meta);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2/</loc>"));
        assert!(xml.starts_with("<?xml"));
    }
}
