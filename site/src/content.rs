//! Static marketing copy: navigation links, hero stats, highlights, service
//! cards, and the optional event banner.

use crate::components::{
    ICON_AWARD, ICON_BRIEFCASE, ICON_CODE, ICON_CPU, ICON_GLOBE, ICON_SMARTPHONE, ICON_USERS,
};
use serde::{Deserialize, Serialize};

/// External booking link used by the "Schedule a Call" buttons.
pub const SCHEDULE_CALL_URL: &str = "https://calendly.com/meeting-brainstation-23/30min";

/// Entry in a navigation dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubLink {
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub icon: Option<&'static str>,
}

/// Services dropdown in the header.
pub const SERVICE_LINKS: &[SubLink] = &[
    SubLink {
        label: "Web Development",
        href: "/services/web-development",
        description: "Responsive web apps with React, Next.js and Rust backends",
        icon: Some(ICON_CODE),
    },
    SubLink {
        label: "App Development",
        href: "/services/app-development",
        description: "Native iOS, Android and cross-platform mobile apps",
        icon: Some(ICON_SMARTPHONE),
    },
    SubLink {
        label: "Software Development",
        href: "/services/software-development",
        description: "Enterprise-grade custom software for your business",
        icon: Some(ICON_GLOBE),
    },
    SubLink {
        label: "AI Agent Products",
        href: "/services/ai-agents",
        description: "Intelligent agents and automation for modern teams",
        icon: Some(ICON_CPU),
    },
];

/// Top-level header links besides the services dropdown.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Industries", "/industries"),
    ("Case Studies", "/case-studies"),
    ("About", "/about"),
];

/// Headline figure in the hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatItem {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    /// CSS animation delay
    pub delay: &'static str,
}

pub const HERO_STATS: &[StatItem] = &[
    StatItem {
        value: "23+",
        label: "Years of Experience",
        icon: Some(ICON_AWARD),
        delay: "0s",
    },
    StatItem {
        value: "200+",
        label: "Projects Delivered",
        icon: Some(ICON_BRIEFCASE),
        delay: "0.1s",
    },
    StatItem {
        value: "850+",
        label: "Expert Developers",
        icon: Some(ICON_USERS),
        delay: "0.2s",
    },
    StatItem {
        value: "98%",
        label: "Client Satisfaction",
        icon: None,
        delay: "0.3s",
    },
];

/// Check-marked proof point in the "Why Choose" block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub detail: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "ISO 27001 Certified",
        detail: "Enterprise-grade security",
    },
    Highlight {
        title: "850+ Developers",
        detail: "Expert tech professionals",
    },
    Highlight {
        title: "98% Client Satisfaction",
        detail: "Proven track record",
    },
    Highlight {
        title: "6 Global Offices",
        detail: "Worldwide presence",
    },
];

/// Service card in the "Why Choose" block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    /// Accent class for the icon color
    pub tone: &'static str,
}

pub const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: ICON_CODE,
        title: "Web Development",
        body: "Custom web applications built with React, Next.js, and modern technologies.",
        tone: "tone-blue",
    },
    ServiceCard {
        icon: ICON_SMARTPHONE,
        title: "App Development",
        body: "Native iOS, Android, and cross-platform mobile applications.",
        tone: "tone-green",
    },
    ServiceCard {
        icon: ICON_GLOBE,
        title: "Software Development",
        body: "Enterprise-grade custom software solutions for your business.",
        tone: "tone-purple",
    },
    ServiceCard {
        icon: ICON_CPU,
        title: "AI Agent Products",
        body: "Intelligent AI agents and automation solutions for modern businesses.",
        tone: "tone-orange",
    },
];

/// Announcement strip above the header. Configured in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventBanner {
    /// Nothing renders unless set
    pub is_active: bool,
    pub message: String,
    /// Optional call-to-action link
    pub href: Option<String>,
    /// Link text, defaults to "Learn more"
    pub cta: Option<String>,
}
