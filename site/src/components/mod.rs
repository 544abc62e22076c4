//! Leptos UI components for the landing page.
//!
//! Each component is a `#[component]` function; they compose into the
//! page through [`LandingPage`] and, for the static export,
//! [`SiteDocument`].
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (head metadata, CSS, JSON-LD)
//! └── LandingPage
//!     ├── EventBannerBar
//!     ├── SiteHeader
//!     │   ├── ArrivaLogo
//!     │   ├── DropdownItem (services menu)
//!     │   └── PrimaryButton
//!     ├── Hero
//!     │   ├── PrimaryButton
//!     │   ├── StatBox
//!     │   └── DashboardCarousel
//!     │       └── DashboardView
//!     │           ├── DonutChart
//!     │           ├── Legend
//!     │           ├── MetricCard
//!     │           └── Timeline
//!     ├── SeoContentSection
//!     └── Footer
//! ```

mod button;
mod carousel;
mod dashboard;
mod document;
mod dropdown_item;
mod event_banner;
mod footer;
mod header;
mod hero;
mod icons;
mod logo;
mod seo_content;
mod stat_box;

pub use button::PrimaryButton;
pub use carousel::DashboardCarousel;
pub use dashboard::{DashboardView, DonutChart};
pub use document::{LandingPage, SiteDocument};
pub use dropdown_item::DropdownItem;
pub use event_banner::EventBannerBar;
pub use footer::Footer;
pub use header::SiteHeader;
pub use hero::Hero;
pub use icons::*;
pub use logo::{ArrivaLogo, LogoVariant};
pub use seo_content::SeoContentSection;
pub use stat_box::StatBox;
