//! Inline SVG icons (24px stroke style).
//!
//! Each constant is the `d` attribute for one icon, drawn on a 24x24 grid
//! with round caps and joins. Multi-part icons are a single path with
//! several subpaths.

use leptos::prelude::*;

/// Renders an inline stroke icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CLOCK size="16" class="metric-glyph" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Icon vocabulary for dashboard metric cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricIcon {
    Dollar,
    Check,
    Clock,
    Heart,
    Calendar,
    Shopping,
    Trending,
    Users,
    Zap,
}

impl MetricIcon {
    /// Every icon, in vocabulary order.
    pub const ALL: [MetricIcon; 9] = [
        MetricIcon::Dollar,
        MetricIcon::Check,
        MetricIcon::Clock,
        MetricIcon::Heart,
        MetricIcon::Calendar,
        MetricIcon::Shopping,
        MetricIcon::Trending,
        MetricIcon::Users,
        MetricIcon::Zap,
    ];

    /// Resolve a data key. Unknown keys resolve to `None` and render as an
    /// empty slot.
    pub fn from_key(key: &str) -> Option<Self> {
        let icon = match key {
            "dollar" => Self::Dollar,
            "check" => Self::Check,
            "clock" => Self::Clock,
            "heart" => Self::Heart,
            "calendar" => Self::Calendar,
            "shopping" => Self::Shopping,
            "trending" => Self::Trending,
            "users" => Self::Users,
            "zap" => Self::Zap,
            other => {
                tracing::debug!(key = other, "unknown metric icon key, leaving slot blank");
                return None;
            }
        };
        Some(icon)
    }

    /// Data key for this icon.
    pub fn key(self) -> &'static str {
        match self {
            Self::Dollar => "dollar",
            Self::Check => "check",
            Self::Clock => "clock",
            Self::Heart => "heart",
            Self::Calendar => "calendar",
            Self::Shopping => "shopping",
            Self::Trending => "trending",
            Self::Users => "users",
            Self::Zap => "zap",
        }
    }

    /// Path data for the glyph.
    pub fn path(self) -> &'static str {
        match self {
            Self::Dollar => ICON_DOLLAR,
            Self::Check => ICON_CHECK_CIRCLE,
            Self::Clock => ICON_CLOCK,
            Self::Heart => ICON_HEART,
            Self::Calendar => ICON_CALENDAR,
            Self::Shopping => ICON_SHOPPING_CART,
            Self::Trending => ICON_TRENDING_UP,
            Self::Users => ICON_USERS,
            Self::Zap => ICON_ZAP,
        }
    }
}

pub const ICON_DOLLAR: &str = "M12 2v20M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6";

pub const ICON_CHECK_CIRCLE: &str = "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3";

pub const ICON_CLOCK: &str = "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0zM12 6v6l4 2";

pub const ICON_HEART: &str = "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7z";

pub const ICON_CALENDAR: &str = "M8 2v4M16 2v4M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM3 10h18";

pub const ICON_SHOPPING_CART: &str = "M9 21a1 1 0 1 1-2 0a1 1 0 1 1 2 0zM20 21a1 1 0 1 1-2 0a1 1 0 1 1 2 0zM2.05 2.05h2l2.66 12.42a2 2 0 0 0 2 1.58h9.78a2 2 0 0 0 1.95-1.57l1.65-7.43H5.12";

pub const ICON_TRENDING_UP: &str = "M22 7l-8.5 8.5-5-5L2 17M16 7h6v6";

pub const ICON_USERS: &str = "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2M13 7a4 4 0 1 1-8 0a4 4 0 1 1 8 0zM22 21v-2a4 4 0 0 0-3-3.87M16 3.13a4 4 0 0 1 0 7.75";

pub const ICON_ZAP: &str = "M13 2L3 14h9l-1 8 10-12h-9l1-8z";

// Marketing sections

pub const ICON_ARROW_RIGHT: &str = "M5 12h14M12 5l7 7-7 7";

pub const ICON_CODE: &str = "M16 18l6-6-6-6M8 6l-6 6 6 6";

pub const ICON_SMARTPHONE: &str = "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2zM12 18h.01";

pub const ICON_GLOBE: &str = "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";

/// Chip outline, used for the AI agents card
pub const ICON_CPU: &str = "M9 2v2M15 2v2M9 20v2M15 20v2M2 9h2M2 15h2M20 9h2M20 15h2M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM9 9h6v6H9z";

pub const ICON_AWARD: &str = "M18 8a6 6 0 1 1-12 0a6 6 0 1 1 12 0zM8.21 13.89L7 23l5-3 5 3-1.21-9.12";

pub const ICON_BRIEFCASE: &str = "M4 7h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2zM16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16";

pub const ICON_CHEVRON_DOWN: &str = "M6 9l6 6 6-6";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_round_trips() {
        for icon in MetricIcon::ALL {
            assert_eq!(MetricIcon::from_key(icon.key()), Some(icon));
            assert!(!icon.path().is_empty());
        }
    }

    #[test]
    fn unknown_keys_resolve_to_none() {
        assert_eq!(MetricIcon::from_key("rocket"), None);
        assert_eq!(MetricIcon::from_key(""), None);
        assert_eq!(MetricIcon::from_key("Dollar"), None);
    }
}
