//! Arriva Soft wordmark as inline SVG.

use leptos::prelude::*;

/// Accent blue shared by the mark, "Soft" and the underline.
pub const LOGO_ACCENT: &str = "#60A5FA";

/// Which background the logo sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoVariant {
    /// White text, for dark backgrounds
    #[default]
    Light,
    /// Slate text, for light backgrounds
    Dark,
}

impl LogoVariant {
    /// Fill for the "Arriva" text.
    pub fn text_color(self) -> &'static str {
        match self {
            Self::Light => "#FFFFFF",
            Self::Dark => "#1E293B",
        }
    }
}

#[component]
pub fn ArrivaLogo(
    #[prop(default = "")] class: &'static str,
    #[prop(optional)] variant: LogoVariant,
) -> impl IntoView {
    let text_color = variant.text_color();

    view! {
        <svg
            viewBox="0 0 350 60"
            class=class
            xmlns="http://www.w3.org/2000/svg"
            role="img"
            aria-label="Arriva Soft"
        >
            // droplet with streams
            <g transform="translate(0, 10)">
                <rect x="0" y="8" width="2" height="4" fill=LOGO_ACCENT rx="0.5" />
                <rect x="0" y="16" width="2" height="10" fill=LOGO_ACCENT rx="0.5" />
                <rect x="0" y="30" width="2" height="10" fill=LOGO_ACCENT rx="0.5" />
                <path
                    d="M 4 10 Q 12 10, 12 18"
                    stroke=LOGO_ACCENT
                    stroke-width="2"
                    fill="none"
                    stroke-linecap="round"
                />
                <rect x="14" y="9" width="15" height="2" fill=LOGO_ACCENT rx="1" />
                <rect x="14" y="16" width="15" height="2" fill=LOGO_ACCENT rx="1" />
                <rect x="14" y="23" width="15" height="2" fill=LOGO_ACCENT rx="1" />
                <rect x="14" y="30" width="15" height="2" fill=LOGO_ACCENT rx="1" />
                <path
                    d="M 33 2 C 33 2, 37 10, 37 14 C 37 18, 35.5 20, 33 20 C 30.5 20, 29 18, 29 14 C 29 10, 33 2, 33 2 Z"
                    fill=LOGO_ACCENT
                />
            </g>

            <text
                x="50"
                y="40"
                font-family="Arial, sans-serif"
                font-size="32"
                font-weight="700"
                fill=text_color
            >
                "Arriva"
            </text>
            <text
                x="175"
                y="40"
                font-family="Arial, sans-serif"
                font-size="32"
                font-weight="300"
                fill=LOGO_ACCENT
            >
                "Soft"
            </text>

            // underline with arrow head
            <line x1="50" y1="47" x2="268" y2="47" stroke=LOGO_ACCENT stroke-width="1.5" />
            <polygon points="268,47 263,45 263,49" fill=LOGO_ACCENT />
        </svg>
    }
}
