use super::{ArrivaLogo, DropdownItem, ICON_CHEVRON_DOWN, Icon, LogoVariant, PrimaryButton};
use crate::content::{NAV_LINKS, SCHEDULE_CALL_URL, SERVICE_LINKS};
use leptos::prelude::*;

/// Sticky header: logo, services dropdown, plain links, contact button.
///
/// The dropdown opens on hover and keyboard focus through CSS only, so it
/// works in the static export without any script.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="/" class="header-brand" aria-label="Arriva Soft home">
                    <ArrivaLogo variant=LogoVariant::Dark class="header-logo" />
                </a>
                <nav class="header-nav">
                    <div class="nav-dropdown">
                        <button type="button" class="nav-link nav-dropdown-toggle" aria-haspopup="true">
                            "Services"
                            <Icon path=ICON_CHEVRON_DOWN size="16" />
                        </button>
                        <div class="nav-dropdown-menu">
                            {SERVICE_LINKS.iter().map(|link| view! { <DropdownItem link=*link /> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    {NAV_LINKS.iter().map(|(label, href)| view! {
                        <a href=*href class="nav-link">{*label}</a>
                    }).collect::<Vec<_>>()}
                </nav>
                <PrimaryButton href=SCHEDULE_CALL_URL small=true class="header-cta">
                    "Contact Us"
                </PrimaryButton>
            </div>
        </header>
    }
}
