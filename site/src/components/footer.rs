use super::{ArrivaLogo, LogoVariant};
use crate::content::{NAV_LINKS, SERVICE_LINKS};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <ArrivaLogo variant=LogoVariant::Light class="footer-logo" />
                    <p class="footer-tagline">
                        "Custom software, web, mobile and AI products for teams worldwide."
                    </p>
                </div>
                <div class="footer-column">
                    <h4 class="footer-heading">"Services"</h4>
                    {SERVICE_LINKS.iter().map(|link| view! {
                        <a href=link.href class="footer-link">{link.label}</a>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="footer-column">
                    <h4 class="footer-heading">"Company"</h4>
                    {NAV_LINKS.iter().map(|(label, href)| view! {
                        <a href=*href class="footer-link">{*label}</a>
                    }).collect::<Vec<_>>()}
                    <a href="/contact" class="footer-link">"Contact"</a>
                </div>
            </div>
            <p class="footer-copyright">"© 2001-2025 Arriva Soft. All rights reserved."</p>
        </footer>
    }
}
