use super::{DashboardCarousel, ICON_ARROW_RIGHT, Icon, PrimaryButton, StatBox};
use crate::content::{HERO_STATS, SCHEDULE_CALL_URL};
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-grid">
                <div class="hero-content">
                    <span class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Software Development Agency Since 2001"
                    </span>
                    <h1 class="hero-title">
                        "Custom Software Solutions That "
                        <span class="hero-title-accent">"Transform Your Business"</span>
                    </h1>
                    <p class="hero-description">
                        "Expert software development across Fintech, Healthcare, E-commerce, and Enterprise industries. "
                        "From web and mobile apps to AI agents, we build products that ship."
                    </p>
                    <div class="hero-actions">
                        <PrimaryButton href=SCHEDULE_CALL_URL>
                            "Book a Free Consultation"
                            <Icon path=ICON_ARROW_RIGHT class="btn-arrow" />
                        </PrimaryButton>
                        <a href="#services" class="btn btn-secondary">"Explore Services"</a>
                    </div>
                    <div class="stat-grid">
                        {HERO_STATS.iter().map(|stat| view! {
                            <StatBox value=stat.value label=stat.label icon=stat.icon delay=stat.delay />
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="hero-visual">
                    <DashboardCarousel />
                </div>
            </div>
        </section>
    }
}
