//! Long-form copy blocks aimed at search engines: "Why Choose" with
//! highlights and service cards, a rich-text company overview, and the
//! closing CTA banner.

use super::{ICON_ARROW_RIGHT, ICON_CHECK_CIRCLE, Icon};
use crate::content::{HIGHLIGHTS, SCHEDULE_CALL_URL, SERVICE_CARDS};
use leptos::prelude::*;

#[component]
pub fn SeoContentSection() -> impl IntoView {
    view! {
        <WhyChoose />
        <CompanyOverview />
        <CtaBanner />
    }
}

#[component]
fn WhyChoose() -> impl IntoView {
    view! {
        <section class="why-choose" id="services">
            <div class="container why-grid">
                <div class="why-copy">
                    <span class="section-pill">"Why Choose Arriva Soft"</span>
                    <h2 class="section-title">"Your Trusted Software Development Agency Since 2001"</h2>
                    <p class="section-lead">
                        <strong>"Arriva Soft"</strong>" is a premier "<strong>"software development company"</strong>
                        " and "<strong>"software builder firm"</strong>" with over 23 years of experience delivering "
                        "cutting-edge solutions. We specialize in "<strong>"custom software development"</strong>", "
                        <strong>"web application development"</strong>", "<strong>"mobile app development"</strong>
                        ", and innovative "<strong>"AI agent products"</strong>"."
                    </p>
                    <p class="section-lead">
                        "As a leading "<strong>"software development agency"</strong>", we've successfully delivered "
                        "200+ projects for clients across Fintech, Healthcare, E-commerce, and Enterprise sectors worldwide."
                    </p>

                    <div class="highlight-grid">
                        {HIGHLIGHTS.iter().map(|item| view! {
                            <div class="highlight">
                                <Icon path=ICON_CHECK_CIRCLE size="24" class="highlight-icon" />
                                <div>
                                    <p class="highlight-title">{item.title}</p>
                                    <p class="highlight-detail">{item.detail}</p>
                                </div>
                            </div>
                        }).collect::<Vec<_>>()}
                    </div>

                    <a href="/about" class="text-link">
                        "Learn more about Arriva Soft"
                        <Icon path=ICON_ARROW_RIGHT size="16" />
                    </a>
                </div>

                <div class="service-grid">
                    {SERVICE_CARDS.iter().map(|card| view! {
                        <div class="service-card">
                            <Icon path=card.icon size="40" class=card.tone />
                            <h3 class="service-card-title">{card.title}</h3>
                            <p class="service-card-body">{card.body}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CompanyOverview() -> impl IntoView {
    view! {
        <section class="overview">
            <div class="container container-narrow">
                <h2 class="section-title centered">
                    "Leading Software Development Company & AI Solutions Provider"
                </h2>
                <div class="prose">
                    <p>
                        <strong>"Arriva Soft"</strong>" is a globally recognized "<strong>"software development agency"</strong>
                        " headquartered in Bangladesh with offices across 6 countries. Since our founding in 2001, we have "
                        "been at the forefront of "<strong>"custom software development"</strong>", helping businesses "
                        "transform their digital presence through innovative technology solutions."
                    </p>
                    <p>
                        "Our expertise spans across "<strong>"web application development"</strong>", "
                        <strong>"mobile app development"</strong>", "<strong>"enterprise software solutions"</strong>
                        ", and cutting-edge "<strong>"AI agent products"</strong>". Whether you need a responsive web "
                        "application, a native mobile app for iOS and Android, or intelligent AI-powered automation, our "
                        "team of 850+ expert developers delivers solutions that drive real business results."
                    </p>
                    <p>
                        "As a trusted "<strong>"software builder firm"</strong>", we specialize in building scalable "
                        "solutions for industries including "<strong>"Fintech"</strong>", "<strong>"Healthcare"</strong>
                        ", "<strong>"E-commerce"</strong>", "<strong>"EdTech"</strong>", and "<strong>"Enterprise"</strong>
                        ". Our ISO 27001 certification ensures that every project meets the highest standards of "
                        "security and quality."
                    </p>
                    <p>
                        "Looking for a reliable "<strong>"software development company"</strong>" to bring your vision "
                        "to life? Whether it's "<strong>"web development"</strong>", "<strong>"app development"</strong>
                        ", or "<strong>"AI development"</strong>", Arriva Soft is your trusted partner for digital "
                        "transformation. Contact us today for a free consultation and discover how our "
                        <strong>"software development services"</strong>" can accelerate your business growth."
                    </p>
                </div>
                <div class="centered">
                    <a href="/contact" class="btn btn-solid">
                        "Start Your Project Today"
                        <Icon path=ICON_ARROW_RIGHT />
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CtaBanner() -> impl IntoView {
    view! {
        <section class="cta-banner">
            <div class="container container-mid centered">
                <h2 class="cta-title">"Ready to Build Your Next Software Project?"</h2>
                <p class="cta-lead">
                    "Partner with Arriva Soft, a leading "<strong>"software development agency"</strong>
                    " trusted by 100+ companies worldwide for "<strong>"web development"</strong>", "
                    <strong>"app development"</strong>", and "<strong>"AI solutions"</strong>"."
                </p>
                <div class="cta-actions">
                    <a href="/contact" class="btn btn-inverse">
                        "Get a Free Quote"
                        <Icon path=ICON_ARROW_RIGHT />
                    </a>
                    <a href=SCHEDULE_CALL_URL target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                        "Schedule a Call"
                    </a>
                </div>
            </div>
        </section>
    }
}
