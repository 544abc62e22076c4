use crate::content::EventBanner;
use leptos::prelude::*;

/// Announcement strip. Renders nothing unless the banner is active and has a message.
#[component]
pub fn EventBannerBar(banner: EventBanner) -> impl IntoView {
    if !banner.is_active || banner.message.trim().is_empty() {
        return view! { "" }.into_any();
    }

    let cta = banner.cta.unwrap_or_else(|| "Learn more".to_string());
    view! {
        <div class="event-banner" role="region" aria-label="Announcement">
            <span class="event-banner-message">{banner.message}</span>
            {banner.href.map(|href| view! {
                <a href=href class="event-banner-link">{cta}</a>
            })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(banner: EventBanner) -> String {
        view! { <EventBannerBar banner=banner /> }.to_html()
    }

    #[test]
    fn inactive_banner_renders_nothing() {
        let html = render(EventBanner {
            is_active: false,
            message: "Hidden".into(),
            ..Default::default()
        });
        assert!(!html.contains("event-banner"));
        assert!(!html.contains("Hidden"));
    }

    #[test]
    fn active_banner_without_message_renders_nothing() {
        let html = render(EventBanner {
            is_active: true,
            message: "   ".into(),
            ..Default::default()
        });
        assert!(!html.contains("event-banner"));
    }

    #[test]
    fn active_banner_shows_message_and_default_cta() {
        let html = render(EventBanner {
            is_active: true,
            message: "Join our AI summit".into(),
            href: Some("/events/ai".into()),
            cta: None,
        });
        assert!(html.contains("Join our AI summit"));
        assert!(html.contains("href=\"/events/ai\""));
        assert!(html.contains("Learn more"));
    }
}
