use leptos::prelude::*;

/// Call-to-action link that opens in a new tab.
#[component]
pub fn PrimaryButton(
    #[prop(into)] href: String,
    children: Children,
    #[prop(default = false)] small: bool,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let size = if small { "btn-primary-sm" } else { "btn-primary-lg" };
    let class = format!("btn btn-primary {size} {class}").trim_end().to_string();

    view! {
        <a href=href class=class target="_blank" rel="noopener noreferrer">
            <span class="btn-shine"></span>
            <span class="btn-label">{children()}</span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn opens_in_new_tab_safely() {
        let html = view! { <PrimaryButton href="/contact">"Contact"</PrimaryButton> }.to_html();
        assert!(html.contains("href=\"/contact\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("btn-primary-lg"));
        assert!(html.contains("Contact"));
    }

    #[test]
    fn small_variant_and_extra_class() {
        let html = view! {
            <PrimaryButton href="/x" small=true class="nav-cta">"Go"</PrimaryButton>
        }
        .to_html();
        assert!(html.contains("class=\"btn btn-primary btn-primary-sm nav-cta\""));
    }
}
