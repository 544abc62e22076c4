use super::Icon;
use leptos::prelude::*;

/// Headline number with a caption, e.g. "200+ Projects Delivered".
#[component]
pub fn StatBox(
    value: &'static str,
    label: &'static str,
    #[prop(default = None)] icon: Option<&'static str>,
    /// CSS animation delay for the fade-in
    #[prop(default = "0s")]
    delay: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-box" style=format!("animation-delay: {}", delay)>
            {icon.map(|path| view! {
                <div class="stat-box-icon">
                    <Icon path=path />
                </div>
            })}
            <h3 class="stat-box-value">{value}</h3>
            <p class="stat-box-label">{label}</p>
        </div>
    }
}
