// Arriva Soft landing page, browser build
// Mounts the same component tree the static export renders; the dashboard
// carousel rotates here.

#![recursion_limit = "512"]

use arriva_site::components::LandingPage;
use arriva_site::styles::SITE_CSS;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <style>{SITE_CSS}</style>
        <LandingPage />
    }
}
