//! Rotating dashboard carousel for the hero.
//!
//! Auto-advances every [`ROTATE_EVERY`](crate::rotation::ROTATE_EVERY);
//! the dots jump straight to a dataset. The interval starts in an effect,
//! so static rendering shows the first dataset and never touches a timer,
//! and the guard is dropped on cleanup, so an unmounted carousel stops
//! ticking.

use super::DashboardView;
use crate::data::dashboards;
use crate::rotation::{AutoRotate, BrowserInterval, Rotation, Scheduler};
use crate::types::DashboardDataset;
use leptos::prelude::*;

#[component]
pub fn DashboardCarousel(
    /// Datasets to rotate through; defaults to the built-in table
    #[prop(optional)]
    datasets: Option<Vec<DashboardDataset>>,
) -> impl IntoView {
    let datasets = datasets.unwrap_or_else(|| dashboards().to_vec());
    let Some(initial) = Rotation::over(&datasets) else {
        tracing::warn!("dashboard carousel mounted without datasets");
        return view! { <div class="carousel carousel-empty"></div> }.into_any();
    };

    let count = initial.len();
    let rotation = RwSignal::new(initial);
    let datasets = StoredValue::new(datasets);

    Effect::new(move || rotate_while_mounted(&BrowserInterval, rotation));

    let active = move || rotation.with(Rotation::active);

    view! {
        <div class="carousel">
            <div class="carousel-stage">
                {move || {
                    let index = active();
                    datasets
                        .with_value(|all| all.get(index).cloned())
                        .map(|data| view! { <DashboardView data=data /> })
                }}
            </div>

            <div class="carousel-dots">
                {(0..count).map(|index| view! {
                    <button
                        type="button"
                        class=move || if active() == index { "carousel-dot active" } else { "carousel-dot" }
                        aria-label=format!("Go to dashboard {}", index + 1)
                        on:click=move |_| rotation.update(|r| r.select(index))
                    ></button>
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
    .into_any()
}

/// Start auto-advancing `rotation` and tie the timer to the current owner:
/// when the owner is cleaned up the guard drops and the timer is cancelled.
fn rotate_while_mounted<S>(scheduler: &S, rotation: RwSignal<Rotation>)
where
    S: Scheduler,
    S::Handle: Send + Sync + 'static,
{
    let guard = AutoRotate::start(scheduler, move || rotation.update(Rotation::tick));
    on_cleanup(move || drop(guard));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotation::ROTATE_EVERY;
    use crate::rotation::manual::ManualClock;
    use leptos::tachys::view::RenderHtml;
    use std::num::NonZeroUsize;

    #[test]
    fn timer_advances_while_owner_is_alive() {
        let clock = ManualClock::default();
        let rotation = RwSignal::new(Rotation::new(NonZeroUsize::new(4).unwrap()));
        let owner = Owner::new();
        owner.with(|| rotate_while_mounted(&clock, rotation));

        clock.advance(ROTATE_EVERY);
        assert_eq!(rotation.get_untracked().active(), 1);
        clock.advance(ROTATE_EVERY * 2);
        assert_eq!(rotation.get_untracked().active(), 3);
        assert_eq!(clock.live(), 1);
    }

    #[test]
    fn unmount_cancels_timer() {
        let clock = ManualClock::default();
        let rotation = RwSignal::new(Rotation::new(NonZeroUsize::new(4).unwrap()));
        let owner = Owner::new();
        owner.with(|| rotate_while_mounted(&clock, rotation));

        clock.advance(ROTATE_EVERY);
        assert_eq!(rotation.get_untracked().active(), 1);

        owner.cleanup();
        assert_eq!(clock.live(), 0);
        clock.advance(ROTATE_EVERY * 5);
        assert_eq!(rotation.get_untracked().active(), 1);
    }

    #[test]
    fn static_render_shows_first_dataset_and_one_dot_per_dataset() {
        let html = view! { <DashboardCarousel /> }.to_html();
        let all = dashboards();

        assert!(html.contains(&all[0].title));
        for other in &all[1..] {
            assert!(!html.contains(&other.title));
        }
        assert_eq!(html.matches("aria-label=\"Go to dashboard").count(), all.len());
        assert_eq!(html.matches("carousel-dot active").count(), 1);
    }

    #[test]
    fn custom_datasets_are_used() {
        let datasets = vec![
            DashboardDataset::builder("Alpha").total("total", 1.0).build(),
            DashboardDataset::builder("Beta").total("total", 2.0).build(),
        ];
        let html = view! { <DashboardCarousel datasets=datasets /> }.to_html();

        assert!(html.contains("Alpha"));
        assert!(!html.contains("Beta"));
        assert!(html.contains("Go to dashboard 2"));
        assert!(!html.contains("Go to dashboard 3"));
    }

    #[test]
    fn empty_dataset_list_renders_placeholder() {
        let html = view! { <DashboardCarousel datasets=Vec::new() /> }.to_html();
        assert!(html.contains("carousel-empty"));
        assert!(!html.contains("carousel-dot"));
    }
}
