//! Mock analytics card: donut chart, legend, metric cards, progress timeline.
//!
//! Pure function of one [`DashboardDataset`]; the carousel decides which
//! dataset is shown.

use super::{ICON_TRENDING_UP, Icon, MetricIcon};
use crate::chart::{ChartData, ChartSegment, DonutGeometry, donut_slices};
use crate::types::{DashboardDataset, Metric, TimelineEntry};
use leptos::prelude::*;

/// The full dashboard card for one dataset.
#[component]
pub fn DashboardView(data: DashboardDataset) -> impl IntoView {
    let chart = ChartData::derive(&data);

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h3 class="dashboard-title">{data.title}</h3>
                <span class="dashboard-period">"Last 30 days"</span>
            </div>

            <div class="dashboard-panel dashboard-chart">
                <DonutChart chart=chart.clone() />
                <Legend chart=chart />
            </div>

            <div class="metric-grid">
                {data.metrics.into_iter().map(|metric| view! { <MetricCard metric=metric /> }).collect::<Vec<_>>()}
            </div>

            <Timeline entries=data.timeline />
        </div>
    }
}

/// Donut slices with the total in the middle.
#[component]
pub fn DonutChart(chart: ChartData) -> impl IntoView {
    let geometry = DonutGeometry::default();
    let size = format!("0 0 {} {}", geometry.cx * 2.0, geometry.cy * 2.0);
    let slices = donut_slices(&chart.segments, &geometry);

    view! {
        <div class="donut">
            <svg viewBox=size class="donut-svg" xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                {slices.into_iter().map(|slice| view! {
                    <path d=slice.path fill=slice.color></path>
                }).collect::<Vec<_>>()}
            </svg>
            <div class="donut-center">
                <span class="donut-total">{chart.total.to_string()}</span>
                <span class="donut-caption">"Total"</span>
            </div>
        </div>
    }
}

/// Two-column legend, filled row by row.
#[component]
fn Legend(chart: ChartData) -> impl IntoView {
    let rows: Vec<Vec<ChartSegment>> = chart.legend_rows().map(<[ChartSegment]>::to_vec).collect();

    view! {
        <div class="legend">
            {rows.into_iter().map(|row| view! {
                <div class="legend-row">
                    {row.into_iter().map(|segment| view! {
                        <div class="legend-item">
                            <span class="legend-swatch" style=format!("background-color: {}", segment.color)></span>
                            <div class="legend-text">
                                <span class="legend-name">{segment.name}</span>
                                <span class="legend-value">{format!("{}%", segment.value)}</span>
                            </div>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn MetricCard(metric: Metric) -> impl IntoView {
    // unknown keys leave the slot empty
    let glyph = MetricIcon::from_key(&metric.icon).map(|icon| view! { <Icon path=icon.path() size="16" /> });

    view! {
        <div class="metric-card">
            <div class="metric-top">
                <div class="metric-icon">{glyph}</div>
                <div class="metric-change">
                    <Icon path=ICON_TRENDING_UP size="12" />
                    <span>{format_change(metric.change)}</span>
                </div>
            </div>
            <div class="metric-body">
                <span class="metric-label">{metric.label}</span>
                <span class="metric-value">{metric.value}</span>
            </div>
        </div>
    }
}

#[component]
fn Timeline(entries: Vec<TimelineEntry>) -> impl IntoView {
    view! {
        <div class="dashboard-panel timeline">
            <h4 class="timeline-title">"Progress Timeline"</h4>
            {entries.into_iter().map(|entry| {
                let width = format!("width: {}%", entry.bar_width());
                view! {
                    <div class="timeline-row">
                        <span class="timeline-period">{entry.period}</span>
                        <div class="timeline-track">
                            <div class="timeline-fill" style=width></div>
                        </div>
                        <span class="timeline-value">{format!("{}%", entry.progress)}</span>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Signed percentage for the metric badge: `+18%`, `-3.5%`.
fn format_change(change: f64) -> String {
    if change < 0.0 {
        format!("{change}%")
    } else {
        format!("+{change}%")
    }
}
