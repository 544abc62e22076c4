//! Built-in demo dashboards for the hero carousel.
//!
//! All numbers are made up. The table is built once on first access and
//! never changes afterwards.

use crate::types::DashboardDataset;
use once_cell::sync::Lazy;

const BLUE: &str = "#3B82F6";
const TEAL: &str = "#14B8A6";
const AMBER: &str = "#F59E0B";
const ROSE: &str = "#F43F5E";
const VIOLET: &str = "#8B5CF6";

static DASHBOARDS: Lazy<Vec<DashboardDataset>> = Lazy::new(|| {
    vec![
        fintech_dashboard(),
        healthcare_dashboard(),
        ecommerce_dashboard(),
        enterprise_dashboard(),
    ]
});

/// Carousel datasets in display order.
pub fn dashboards() -> &'static [DashboardDataset] {
    &DASHBOARDS
}

fn fintech_dashboard() -> DashboardDataset {
    DashboardDataset::builder("Fintech Project Orders")
        .total("totalProjects", 128.0)
        .slice("completed", 45.0, BLUE)
        .slice("inProgress", 30.0, TEAL)
        .slice("underReview", 15.0, AMBER)
        .slice("onHold", 10.0, ROSE)
        .metric("Transactions Secured", "$2.4B", 18.0, "dollar")
        .metric("Compliance Audits", "36", 12.0, "check")
        .metric("Avg. Delivery", "11 wks", 9.0, "clock")
        .timeline("Q1", 68.0)
        .timeline("Q2", 82.0)
        .timeline("Q3", 91.0)
        .build()
}

fn healthcare_dashboard() -> DashboardDataset {
    DashboardDataset::builder("Healthcare Platforms")
        .total("totalDeployments", 86.0)
        .slice("telemedicine", 40.0, TEAL)
        .slice("patientPortals", 25.0, BLUE)
        .slice("clinicalAnalytics", 20.0, VIOLET)
        .slice("deviceIntegration", 15.0, AMBER)
        .metric("Patients Served", "1.2M", 24.0, "heart")
        .metric("Appointments Booked", "340K", 17.0, "calendar")
        .metric("Care Teams", "2,150", 8.0, "users")
        .timeline("Jan", 54.0)
        .timeline("Feb", 71.0)
        .timeline("Mar", 88.0)
        .build()
}

fn ecommerce_dashboard() -> DashboardDataset {
    DashboardDataset::builder("E-commerce Growth")
        .total("totalStores", 214.0)
        .slice("marketplaces", 35.0, AMBER)
        .slice("directToConsumer", 30.0, BLUE)
        .slice("subscriptions", 20.0, TEAL)
        .slice("wholesale", 15.0, ROSE)
        .metric("Orders Processed", "8.7M", 31.0, "shopping")
        .metric("Conversion Uplift", "4.2%", 14.0, "trending")
        .metric("Gross Revenue", "$620M", 22.0, "dollar")
        .timeline("Q1", 61.0)
        .timeline("Q2", 77.0)
        .timeline("Q3", 93.0)
        .build()
}

fn enterprise_dashboard() -> DashboardDataset {
    DashboardDataset::builder("Enterprise Modernization")
        .total("totalSystems", 57.0)
        .slice("cloudMigration", 38.0, VIOLET)
        .slice("erpIntegration", 27.0, BLUE)
        .slice("aiAutomation", 21.0, TEAL)
        .slice("legacySupport", 14.0, AMBER)
        .metric("Employees Onboarded", "95K", 19.0, "users")
        .metric("Workflows Automated", "1,480", 27.0, "zap")
        .metric("Uptime", "99.98%", 2.0, "check")
        .timeline("H1", 74.0)
        .timeline("H2", 89.0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartData;
    use crate::components::MetricIcon;

    #[test]
    fn table_is_non_empty_and_stable() {
        let first = dashboards();
        let second = dashboards();
        assert_eq!(first.len(), 4);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn every_dataset_is_well_formed() {
        for dataset in dashboards() {
            assert!(!dataset.stats.is_empty(), "{} has no total", dataset.title);
            assert_eq!(dataset.stats.len() - 1, dataset.colors.len(), "{}", dataset.title);
            for metric in &dataset.metrics {
                assert!(
                    MetricIcon::from_key(&metric.icon).is_some(),
                    "{}: unknown icon {}",
                    dataset.title,
                    metric.icon
                );
            }
            for entry in &dataset.timeline {
                assert!((0.0..=100.0).contains(&entry.progress));
            }
        }
    }

    #[test]
    fn slice_values_are_percentages() {
        for dataset in dashboards() {
            let sum: f64 = ChartData::derive(dataset).segments.iter().map(|s| s.value).sum();
            assert_eq!(sum, 100.0, "{}", dataset.title);
        }
    }
}
