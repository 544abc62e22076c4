//! Dashboard data types for the carousel mockups.
//!
//! These types describe one demo scenario ("Fintech", "Healthcare", ...).
//! They are:
//!
//! - **Serializable** - datasets can be dumped to or read from JSON/TOML
//! - **Order-preserving** - [`Record`] keeps insertion order through serde
//! - **Immutable in practice** - the built-in table is created once, see [`crate::data`]
//!
//! # Example
//!
//! ```rust
//! use arriva_site::types::DashboardDataset;
//!
//! let dataset = DashboardDataset::builder("Fintech Projects")
//!     .total("totalProjects", 128.0)
//!     .slice("completed", 45.0, "#3B82F6")
//!     .slice("inProgress", 35.0, "#14B8A6")
//!     .metric("Revenue Processed", "$2.4B", 18.0, "dollar")
//!     .timeline("Q1", 72.0)
//!     .build();
//!
//! assert_eq!(dataset.stats.len(), 3);
//! assert_eq!(dataset.colors.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Ordered key/value record.
///
/// Serializes as a list of `[key, value]` pairs so the order survives any
/// format, including ones whose maps are unordered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record<V>(Vec<(String, V)>);

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> Record<V> {
    /// Empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry at the end.
    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.0.push((key.into(), value));
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// First entry, if any.
    pub fn first(&self) -> Option<(&str, &V)> {
        self.0.first().map(|(k, v)| (k.as_str(), v))
    }

    /// Value at a positional offset.
    pub fn value_at(&self, index: usize) -> Option<&V> {
        self.0.get(index).map(|(_, v)| v)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the record holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Stats record: first entry is the total, the rest are percentage-like values.
pub type Stats = Record<f64>;

/// Color record aligned positionally with the non-total stats entries.
pub type Palette = Record<String>;

/// One demo scenario shown in the dashboard carousel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardDataset {
    /// Card heading, e.g. "Fintech Projects"
    pub title: String,
    /// Total first, then chart values in display order
    pub stats: Stats,
    /// Slice colors, same order as the non-total stats entries
    pub colors: Palette,
    /// Metric cards below the chart
    #[serde(default)]
    pub metrics: Vec<Metric>,
    /// Progress bars at the bottom of the card
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

/// A single metric card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    /// Caption, e.g. "Active Users"
    pub label: String,
    /// Pre-formatted display value, e.g. "$2.4M"
    pub value: String,
    /// Change versus the previous period, in percent
    pub change: f64,
    /// Icon key, resolved by [`crate::components::MetricIcon::from_key`]
    pub icon: String,
}

/// One row of the progress timeline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Period label, e.g. "Q1" or "Jan"
    pub period: String,
    /// Progress in percent, nominally 0-100
    pub progress: f64,
}

impl TimelineEntry {
    /// Bar width in percent, clamped to 0-100.
    pub fn bar_width(&self) -> f64 {
        if self.progress.is_nan() {
            return 0.0;
        }
        self.progress.clamp(0.0, 100.0)
    }
}

impl DashboardDataset {
    /// Start a dataset whose chart slices carry their own color.
    pub fn builder(title: impl Into<String>) -> DatasetBuilder {
        DatasetBuilder {
            dataset: DashboardDataset {
                title: title.into(),
                ..Default::default()
            },
            total: None,
        }
    }
}

/// Keyed builder for [`DashboardDataset`].
///
/// Each slice is declared with its value and color together, so the
/// `stats`/`colors` records come out aligned no matter how the call sites
/// are reordered.
#[derive(Debug)]
pub struct DatasetBuilder {
    dataset: DashboardDataset,
    total: Option<(String, f64)>,
}

impl DatasetBuilder {
    /// Headline figure shown in the center of the donut.
    pub fn total(mut self, key: impl Into<String>, value: f64) -> Self {
        self.total = Some((key.into(), value));
        self
    }

    /// Chart slice with its color.
    pub fn slice(mut self, key: impl Into<String>, value: f64, color: impl Into<String>) -> Self {
        let key = key.into();
        self.dataset.colors.push(key.clone(), color.into());
        self.dataset.stats.push(key, value);
        self
    }

    /// Metric card.
    pub fn metric(
        mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        change: f64,
        icon: impl Into<String>,
    ) -> Self {
        self.dataset.metrics.push(Metric {
            label: label.into(),
            value: value.into(),
            change,
            icon: icon.into(),
        });
        self
    }

    /// Timeline row.
    pub fn timeline(mut self, period: impl Into<String>, progress: f64) -> Self {
        self.dataset.timeline.push(TimelineEntry {
            period: period.into(),
            progress,
        });
        self
    }

    /// Finish. A missing total becomes `total = 0`, keeping the first stats
    /// entry reserved for it.
    pub fn build(self) -> DashboardDataset {
        let DatasetBuilder { mut dataset, total } = self;
        let (key, value) = total.unwrap_or_else(|| ("total".to_string(), 0.0));
        let mut stats = Stats::new();
        stats.push(key, value);
        stats.0.extend(dataset.stats.0);
        dataset.stats = stats;
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_aligns_stats_and_colors() {
        let dataset = DashboardDataset::builder("Demo")
            .slice("completed", 60.0, "#111")
            .total("total", 10.0)
            .slice("pending", 40.0, "#222")
            .build();

        let stats: Vec<_> = dataset.stats.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        assert_eq!(
            stats,
            vec![
                ("total".to_string(), 10.0),
                ("completed".to_string(), 60.0),
                ("pending".to_string(), 40.0),
            ]
        );
        let colors: Vec<_> = dataset.colors.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(colors, vec!["completed", "pending"]);
    }

    #[test]
    fn builder_without_total_reserves_first_entry() {
        let dataset = DashboardDataset::builder("Demo").slice("a", 1.0, "#000").build();
        assert_eq!(dataset.stats.first(), Some(("total", &0.0)));
        assert_eq!(dataset.stats.len(), 2);
    }

    #[test]
    fn record_keeps_order_through_json() {
        let stats: Stats = [("zeta", 1.0), ("alpha", 2.0), ("mid", 3.0)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"[["zeta",1.0],["alpha",2.0],["mid",3.0]]"#);

        let back: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
    }

    #[test]
    fn timeline_bar_width_is_clamped() {
        let entry = |progress| TimelineEntry {
            period: "Q1".into(),
            progress,
        };
        assert_eq!(entry(150.0).bar_width(), 100.0);
        assert_eq!(entry(-5.0).bar_width(), 0.0);
        assert_eq!(entry(42.5).bar_width(), 42.5);
        assert_eq!(entry(f64::NAN).bar_width(), 0.0);
    }
}
