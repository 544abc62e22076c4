//! Donut chart derivation for dashboard datasets.
//!
//! Turns the semantic `stats`/`colors` records of a [`DashboardDataset`]
//! into ordered [`ChartSegment`]s plus the headline total, and computes SVG
//! paths for the donut slices. Everything here is pure.

use crate::types::DashboardDataset;
use serde::Serialize;

/// Color used when `colors` is shorter than the non-total stats.
pub const FALLBACK_COLOR: &str = "#CBD5E1";

/// One slice of the donut chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSegment {
    /// Original stats key, e.g. "inProgress"
    pub key: String,
    /// Display name, e.g. "In Progress"
    pub name: String,
    /// Percentage-like value
    pub value: f64,
    /// Fill color
    pub color: String,
}

/// Everything the chart card needs from one dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    /// Value of the first stats entry
    pub total: f64,
    /// Non-total entries in stats order
    pub segments: Vec<ChartSegment>,
}

impl ChartData {
    /// Derive chart data from a dataset.
    ///
    /// The first stats entry is the total. Each remaining entry becomes a
    /// segment whose color is the `colors` value at the same offset among
    /// the non-total entries; keys are not matched.
    pub fn derive(dataset: &DashboardDataset) -> Self {
        let total = dataset.stats.first().map(|(_, v)| *v).unwrap_or_default();
        let segments = dataset
            .stats
            .iter()
            .skip(1)
            .enumerate()
            .map(|(offset, (key, value))| ChartSegment {
                key: key.to_string(),
                name: humanize_key(key),
                value: *value,
                color: dataset
                    .colors
                    .value_at(offset)
                    .cloned()
                    .unwrap_or_else(|| FALLBACK_COLOR.to_string()),
            })
            .collect();

        Self { total, segments }
    }

    /// Legend rows for the two-column grid, row-major.
    pub fn legend_rows(&self) -> impl Iterator<Item = &[ChartSegment]> {
        self.segments.chunks(2)
    }
}

/// Turn a camelCase key into a spaced, capitalized label.
///
/// A space goes before every capital that is not the first character and
/// not already preceded by whitespace, so already separated labels pass
/// through unchanged.
///
/// ```rust
/// use arriva_site::chart::humanize_key;
///
/// assert_eq!(humanize_key("netNewUsers"), "Net New Users");
/// assert_eq!(humanize_key("Net New Users"), "Net New Users");
/// ```
pub fn humanize_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev: Option<char> = None;

    for ch in key.chars() {
        match prev {
            None => out.extend(ch.to_uppercase()),
            Some(p) => {
                if ch.is_uppercase() && !p.is_whitespace() {
                    out.push(' ');
                }
                out.push(ch);
            }
        }
        prev = Some(ch);
    }

    out
}

/// Donut sizing in SVG user units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutGeometry {
    /// Center x
    pub cx: f64,
    /// Center y
    pub cy: f64,
    /// Inner radius of the ring
    pub inner_radius: f64,
    /// Outer radius of the ring
    pub outer_radius: f64,
    /// Gap between slices, in degrees
    pub padding_angle: f64,
}

impl Default for DonutGeometry {
    fn default() -> Self {
        Self {
            cx: 64.0,
            cy: 64.0,
            inner_radius: 35.0,
            outer_radius: 55.0,
            padding_angle: 2.0,
        }
    }
}

/// A drawable donut slice.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSlice {
    /// SVG path data for the annular sector
    pub path: String,
    /// Fill color
    pub color: String,
    /// Start angle in degrees, clockwise from 12 o'clock
    pub start_angle: f64,
    /// Sweep in degrees
    pub sweep: f64,
}

/// Lay out segments as donut slices, proportional to their values.
///
/// Non-positive values take no room. When nothing is positive the result is
/// empty and only the center total is drawn.
pub fn donut_slices(segments: &[ChartSegment], geometry: &DonutGeometry) -> Vec<DonutSlice> {
    let drawable: Vec<&ChartSegment> = segments.iter().filter(|s| s.value > 0.0).collect();
    let sum: f64 = drawable.iter().map(|s| s.value).sum();
    if drawable.is_empty() || !sum.is_finite() {
        return Vec::new();
    }

    let padding = geometry.padding_angle.max(0.0);
    let available = (360.0 - padding * drawable.len() as f64).max(0.0);

    let mut angle = 0.0;
    drawable
        .into_iter()
        .map(|segment| {
            let sweep = available * segment.value / sum;
            let slice = DonutSlice {
                path: annular_sector(geometry, angle, sweep),
                color: segment.color.clone(),
                start_angle: angle,
                sweep,
            };
            angle += sweep + padding;
            slice
        })
        .collect()
}

fn polar(geometry: &DonutGeometry, radius: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (
        geometry.cx + radius * rad.sin(),
        geometry.cy - radius * rad.cos(),
    )
}

fn annular_sector(geometry: &DonutGeometry, start: f64, sweep: f64) -> String {
    let end = start + sweep;
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    let (r_out, r_in) = (geometry.outer_radius, geometry.inner_radius);

    let (ox0, oy0) = polar(geometry, r_out, start);
    let (ox1, oy1) = polar(geometry, r_out, end);
    let (ix1, iy1) = polar(geometry, r_in, end);
    let (ix0, iy0) = polar(geometry, r_in, start);

    format!(
        "M{ox0:.2},{oy0:.2} A{r_out},{r_out} 0 {large_arc} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{r_in},{r_in} 0 {large_arc} 0 {ix0:.2},{iy0:.2} Z"
    )
}
