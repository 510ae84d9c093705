// Bar chart domain models
use serde::{Deserialize, Serialize};

use super::summary::ChartSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Bars grow along the x axis (categories on y)
    Horizontal,
    Vertical,
}

/// Presentation parameters for one chart target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarStyle {
    pub dataset_label: String,
    pub background_color: String,
    pub border_color: String,
    pub border_width: u32,
    pub orientation: Orientation,
    pub begin_at_zero: bool,
}

impl BarStyle {
    pub fn new(
        dataset_label: String,
        background_color: String,
        border_color: Option<String>,
        border_width: u32,
        orientation: Orientation,
        begin_at_zero: bool,
    ) -> Self {
        let border_color = border_color.unwrap_or_else(|| opaque_color(&background_color));
        Self {
            dataset_label,
            background_color,
            border_color,
            border_width,
            orientation,
            begin_at_zero,
        }
    }
}

/// A fully described bar chart, ready to be drawn on a canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub style: BarStyle,
}

impl BarChart {
    pub fn new(series: &ChartSeries, style: BarStyle) -> Self {
        Self {
            labels: series.labels().to_vec(),
            values: series.values().to_vec(),
            style,
        }
    }
}

/// Forces the alpha channel of an `rgba(r, g, b, a)` colour to 1.
/// Any other colour syntax is returned unchanged.
pub fn opaque_color(color: &str) -> String {
    let trimmed = color.trim();
    let inner = match trimmed
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        Some(inner) => inner,
        None => return color.to_string(),
    };

    let channels: Vec<&str> = inner.split(',').map(str::trim).collect();
    if channels.len() != 4 {
        return color.to_string();
    }

    format!("rgba({}, {}, {}, 1)", channels[0], channels[1], channels[2])
}
