// Summary payload domain models
use std::collections::BTreeMap;

/// Paired labels/values used to draw one bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl ChartSeries {
    /// Pairs labels with values positionally. Returns `None` when the
    /// lengths differ.
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Option<Self> {
        if labels.len() != values.len() {
            return None;
        }
        Some(Self { labels, values })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Decoded dashboard summary. Built fresh on every fetch and dropped after
/// rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryRecord {
    pub cards: BTreeMap<String, f64>,
    pub chart_datasets: BTreeMap<String, ChartSeries>,
}

impl SummaryRecord {
    pub fn new(cards: BTreeMap<String, f64>, chart_datasets: BTreeMap<String, ChartSeries>) -> Self {
        Self {
            cards,
            chart_datasets,
        }
    }

    pub fn card(&self, metric: &str) -> Option<f64> {
        self.cards.get(metric).copied()
    }

    pub fn chart(&self, dataset: &str) -> Option<&ChartSeries> {
        self.chart_datasets.get(dataset)
    }
}
