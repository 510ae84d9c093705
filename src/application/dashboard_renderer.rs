// Dashboard renderer - Projects a summary record onto display targets
use crate::application::currency::CurrencyFormat;
use crate::application::view_targets::{ChartHandle, ViewTargets};
use crate::domain::chart::BarChart;
use crate::domain::summary::SummaryRecord;
use crate::infrastructure::config::BindingsConfig;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Text,
    Canvas,
}

/// A configured target that the current view does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTarget {
    pub target: String,
    pub kind: TargetKind,
}

/// Outcome of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderReport {
    pub cards_written: Vec<String>,
    pub charts_drawn: Vec<String>,
    pub missing_targets: Vec<MissingTarget>,
}

pub struct DashboardRenderer {
    view: Arc<dyn ViewTargets>,
    bindings: BindingsConfig,
    currency: CurrencyFormat,
    // Live chart per canvas target id
    charts: HashMap<String, Box<dyn ChartHandle>>,
}

impl DashboardRenderer {
    pub fn new(view: Arc<dyn ViewTargets>, bindings: BindingsConfig, currency: CurrencyFormat) -> Self {
        Self {
            view,
            bindings,
            currency,
            charts: HashMap::new(),
        }
    }

    pub fn render(&mut self, record: &SummaryRecord) -> RenderReport {
        let mut report = RenderReport::default();
        self.render_cards(record, &mut report);
        self.render_charts(record, &mut report);
        report
    }

    /// Whether a live chart currently occupies `target`.
    pub fn is_occupied(&self, target: &str) -> bool {
        self.charts.contains_key(target)
    }

    fn render_cards(&self, record: &SummaryRecord, report: &mut RenderReport) {
        for card in &self.bindings.cards {
            let Some(value) = record.card(&card.metric) else {
                continue;
            };

            match self.view.text(&card.target) {
                Some(element) => {
                    element.set_text(&self.currency.format(value));
                    report.cards_written.push(card.target.clone());
                }
                None => {
                    tracing::debug!("Text target {} not in view, skipping {}", card.target, card.metric);
                    report.missing_targets.push(MissingTarget {
                        target: card.target.clone(),
                        kind: TargetKind::Text,
                    });
                }
            }
        }
    }

    fn render_charts(&mut self, record: &SummaryRecord, report: &mut RenderReport) {
        for chart in &self.bindings.charts {
            let Some(series) = record.chart(&chart.dataset) else {
                tracing::debug!("No dataset {} in summary, skipping {}", chart.dataset, chart.target);
                continue;
            };

            let Some(canvas) = self.view.canvas(&chart.target) else {
                tracing::warn!("Canvas with id '{}' not found", chart.target);
                report.missing_targets.push(MissingTarget {
                    target: chart.target.clone(),
                    kind: TargetKind::Canvas,
                });
                continue;
            };

            // Destroy before recreate so the target never holds two charts
            if let Some(previous) = self.charts.remove(&chart.target) {
                tracing::debug!("Destroying previous chart on {}", chart.target);
                previous.destroy();
            }

            let handle = canvas.draw_bar_chart(BarChart::new(series, chart.style()));
            self.charts.insert(chart.target.clone(), handle);
            report.charts_drawn.push(chart.target.clone());
        }
    }
}
