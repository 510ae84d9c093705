// In-memory view hosting text and canvas targets
use crate::application::view_targets::{ChartCanvas, ChartHandle, TextTarget, ViewTargets};
use crate::domain::chart::BarChart;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

/// A view whose set of targets is fixed at construction, like a rendered
/// template. Element state lives behind mutexes so handlers can snapshot it
/// while the renderer writes.
#[derive(Default)]
pub struct MemoryView {
    texts: HashMap<String, Arc<MemoryText>>,
    canvases: HashMap<String, Arc<MemoryCanvas>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSnapshot {
    pub texts: BTreeMap<String, String>,
    /// Live charts per canvas; more than one entry means overlapping charts
    pub charts: BTreeMap<String, Vec<BarChart>>,
}

impl MemoryView {
    pub fn new<T, C>(text_targets: T, canvas_targets: C) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let texts = text_targets
            .into_iter()
            .map(|name| (name.into(), Arc::new(MemoryText::default())))
            .collect();
        let canvases = canvas_targets
            .into_iter()
            .map(|name| (name.into(), Arc::new(MemoryCanvas::default())))
            .collect();

        Self { texts, canvases }
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let texts: BTreeMap<String, String> = self
            .texts
            .iter()
            .map(|(name, text)| (name.clone(), lock(&text.content).clone()))
            .collect();
        let charts: BTreeMap<String, Vec<BarChart>> = self
            .canvases
            .iter()
            .map(|(name, canvas)| {
                let state = lock(&*canvas.state);
                let live: Vec<BarChart> = state.live.iter().map(|(_, chart)| chart.clone()).collect();
                (name.clone(), live)
            })
            .collect();

        ViewSnapshot { texts, charts }
    }

    /// Total number of charts ever drawn across all canvases.
    pub fn draw_count(&self) -> usize {
        self.canvases
            .values()
            .map(|canvas| lock(&*canvas.state).draws)
            .sum()
    }
}

impl ViewTargets for MemoryView {
    fn text(&self, name: &str) -> Option<Arc<dyn TextTarget>> {
        self.texts
            .get(name)
            .map(|text| text.clone() as Arc<dyn TextTarget>)
    }

    fn canvas(&self, name: &str) -> Option<Arc<dyn ChartCanvas>> {
        self.canvases
            .get(name)
            .map(|canvas| canvas.clone() as Arc<dyn ChartCanvas>)
    }
}

#[derive(Default)]
pub struct MemoryText {
    content: Mutex<String>,
}

impl TextTarget for MemoryText {
    fn set_text(&self, text: &str) {
        *lock(&self.content) = text.to_string();
    }
}

#[derive(Default)]
pub struct MemoryCanvas {
    state: Arc<Mutex<CanvasState>>,
}

#[derive(Default)]
struct CanvasState {
    next_id: u64,
    draws: usize,
    live: Vec<(u64, BarChart)>,
}

impl ChartCanvas for MemoryCanvas {
    fn draw_bar_chart(&self, chart: BarChart) -> Box<dyn ChartHandle> {
        let mut state = lock(&*self.state);
        let id = state.next_id;
        state.next_id += 1;
        state.draws += 1;
        state.live.push((id, chart));

        Box::new(MemoryChartHandle {
            id,
            canvas: self.state.clone(),
        })
    }
}

struct MemoryChartHandle {
    id: u64,
    canvas: Arc<Mutex<CanvasState>>,
}

impl ChartHandle for MemoryChartHandle {
    fn destroy(self: Box<Self>) {
        lock(&*self.canvas).live.retain(|(id, _)| *id != self.id);
    }
}

// Element state stays usable even if a writer panicked mid-update
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{BarStyle, Orientation};
    use crate::domain::summary::ChartSeries;

    fn sample_chart() -> BarChart {
        let series = ChartSeries::new(vec!["a".to_string()], vec![1.0]).expect("equal lengths");
        let style = BarStyle::new(
            "label".to_string(),
            "rgba(0, 0, 0, 0.5)".to_string(),
            None,
            1,
            Orientation::Horizontal,
            true,
        );
        BarChart::new(&series, style)
    }

    #[test]
    fn test_resolves_only_declared_targets() {
        let view = MemoryView::new(["card"], ["canvas"]);
        assert!(view.text("card").is_some());
        assert!(view.text("canvas").is_none());
        assert!(view.canvas("canvas").is_some());
        assert!(view.canvas("missing").is_none());
    }

    #[test]
    fn test_text_and_chart_lifecycle() {
        let view = MemoryView::new(["card"], ["canvas"]);
        view.text("card").expect("declared").set_text("R$ 1,00");

        let canvas = view.canvas("canvas").expect("declared");
        let first = canvas.draw_bar_chart(sample_chart());
        let _second = canvas.draw_bar_chart(sample_chart());
        assert_eq!(view.snapshot().charts["canvas"].len(), 2);

        first.destroy();
        let snapshot = view.snapshot();
        assert_eq!(snapshot.charts["canvas"].len(), 1);
        assert_eq!(snapshot.texts["card"], "R$ 1,00");
        assert_eq!(view.draw_count(), 2);
    }
}
