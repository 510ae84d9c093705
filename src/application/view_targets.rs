// Capabilities the renderer needs from the view layer
use crate::domain::chart::BarChart;
use std::sync::Arc;

/// Resolves logical target names to live elements. `None` means the target
/// is not part of the current view.
pub trait ViewTargets: Send + Sync {
    fn text(&self, name: &str) -> Option<Arc<dyn TextTarget>>;
    fn canvas(&self, name: &str) -> Option<Arc<dyn ChartCanvas>>;
}

pub trait TextTarget: Send + Sync {
    fn set_text(&self, text: &str);
}

pub trait ChartCanvas: Send + Sync {
    /// Draw a bar chart and return the handle that owns it.
    fn draw_bar_chart(&self, chart: BarChart) -> Box<dyn ChartHandle>;
}

/// A chart currently bound to a canvas.
pub trait ChartHandle: Send {
    /// Remove the chart from its canvas.
    fn destroy(self: Box<Self>);
}
