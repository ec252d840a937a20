use crate::ChartType;
use crate::model::ChartDocument;

/// The slice of chart configuration post-processing writes to.
pub trait StackedChart {
    fn set_stacked(&mut self, stacked: bool);
}

/// Pushes the document's `stacked` flag onto bar-family charts. Other chart types are left
/// untouched.
pub fn post_process_data(
    doc: &ChartDocument,
    chart_type: ChartType,
    chart: &mut dyn StackedChart,
    default_stacked: bool,
) {
    if !matches!(chart_type, ChartType::Multibar | ChartType::Pareto) {
        return;
    }
    let stacked = doc.properties.stacked().unwrap_or(default_stacked);
    tracing::debug!(chart_type = %chart_type, stacked, "applying stacked flag");
    chart.set_stacked(stacked);
}
