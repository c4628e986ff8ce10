use super::chart_view::ChartView;
use crate::shared::charts::bar;
use crate::shared::charts::record::MetricRecord;
use crate::shared::charts::spec::ChartSpec;
use leptos::prelude::*;

/// Столбчатая диаграмма одной метрики
#[component]
pub fn BarChart(
    #[prop(into)] records: Signal<Vec<MetricRecord>>,
    #[prop(into)] spec: Signal<ChartSpec>,
) -> impl IntoView {
    view! { <ChartView records=records spec=spec layout=bar::layout /> }
}
