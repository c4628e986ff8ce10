use super::chart_view::ChartView;
use crate::shared::charts::donut;
use crate::shared::charts::record::MetricRecord;
use crate::shared::charts::spec::ChartSpec;
use leptos::prelude::*;

/// Кольцевая диаграмма долей с легендой
#[component]
pub fn PieChart(
    #[prop(into)] records: Signal<Vec<MetricRecord>>,
    #[prop(into)] spec: Signal<ChartSpec>,
) -> impl IntoView {
    view! { <ChartView records=records spec=spec layout=donut::layout /> }
}
