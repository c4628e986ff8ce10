use super::chart_view::ChartView;
use crate::shared::charts::comparison;
use crate::shared::charts::record::MetricRecord;
use crate::shared::charts::spec::ChartSpec;
use leptos::prelude::*;

/// Сгруппированные столбцы для сравнения нескольких метрик
#[component]
pub fn ComparisonChart(
    #[prop(into)] records: Signal<Vec<MetricRecord>>,
    #[prop(into)] spec: Signal<ChartSpec>,
) -> impl IntoView {
    view! { <ChartView records=records spec=spec layout=comparison::layout /> }
}
