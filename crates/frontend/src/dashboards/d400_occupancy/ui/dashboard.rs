use crate::shared::charts::aggregation::{
    aggregate, occupancy_raw_records, property_totals, top_n, AggregationKey,
};
use crate::shared::charts::ui::{BarChart, PieChart};
use crate::shared::charts::{ChartSpec, Metric, MetricRecord, ValueFormat};
use crate::shared::components::table::{ColumnKind, ColumnSpec, DataTable};
use crate::shared::components::{CardAnimated, PropertySelector, StatCard};
use crate::shared::config::use_config;
use crate::shared::i18n::use_i18n;
use contracts::dashboards::d400_occupancy::OccupancyResult;
use leptos::prelude::*;

/// Национальностей на круговой диаграмме
const PIE_TOP_N: usize = 10;

/// Заголовок с выбранным объектом в скобках
fn with_property(title: String, property: Option<String>) -> String {
    match property {
        Some(p) => format!("{} ({})", title, p),
        None => title,
    }
}

/// Дашборд заполняемости
#[component]
pub fn OccupancyDashboard(data: OccupancyResult) -> impl IntoView {
    let i18n = use_i18n();
    let defaults = use_config().charts;
    let selected = RwSignal::new(None::<String>);

    let stats = &data.general_stats;
    let (total_guests, total_nights, total_reservations) =
        (stats.total_guests, stats.total_nights, stats.total_reservations);
    let properties = data.properties();
    let raw = StoredValue::new(occupancy_raw_records(&data));
    let totals = property_totals(&data);

    let nationality_rows: Memo<Vec<MetricRecord>> = Memo::new(move |_| {
        let filter = selected.get();
        raw.with_value(|raw| {
            aggregate(
                raw,
                AggregationKey::Nationality,
                filter.as_deref(),
                Metric::TotalNights,
            )
        })
    });
    log::debug!("Occupancy dashboard: {} properties", properties.len());

    let nights_spec = ChartSpec::bar(Metric::TotalNights, "#3b82f6", &defaults);
    let person_nights_spec = ChartSpec::bar(Metric::PersonNights, "#10b981", &defaults);
    let pie_spec = ChartSpec::pie(Metric::TotalNights, &defaults).with_format(ValueFormat::Integer);

    let totals_for_nights = totals.clone();
    let totals_for_person_nights = totals;

    view! {
        <div class="dashboard dashboard--occupancy" style="display: flex; flex-direction: column; gap: 24px;">
            <div class="dashboard__stats" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;">
                <StatCard
                    label=Signal::derive(move || i18n.t("unique_guests"))
                    icon="👥"
                    value=Signal::derive(move || Some(total_guests))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=Signal::derive(move || i18n.t("total_nights"))
                    icon="🌙"
                    value=Signal::derive(move || Some(total_nights))
                    format=ValueFormat::Integer
                />
                <StatCard
                    label=Signal::derive(move || i18n.t("total_reservations"))
                    icon="📋"
                    value=Signal::derive(move || Some(total_reservations))
                    format=ValueFormat::Integer
                />
            </div>

            <PropertySelector
                properties=Signal::derive(move || properties.clone())
                selected=selected
            />

            <div class="dashboard__row" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px;">
                <CardAnimated title=Signal::derive(move || i18n.t("nights_by_property"))>
                    <BarChart
                        records=Signal::derive(move || totals_for_nights.clone())
                        spec=Signal::derive(move || nights_spec.clone())
                    />
                </CardAnimated>
                <CardAnimated
                    title=Signal::derive(move || with_property(i18n.t("guest_distribution"), selected.get()))
                    delay_ms=80
                >
                    <PieChart
                        records=Signal::derive(move || top_n(nationality_rows.get(), PIE_TOP_N))
                        spec=Signal::derive(move || pie_spec.clone())
                    />
                </CardAnimated>
            </div>

            <CardAnimated title=Signal::derive(move || i18n.t("person_nights_by_property")) delay_ms=160>
                <BarChart
                    records=Signal::derive(move || totals_for_person_nights.clone())
                    spec=Signal::derive(move || person_nights_spec.clone())
                />
            </CardAnimated>

            <CardAnimated
                title=Signal::derive(move || with_property(i18n.t("detailed_data"), selected.get()))
                delay_ms=240
            >
                <DataTable
                    rows=nationality_rows
                    columns=Signal::derive(move || {
                        vec![
                            ColumnSpec::category(i18n.t("nationality")),
                            ColumnSpec::metric(Metric::UniqueGuests, i18n.t("unique_guests"), ColumnKind::Number),
                            ColumnSpec::metric(Metric::TotalNights, i18n.t("total_nights"), ColumnKind::Number),
                            ColumnSpec::metric(Metric::PersonNights, i18n.t("person_nights"), ColumnKind::Number),
                        ]
                    })
                />
            </CardAnimated>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_property() {
        assert_eq!(with_property("Detailed Data".into(), None), "Detailed Data");
        assert_eq!(
            with_property("Detailed Data".into(), Some("Angra".into())),
            "Detailed Data (Angra)"
        );
    }
}
