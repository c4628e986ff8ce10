use crate::shared::api::{open_download, ReportKind};
use crate::shared::charts::ValueFormat;
use crate::shared::components::table::CURRENCY_SYMBOL;
use crate::shared::components::CardAnimated;
use crate::shared::config::ApiConfig;
use crate::shared::i18n::use_i18n;
use contracts::dashboards::d402_results::AnalyticsResults;
use leptos::prelude::*;
use thaw::*;

const MONEY: ValueFormat = ValueFormat::Money {
    symbol: CURRENCY_SYMBOL,
};

/// Краткая сводка результатов с кнопками скачивания отчётов
#[component]
pub fn ResultsSummary(results: AnalyticsResults, api: ApiConfig) -> impl IntoView {
    let i18n = use_i18n();
    let api = StoredValue::new(api);

    let occupancy = &results.occupancy.general_stats;
    let occupancy_items = [
        ("total_guests", ValueFormat::Integer.format(occupancy.total_guests)),
        ("total_nights", ValueFormat::Integer.format(occupancy.total_nights)),
        ("total_reservations", ValueFormat::Integer.format(occupancy.total_reservations)),
    ];
    let revenue = &results.revenue.reservations_summary;
    let revenue_items = [
        ("gross_revenue", MONEY.format(revenue.total_gross_value)),
        ("net_revenue", MONEY.format(revenue.total_net_value)),
        ("total_commissions", MONEY.format(revenue.total_commissions)),
        ("total_iva", MONEY.format(revenue.total_iva)),
    ];

    let render_items = move |items: Vec<(&'static str, String)>| {
        items
            .into_iter()
            .map(|(key, value)| {
                view! {
                    <div class="summary__item">
                        <div class="summary__value" style="font-size: 22px; font-weight: 700;">{value}</div>
                        <div class="summary__label" style="font-size: 12px; color: #6b7280;">{move || i18n.t(key)}</div>
                    </div>
                }
            })
            .collect_view()
    };

    let download = move |kind: ReportKind| api.with_value(|api| open_download(api, kind));

    view! {
        <CardAnimated
            title=Signal::derive(move || format!("📊 {}", i18n.t("results_summary")))
            actions=ChildrenFn::to_children(move || view! {
                <div style="display: flex; gap: 8px;">
                    <Button size=ButtonSize::Small on_click=move |_| download(ReportKind::Occupancy)>
                        {move || format!("📥 {}", i18n.t("occupancy_report"))}
                    </Button>
                    <Button size=ButtonSize::Small on_click=move |_| download(ReportKind::Revenue)>
                        {move || format!("📥 {}", i18n.t("revenue_report"))}
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| download(ReportKind::All)
                    >
                        {move || format!("📥 {}", i18n.t("download_all"))}
                    </Button>
                </div>
            })
        >
            <div class="summary" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 24px;">
                <div class="summary__block summary__block--occupancy" style="background: #eff6ff; border-radius: 8px; padding: 16px;">
                    <h4 style="margin: 0 0 12px;">{move || i18n.t("occupancy_overview")}</h4>
                    <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;">
                        {render_items(occupancy_items.to_vec())}
                    </div>
                </div>
                <div class="summary__block summary__block--revenue" style="background: #f0fdf4; border-radius: 8px; padding: 16px;">
                    <h4 style="margin: 0 0 12px;">{move || i18n.t("revenue_overview")}</h4>
                    <div style="display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;">
                        {render_items(revenue_items.to_vec())}
                    </div>
                </div>
            </div>
            <p style="font-size: 12px; color: #6b7280; text-align: center; margin-top: 16px;">
                {move || i18n.t("navigate_hint")}
            </p>
        </CardAnimated>
    }
}
