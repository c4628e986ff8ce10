use crate::shared::api::{open_download, ReportKind};
use crate::shared::charts::aggregation::{
    aggregate, bucket_tax_rates, invoice_raw_records, revenue_breakdown, revenue_raw_records,
    AggregationKey,
};
use crate::shared::charts::ui::{BarChart, ComparisonChart, PieChart};
use crate::shared::charts::{ChartSpec, Metric, MetricRecord, SeriesSpec, ValueFormat};
use crate::shared::components::table::{ColumnKind, ColumnSpec, DataTable, CURRENCY_SYMBOL};
use crate::shared::components::{CardAnimated, StatCard, StatTone};
use crate::shared::config::use_config;
use crate::shared::i18n::use_i18n;
use contracts::dashboards::d401_revenue::RevenueResult;
use leptos::prelude::*;
use thaw::*;

const NET_COLOR: &str = "#10b981";
const COMMISSION_COLOR: &str = "#ef4444";
const BREAKDOWN_PALETTE: [&str; 3] = [NET_COLOR, COMMISSION_COLOR, "#f59e0b"];
const IVA_PALETTE: [&str; 3] = ["#3b82f6", "#8b5cf6", "#06b6d4"];
const IVA_CHART_HEIGHT: f64 = 250.0;

const MONEY: ValueFormat = ValueFormat::Money {
    symbol: CURRENCY_SYMBOL,
};
const AXIS_CURRENCY: ValueFormat = ValueFormat::Currency {
    symbol: CURRENCY_SYMBOL,
};

/// Подпись денежной колонки: `Gross Value (€)`
fn money_label(label: String) -> String {
    format!("{} ({})", label, CURRENCY_SYMBOL)
}

/// Дашборд выручки
#[component]
pub fn RevenueDashboard(data: RevenueResult) -> impl IntoView {
    let i18n = use_i18n();
    let config = use_config();
    let defaults = config.charts.clone();
    let api_config = StoredValue::new(config.api);
    let show_invoices = RwSignal::new(false);

    let summary = data.reservations_summary.clone();
    let has_invoices = data.has_invoice_data();
    let invoices = data.invoices_summary.clone().unwrap_or_default();
    let (invoice_gross, invoice_iva, invoice_net, invoice_count) = (
        invoices.total_gross_value,
        invoices.total_iva,
        invoices.total_net_value,
        invoices.total_invoices as f64,
    );

    let by_property: Vec<MetricRecord> = aggregate(
        &revenue_raw_records(&data.reservations_by_property),
        AggregationKey::Property,
        None,
        Metric::GrossValue,
    );
    let invoice_rows: Vec<MetricRecord> = aggregate(
        &invoice_raw_records(&data.invoices_by_property),
        AggregationKey::Property,
        None,
        Metric::GrossValue,
    );
    let iva_buckets = bucket_tax_rates(&data.detailed_calculations);

    let revenue_spec = ChartSpec::bar(Metric::GrossValue, NET_COLOR, &defaults).with_format(AXIS_CURRENCY);
    let breakdown_spec = ChartSpec::pie(Metric::Value, &defaults)
        .with_palette(&BREAKDOWN_PALETTE)
        .with_format(AXIS_CURRENCY);
    let iva_spec = ChartSpec::pie(Metric::Value, &defaults)
        .with_palette(&IVA_PALETTE)
        .with_format(AXIS_CURRENCY)
        .with_height(IVA_CHART_HEIGHT);
    let comparison_spec = Signal::derive(move || {
        ChartSpec::comparison(
            vec![
                SeriesSpec::new(Metric::NetValue, NET_COLOR, i18n.t("net_revenue")),
                SeriesSpec::new(Metric::Commission, COMMISSION_COLOR, i18n.t("commission")),
            ],
            &defaults,
        )
        .with_format(AXIS_CURRENCY)
    });

    let breakdown_summary = summary.clone();
    let breakdown = Signal::derive(move || {
        let labels = [i18n.t("net_revenue"), i18n.t("commissions"), i18n.t("iva_vat")];
        revenue_breakdown(
            &breakdown_summary,
            [labels[0].as_str(), labels[1].as_str(), labels[2].as_str()],
        )
    });

    let property_records = StoredValue::new(by_property);
    let invoice_records = StoredValue::new(invoice_rows);

    let table_rows = Signal::derive(move || {
        if show_invoices.get() {
            invoice_records.get_value()
        } else {
            property_records.get_value()
        }
    });
    let table_columns = Signal::derive(move || {
        let mut columns = vec![
            ColumnSpec::category(i18n.t("property")),
            ColumnSpec::metric(Metric::GrossValue, money_label(i18n.t("gross_value")), ColumnKind::Currency),
        ];
        if !show_invoices.get() {
            columns.push(ColumnSpec::metric(
                Metric::Commission,
                money_label(i18n.t("commission")),
                ColumnKind::Currency,
            ));
        }
        columns.push(ColumnSpec::metric(Metric::IvaAmount, money_label(i18n.t("iva_amount")), ColumnKind::Currency));
        columns.push(ColumnSpec::metric(Metric::NetValue, money_label(i18n.t("net_value")), ColumnKind::Currency));
        if show_invoices.get() {
            columns.push(ColumnSpec::metric(Metric::InvoiceCount, i18n.t("invoice_count"), ColumnKind::Number));
        } else {
            columns.push(ColumnSpec::metric(
                Metric::ReservationCount,
                i18n.t("total_reservations"),
                ColumnKind::Number,
            ));
        }
        columns
    });

    let (gross, commissions, iva, net) = (
        summary.total_gross_value,
        summary.total_commissions,
        summary.total_iva,
        summary.total_net_value,
    );

    view! {
        <div class="dashboard dashboard--revenue" style="display: flex; flex-direction: column; gap: 24px;">
            <div class="dashboard__stats" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px;">
                <StatCard
                    label=Signal::derive(move || i18n.t("gross_revenue"))
                    icon="💰"
                    value=Signal::derive(move || Some(gross))
                    format=MONEY
                />
                <StatCard
                    label=Signal::derive(move || i18n.t("commissions"))
                    icon="📉"
                    value=Signal::derive(move || Some(commissions))
                    format=MONEY
                    tone=StatTone::Error
                />
                <StatCard
                    label=Signal::derive(move || i18n.t("iva_vat"))
                    icon="🏛️"
                    value=Signal::derive(move || Some(iva))
                    format=MONEY
                    tone=StatTone::Warning
                />
                <StatCard
                    label=Signal::derive(move || i18n.t("net_revenue"))
                    icon="✨"
                    value=Signal::derive(move || Some(net))
                    format=MONEY
                    tone=StatTone::Success
                />
            </div>

            <Show when=move || has_invoices>
                <div class="dashboard__notice" style="display: flex; justify-content: space-between; align-items: center; background: #eff6ff; border-radius: 12px; padding: 16px;">
                    <div>
                        <div style="font-weight: 500; color: #1e40af;">{move || i18n.t("invoice_data_available")}</div>
                        <div style="font-size: 12px; color: #2563eb;">{move || i18n.t("invoice_compare_hint")}</div>
                    </div>
                    <Button
                        appearance=Signal::derive(move || {
                            if show_invoices.get() { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                        })
                        on_click=move |_| show_invoices.update(|v| *v = !*v)
                    >
                        {move || {
                            if show_invoices.get() {
                                i18n.t("showing_invoice_data")
                            } else {
                                i18n.t("show_invoice_comparison")
                            }
                        }}
                    </Button>
                </div>
            </Show>

            <Show when=move || show_invoices.get()>
                <CardAnimated title=Signal::derive(move || i18n.t("invoice_summary"))>
                    <div class="dashboard__stats" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px;">
                        <StatCard
                            label=Signal::derive(move || i18n.t("invoice_gross"))
                            icon="🧾"
                            value=Signal::derive(move || Some(invoice_gross))
                            format=MONEY
                        />
                        <StatCard
                            label=Signal::derive(move || i18n.t("invoice_iva"))
                            icon="🏛️"
                            value=Signal::derive(move || Some(invoice_iva))
                            format=MONEY
                        />
                        <StatCard
                            label=Signal::derive(move || i18n.t("invoice_net"))
                            icon="✨"
                            value=Signal::derive(move || Some(invoice_net))
                            format=MONEY
                        />
                        <StatCard
                            label=Signal::derive(move || i18n.t("total_invoices"))
                            icon="📄"
                            value=Signal::derive(move || Some(invoice_count))
                            format=ValueFormat::Integer
                        />
                    </div>
                </CardAnimated>
            </Show>

            <div class="dashboard__row" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px;">
                <CardAnimated title=Signal::derive(move || i18n.t("revenue_by_property"))>
                    <BarChart
                        records=Signal::derive(move || property_records.get_value())
                        spec=Signal::derive(move || revenue_spec.clone())
                    />
                </CardAnimated>
                <CardAnimated title=Signal::derive(move || i18n.t("revenue_breakdown")) delay_ms=80>
                    <PieChart records=breakdown spec=Signal::derive(move || breakdown_spec.clone()) />
                </CardAnimated>
            </div>

            <CardAnimated title=Signal::derive(move || i18n.t("net_vs_commissions")) delay_ms=160>
                <ComparisonChart
                    records=Signal::derive(move || property_records.get_value())
                    spec=comparison_spec
                />
            </CardAnimated>

            <div class="dashboard__row" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px;">
                <CardAnimated title=Signal::derive(move || i18n.t("iva_by_region")) delay_ms=240>
                    <PieChart
                        records=Signal::derive(move || iva_buckets.clone())
                        spec=Signal::derive(move || iva_spec.clone())
                    />
                </CardAnimated>
                <CardAnimated
                    title=Signal::derive(move || i18n.t("export_reports"))
                    delay_ms=320
                    style="background: linear-gradient(135deg, #f0fdf4, #eff6ff);"
                >
                    <p style="font-size: 14px; color: #4b5563;">{move || i18n.t("export_hint")}</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| api_config.with_value(|api| open_download(api, ReportKind::Revenue))
                    >
                        {move || format!("📥 {}", i18n.t("download_revenue"))}
                    </Button>
                </CardAnimated>
            </div>

            <CardAnimated title=Signal::derive(move || i18n.t("revenue_details")) delay_ms=400>
                <DataTable rows=table_rows columns=table_columns />
            </CardAnimated>
        </div>
    }
}
