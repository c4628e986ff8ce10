//! Свёртка сырых строк результатов в записи для графиков и таблиц
//!
//! Все функции чистые: одинаковый набор строк в любом порядке даёт
//! побитово одинаковые суммы, порядок вывода задаётся отдельным шагом.

use super::record::{Metric, MetricRecord, MetricValues, RawRecord};
use contracts::dashboards::d400_occupancy::{is_total_label, OccupancyResult};
use contracts::dashboards::d401_revenue::{
    InvoicePropertyRow, PropertyRevenueRow, ReservationsSummary, TaxCalculationRow,
};
use std::collections::BTreeMap;

/// Ключ группировки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationKey {
    Nationality,
    Property,
}

/// Метка группы или `None`, если строка должна быть исключена до группировки
fn group_label<'a>(record: &'a RawRecord, group_by: AggregationKey) -> Option<&'a str> {
    let label = match group_by {
        AggregationKey::Nationality => record.nationality.as_deref()?,
        AggregationKey::Property => record.property.as_str(),
    };
    let label = label.trim();
    if label.is_empty() || is_total_label(label) {
        None
    } else {
        Some(label)
    }
}

/// Сумма, не зависящая от порядка слагаемых
fn stable_sum(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    values.iter().sum()
}

/// Сортировка для представления: по убыванию метрики, при равенстве по метке
pub fn sort_desc_by(records: &mut [MetricRecord], metric: Metric) {
    records.sort_by(|a, b| {
        b.value(metric)
            .total_cmp(&a.value(metric))
            .then_with(|| a.category.cmp(&b.category))
    });
}

/// Группирует строки по национальности или объекту
///
/// `filter = Some(property)` ограничивает вход строками одного объекта ещё
/// до группировки. Без фильтра одинаковые метки разных объектов сливаются
/// в одну запись.
pub fn aggregate(
    records: &[RawRecord],
    group_by: AggregationKey,
    filter: Option<&str>,
    order_by: Metric,
) -> Vec<MetricRecord> {
    let mut groups: BTreeMap<&str, BTreeMap<Metric, Vec<f64>>> = BTreeMap::new();

    for record in records {
        if let Some(property) = filter {
            if record.property != property {
                continue;
            }
        }
        let Some(label) = group_label(record, group_by) else {
            continue;
        };
        let group = groups.entry(label).or_default();
        for metric in record.metrics.metrics() {
            group
                .entry(metric)
                .or_default()
                .push(record.metrics.get(metric));
        }
    }

    let mut result: Vec<MetricRecord> = groups
        .into_iter()
        .map(|(label, mut sums)| {
            let mut metrics = MetricValues::new();
            for (metric, values) in sums.iter_mut() {
                metrics.set(*metric, stable_sum(values));
            }
            MetricRecord::new(label, metrics)
        })
        .collect();

    sort_desc_by(&mut result, order_by);
    result
}

/// Первые `n` записей (после сортировки)
pub fn top_n(mut records: Vec<MetricRecord>, n: usize) -> Vec<MetricRecord> {
    records.truncate(n);
    records
}

/// Налоговая корзина по ставке IVA
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TaxBucket {
    Azores,
    Mainland,
    Other,
}

impl TaxBucket {
    /// Точное сравнение ставок: ставки приходят литералами из справочника бэкенда
    pub fn for_rate(rate: f64) -> Self {
        if rate == 0.04 {
            TaxBucket::Azores
        } else if rate == 0.06 {
            TaxBucket::Mainland
        } else {
            TaxBucket::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaxBucket::Azores => "Azores (4%)",
            TaxBucket::Mainland => "Mainland (6%)",
            TaxBucket::Other => "Other",
        }
    }
}

/// IVA по регионам: `Value` = сумма IVA, `Count` = число строк в корзине
pub fn bucket_tax_rates(calcs: &[TaxCalculationRow]) -> Vec<MetricRecord> {
    let mut buckets: BTreeMap<TaxBucket, Vec<f64>> = BTreeMap::new();
    for calc in calcs {
        buckets
            .entry(TaxBucket::for_rate(calc.iva_rate))
            .or_default()
            .push(calc.iva_amount);
    }

    buckets
        .into_iter()
        .map(|(bucket, mut amounts)| {
            let count = amounts.len() as f64;
            let metrics = MetricValues::new()
                .with(Metric::Value, stable_sum(&mut amounts))
                .with(Metric::Count, count);
            MetricRecord::new(bucket.label(), metrics)
        })
        .collect()
}

/// Разворачивает `by_property` в плоский список строк
pub fn occupancy_raw_records(occupancy: &OccupancyResult) -> Vec<RawRecord> {
    occupancy
        .by_property
        .iter()
        .flat_map(|(property, rows)| {
            rows.iter().map(move |row| {
                let metrics = MetricValues::new()
                    .with(Metric::TotalNights, row.total_nights)
                    .with(Metric::UniqueGuests, row.unique_guests)
                    .with(Metric::PersonNights, row.person_nights)
                    .with(Metric::TotalPeople, row.total_people);
                RawRecord::new(property.as_str(), Some(&row.nationality), metrics)
            })
        })
        .collect()
}

/// Итоги по объектам из предрасчитанных строк TOTAL; объекты без ночей пропускаются
pub fn property_totals(occupancy: &OccupancyResult) -> Vec<MetricRecord> {
    occupancy
        .properties()
        .into_iter()
        .filter_map(|property| {
            let total = occupancy.total_row(&property)?;
            if total.total_nights <= 0.0 {
                return None;
            }
            let metrics = MetricValues::new()
                .with(Metric::TotalNights, total.total_nights)
                .with(Metric::UniqueGuests, total.unique_guests)
                .with(Metric::PersonNights, total.person_nights);
            Some(MetricRecord::new(property, metrics))
        })
        .collect()
}

pub fn revenue_raw_records(rows: &[PropertyRevenueRow]) -> Vec<RawRecord> {
    rows.iter()
        .map(|row| {
            let metrics = MetricValues::new()
                .with(Metric::GrossValue, row.gross_value)
                .with(Metric::Commission, row.commission)
                .with(Metric::IvaAmount, row.iva_amount)
                .with(Metric::NetValue, row.net_value)
                .with(Metric::ReservationCount, row.reservation_count as f64);
            RawRecord::new(row.property.as_str(), None, metrics)
        })
        .collect()
}

pub fn invoice_raw_records(rows: &[InvoicePropertyRow]) -> Vec<RawRecord> {
    rows.iter()
        .map(|row| {
            let metrics = MetricValues::new()
                .with(Metric::GrossValue, row.gross_value)
                .with(Metric::NetValue, row.net_value)
                .with(Metric::IvaAmount, row.iva_amount)
                .with(Metric::InvoiceCount, row.invoice_count as f64);
            RawRecord::new(row.property.as_str(), None, metrics)
        })
        .collect()
}

/// Структура выручки для круговой диаграммы: нетто, комиссии, IVA
pub fn revenue_breakdown(
    summary: &ReservationsSummary,
    labels: [&str; 3],
) -> Vec<MetricRecord> {
    let [net, commissions, iva] = labels;
    vec![
        MetricRecord::new(net, MetricValues::new().with(Metric::Value, summary.total_net_value)),
        MetricRecord::new(
            commissions,
            MetricValues::new().with(Metric::Value, summary.total_commissions),
        ),
        MetricRecord::new(iva, MetricValues::new().with(Metric::Value, summary.total_iva)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(property: &str, nationality: &str, nights: f64) -> RawRecord {
        RawRecord::new(
            property,
            Some(nationality),
            MetricValues::new().with(Metric::TotalNights, nights),
        )
    }

    #[test]
    fn test_nationality_merges_across_properties_and_skips_total() {
        let records = vec![
            row("A", "France", 10.0),
            row("B", "France", 5.0),
            row("A", "TOTAL", 10.0),
        ];
        let result = aggregate(&records, AggregationKey::Nationality, None, Metric::TotalNights);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "France");
        assert_eq!(result[0].value(Metric::TotalNights), 15.0);
    }

    #[test]
    fn test_filter_restricts_before_grouping() {
        let records = vec![
            row("A", "France", 10.0),
            row("B", "France", 5.0),
            row("B", "Spain", 7.0),
        ];
        let result = aggregate(
            &records,
            AggregationKey::Nationality,
            Some("B"),
            Metric::TotalNights,
        );
        let labels: Vec<_> = result.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(labels, vec!["Spain", "France"]);
        assert_eq!(result[1].value(Metric::TotalNights), 5.0);
    }

    #[test]
    fn test_total_marker_excluded_regardless_of_case() {
        let records = vec![
            row("A", "total", 99.0),
            row("A", " Total ", 99.0),
            row("A", "", 3.0),
            row("A", "   ", 3.0),
            row("A", "Germany", 1.0),
        ];
        let result = aggregate(&records, AggregationKey::Nationality, None, Metric::TotalNights);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "Germany");

        let by_property = vec![row("TOTAL", "Germany", 4.0), row("A", "Germany", 1.0)];
        let result = aggregate(&by_property, AggregationKey::Property, None, Metric::TotalNights);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].category, "A");
    }

    #[test]
    fn test_aggregation_conserves_sum() {
        let records = vec![
            row("A", "France", 10.5),
            row("A", "Spain", 2.25),
            row("B", "France", 0.125),
            row("B", "Italy", 4.0),
            row("B", "TOTAL", 100.0),
        ];
        let result = aggregate(&records, AggregationKey::Nationality, None, Metric::TotalNights);
        let out: f64 = result.iter().map(|r| r.value(Metric::TotalNights)).sum();
        let expected: f64 = records
            .iter()
            .filter(|r| !is_total_label(r.nationality.as_deref().unwrap_or("")))
            .map(|r| r.metrics.get(Metric::TotalNights))
            .sum();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_aggregation_is_order_independent() {
        let values = [0.1, 0.2, 0.3, 1e16, -1e16, 7.7, 1.0 / 3.0];
        let records: Vec<RawRecord> = values.iter().map(|v| row("A", "France", *v)).collect();
        let mut reversed = records.clone();
        reversed.reverse();
        let mut rotated = records.clone();
        rotated.rotate_left(3);

        let a = aggregate(&records, AggregationKey::Nationality, None, Metric::TotalNights);
        let b = aggregate(&reversed, AggregationKey::Nationality, None, Metric::TotalNights);
        let c = aggregate(&rotated, AggregationKey::Nationality, None, Metric::TotalNights);
        assert_eq!(
            a[0].value(Metric::TotalNights).to_bits(),
            b[0].value(Metric::TotalNights).to_bits()
        );
        assert_eq!(a, c);
    }

    #[test]
    fn test_ties_are_broken_by_label() {
        let records = vec![row("A", "Spain", 5.0), row("A", "Austria", 5.0), row("A", "Peru", 9.0)];
        let result = aggregate(&records, AggregationKey::Nationality, None, Metric::TotalNights);
        let labels: Vec<_> = result.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(labels, vec!["Peru", "Austria", "Spain"]);
    }

    #[test]
    fn test_tax_buckets() {
        assert_eq!(TaxBucket::for_rate(0.04).label(), "Azores (4%)");
        assert_eq!(TaxBucket::for_rate(0.06).label(), "Mainland (6%)");
        assert_eq!(TaxBucket::for_rate(0.23).label(), "Other");
        assert_eq!(TaxBucket::for_rate(f64::NAN), TaxBucket::Other);

        let calc = |rate: f64, amount: f64| TaxCalculationRow {
            iva_rate: rate,
            iva_amount: amount,
            ..Default::default()
        };
        let buckets = bucket_tax_rates(&[calc(0.06, 6.0), calc(0.04, 4.0), calc(0.23, 23.0), calc(0.06, 3.0)]);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[0].category, "Azores (4%)");
        assert_eq!(buckets[1].value(Metric::Value), 9.0);
        assert_eq!(buckets[1].value(Metric::Count), 2.0);
        let rows: f64 = buckets.iter().map(|b| b.value(Metric::Count)).sum();
        assert_eq!(rows, 4.0);
    }

    #[test]
    fn test_top_n() {
        let records = vec![row("A", "X", 3.0), row("A", "Y", 2.0), row("A", "Z", 1.0)];
        let result = top_n(
            aggregate(&records, AggregationKey::Nationality, None, Metric::TotalNights),
            2,
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].category, "Y");
    }

    #[test]
    fn test_occupancy_flattening_and_property_totals() {
        let occupancy: OccupancyResult = serde_json::from_str(
            r#"{
                "general_stats": {"total_guests": 3, "total_nights": 12, "total_reservations": 2},
                "by_property": {
                    "Casa Azul": [
                        {"nationality": "France", "total_nights": 10, "unique_guests": 2, "person_nights": 20},
                        {"nationality": "", "total_nights": "", "unique_guests": "", "person_nights": ""},
                        {"nationality": "TOTAL", "total_nights": 10, "unique_guests": 2, "person_nights": 20}
                    ],
                    "Empty Loft": [
                        {"nationality": "TOTAL", "total_nights": 0, "unique_guests": 0, "person_nights": 0}
                    ]
                }
            }"#,
        )
        .unwrap();

        let raw = occupancy_raw_records(&occupancy);
        assert_eq!(raw.len(), 4);
        let result = aggregate(&raw, AggregationKey::Nationality, None, Metric::TotalNights);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].value(Metric::PersonNights), 20.0);

        let totals = property_totals(&occupancy);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category, "Casa Azul");
        assert_eq!(totals[0].value(Metric::TotalNights), 10.0);
    }

    #[test]
    fn test_revenue_breakdown_order() {
        let summary = ReservationsSummary {
            total_net_value: 80.0,
            total_commissions: 15.0,
            total_iva: 5.0,
            ..Default::default()
        };
        let slices = revenue_breakdown(&summary, ["Net", "Commissions", "IVA"]);
        let values: Vec<f64> = slices.iter().map(|s| s.value(Metric::Value)).collect();
        assert_eq!(values, vec![80.0, 15.0, 5.0]);
    }
}
