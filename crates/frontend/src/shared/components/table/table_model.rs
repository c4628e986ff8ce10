//! Модель таблицы данных: колонки, значения ячеек, форматирование и сортировка

use super::number_format::{format_currency, format_locale, format_percent, CURRENCY_SYMBOL};
use crate::shared::charts::record::{Metric, MetricRecord};
use crate::shared::list_utils::{sort_list, Sortable};
use contracts::dashboards::d400_occupancy::is_total_label;
use std::cmp::Ordering;

/// Идентификатор колонки категории
pub const CATEGORY_COLUMN: &str = "category";

/// Вид форматирования колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Разделители тысяч, до 3 знаков после запятой
    Number,
    /// `€1,234.50`
    Currency,
    /// Доля ×100, 1 знак, `%`
    Percent,
}

impl ColumnKind {
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ColumnKind::Text)
    }
}

/// Откуда колонка берёт значение
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    Category,
    Metric(Metric),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub source: ColumnSource,
    pub label: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn category(label: impl Into<String>) -> Self {
        Self {
            source: ColumnSource::Category,
            label: label.into(),
            kind: ColumnKind::Text,
        }
    }

    pub fn metric(metric: Metric, label: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            source: ColumnSource::Metric(metric),
            label: label.into(),
            kind,
        }
    }

    /// Стабильный идентификатор колонки для сортировки
    pub fn id(&self) -> &'static str {
        match self.source {
            ColumnSource::Category => CATEGORY_COLUMN,
            ColumnSource::Metric(metric) => metric.key(),
        }
    }

    pub fn value(&self, row: &MetricRecord) -> CellValue {
        match self.source {
            ColumnSource::Category => CellValue::Text(row.category.clone()),
            ColumnSource::Metric(metric) => match row.metrics.get_present(metric) {
                Some(v) => CellValue::Number(v),
                None => CellValue::Missing,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

/// Пустое и отсутствующее значение выводится как `-`
pub fn format_cell(value: &CellValue, kind: ColumnKind) -> String {
    match value {
        CellValue::Missing => "-".to_string(),
        CellValue::Text(s) if s.trim().is_empty() => "-".to_string(),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(v) => match kind {
            ColumnKind::Text | ColumnKind::Number => format_locale(*v),
            ColumnKind::Currency => format_currency(*v, CURRENCY_SYMBOL),
            ColumnKind::Percent => format_percent(*v, 1),
        },
    }
}

/// Строка итога выделяется стилем, но выводится
pub fn is_total_row(row: &MetricRecord) -> bool {
    is_total_label(&row.category)
}

impl Sortable for MetricRecord {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        if field == CATEGORY_COLUMN {
            return self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase())
                .then_with(|| self.category.cmp(&other.category));
        }
        let metric = self.metrics.metrics().chain(other.metrics.metrics()).find(|m| m.key() == field);
        match metric {
            Some(metric) => self.value(metric).total_cmp(&other.value(metric)),
            None => Ordering::Equal,
        }
    }
}

/// Сортировка строк таблицы по колонке
///
/// Строки без значения в колонке идут после остальных в любом направлении,
/// строки итогов всегда остаются внизу в исходном порядке.
pub fn sort_rows(rows: &[MetricRecord], column: &ColumnSpec, ascending: bool) -> Vec<MetricRecord> {
    let (totals, regular): (Vec<_>, Vec<_>) = rows.iter().cloned().partition(is_total_row);
    let (mut present, missing): (Vec<_>, Vec<_>) = regular
        .into_iter()
        .partition(|row| column.value(row) != CellValue::Missing);

    sort_list(&mut present, column.id(), ascending);

    present.into_iter().chain(missing).chain(totals).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::charts::record::MetricValues;

    fn row(label: &str, nights: Option<f64>) -> MetricRecord {
        let mut metrics = MetricValues::new();
        if let Some(n) = nights {
            metrics.set(Metric::TotalNights, n);
        }
        MetricRecord::new(label, metrics)
    }

    #[test]
    fn test_format_cell_by_kind() {
        assert_eq!(format_cell(&CellValue::Number(1234.0), ColumnKind::Number), "1,234");
        assert_eq!(format_cell(&CellValue::Number(1234.5), ColumnKind::Currency), "€1,234.50");
        assert_eq!(format_cell(&CellValue::Number(0.1234), ColumnKind::Percent), "12.3%");
        assert_eq!(format_cell(&CellValue::Missing, ColumnKind::Currency), "-");
        assert_eq!(format_cell(&CellValue::Text(String::new()), ColumnKind::Text), "-");
        assert_eq!(format_cell(&CellValue::Text("France".into()), ColumnKind::Text), "France");
    }

    #[test]
    fn test_missing_metric_is_missing_cell() {
        let column = ColumnSpec::metric(Metric::TotalNights, "Nights", ColumnKind::Number);
        assert_eq!(column.value(&row("A", None)), CellValue::Missing);
        assert_eq!(column.value(&row("A", Some(0.0))), CellValue::Number(0.0));
    }

    #[test]
    fn test_sort_pins_total_and_missing_last() {
        let rows = vec![
            row("TOTAL", Some(100.0)),
            row("Spain", Some(7.0)),
            row("Peru", None),
            row("France", Some(15.0)),
        ];
        let column = ColumnSpec::metric(Metric::TotalNights, "Nights", ColumnKind::Number);

        let asc: Vec<_> = sort_rows(&rows, &column, true).into_iter().map(|r| r.category).collect();
        assert_eq!(asc, vec!["Spain", "France", "Peru", "TOTAL"]);

        let desc: Vec<_> = sort_rows(&rows, &column, false).into_iter().map(|r| r.category).collect();
        assert_eq!(desc, vec!["France", "Spain", "Peru", "TOTAL"]);

        let by_name = ColumnSpec::category("Nationality");
        let names: Vec<_> = sort_rows(&rows, &by_name, true).into_iter().map(|r| r.category).collect();
        assert_eq!(names, vec!["France", "Peru", "Spain", "TOTAL"]);
    }
}
