//! Конфигурация графика: серии, формат значений, палитра

use super::record::Metric;
use crate::shared::components::table::{
    format_currency, format_locale, format_number_int, format_percent,
};
use crate::shared::config::ChartDefaults;

/// Палитра по умолчанию (порядковая: i-я категория получает i-й цвет)
pub const DEFAULT_PALETTE: [&str; 10] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899", "#14b8a6",
    "#f97316", "#6366f1",
];

/// Формат подписей значений на осях и во всплывающих подсказках
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueFormat {
    /// Разделители тысяч, до 3 знаков после запятой
    Locale,
    Integer,
    /// Префикс валюты перед "локальным" числом: `€1,500`
    Currency { symbol: &'static str },
    /// Денежный формат с 2 знаками: `€1,500.00`
    Money { symbol: &'static str },
    /// Значение уже в процентах, добавляется только знак
    Percent { decimals: u8 },
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Locale => format_locale(value),
            ValueFormat::Integer => format_number_int(value),
            ValueFormat::Currency { symbol } => {
                let formatted = format_locale(value);
                match formatted.strip_prefix('-') {
                    Some(abs) => format!("-{}{}", symbol, abs),
                    None => format!("{}{}", symbol, formatted),
                }
            }
            ValueFormat::Money { symbol } => format_currency(value, symbol),
            ValueFormat::Percent { decimals } => format_percent(value / 100.0, *decimals),
        }
    }
}

/// Отсутствующий формат означает `Locale`
pub fn format_value(format: Option<ValueFormat>, value: f64) -> String {
    format.unwrap_or(ValueFormat::Locale).format(value)
}

/// Одна серия значений: метрика, цвет и подпись легенды
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub metric: Metric,
    pub color: String,
    pub label: String,
}

impl SeriesSpec {
    pub fn new(metric: Metric, color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            metric,
            color: color.into(),
            label: label.into(),
        }
    }
}

/// Неизменяемая конфигурация отрисовки; при смене параметров создаётся новая
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub series: Vec<SeriesSpec>,
    pub height: f64,
    pub format: Option<ValueFormat>,
    pub palette: Vec<String>,
    pub padding: f64,
    pub headroom: f64,
    pub label_threshold: f64,
    pub legend_rows: usize,
    pub animation_ms: u32,
}

impl ChartSpec {
    fn with_series(series: Vec<SeriesSpec>, padding: f64, defaults: &ChartDefaults) -> Self {
        Self {
            series,
            height: defaults.height,
            format: None,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            padding,
            headroom: defaults.headroom,
            label_threshold: defaults.label_threshold,
            legend_rows: defaults.legend_rows,
            animation_ms: defaults.animation_ms,
        }
    }

    /// Столбчатая диаграмма одной метрики
    pub fn bar(metric: Metric, color: &str, defaults: &ChartDefaults) -> Self {
        Self::with_series(
            vec![SeriesSpec::new(metric, color, metric.key())],
            defaults.bar_padding,
            defaults,
        )
    }

    /// Кольцевая диаграмма одной метрики, цвета берутся из палитры
    pub fn pie(metric: Metric, defaults: &ChartDefaults) -> Self {
        Self::with_series(
            vec![SeriesSpec::new(metric, DEFAULT_PALETTE[0], metric.key())],
            0.0,
            defaults,
        )
    }

    /// Сгруппированные столбцы: по подполосе на серию
    pub fn comparison(series: Vec<SeriesSpec>, defaults: &ChartDefaults) -> Self {
        Self::with_series(series, defaults.comparison_padding, defaults)
    }

    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    pub fn with_palette(mut self, palette: &[&str]) -> Self {
        if !palette.is_empty() {
            self.palette = palette.iter().map(|c| c.to_string()).collect();
        }
        self
    }

    /// Основная (первая) серия
    pub fn primary(&self) -> Option<&SeriesSpec> {
        self.series.first()
    }

    /// Цвет i-й категории, палитра повторяется по кругу
    pub fn color_at(&self, index: usize) -> &str {
        if self.palette.is_empty() {
            DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()]
        } else {
            &self.palette[index % self.palette.len()]
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        format_value(self.format, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_formats() {
        assert_eq!(format_value(None, 1234.5), "1,234.5");
        assert_eq!(ValueFormat::Integer.format(1234.5), "1,235");
        assert_eq!(ValueFormat::Currency { symbol: "€" }.format(1500.0), "€1,500");
        assert_eq!(ValueFormat::Currency { symbol: "€" }.format(-2.5), "-€2.5");
        assert_eq!(ValueFormat::Money { symbol: "€" }.format(1500.0), "€1,500.00");
        assert_eq!(ValueFormat::Percent { decimals: 1 }.format(12.34), "12.3%");
    }

    #[test]
    fn test_palette_cycles() {
        let spec = ChartSpec::pie(Metric::Value, &ChartDefaults::default())
            .with_palette(&["#10b981", "#ef4444", "#f59e0b"]);
        assert_eq!(spec.color_at(0), "#10b981");
        assert_eq!(spec.color_at(4), "#ef4444");

        let spec = ChartSpec::pie(Metric::Value, &ChartDefaults::default()).with_palette(&[]);
        assert_eq!(spec.color_at(11), DEFAULT_PALETTE[1]);
    }
}
