//! Карточка ключевого показателя дашборда
//!
//! ```rust,ignore
//! <StatCard
//!     label=Signal::derive(move || i18n.t("total_nights"))
//!     icon="🌙"
//!     value=Signal::derive(move || Some(totals.get().total_nights))
//!     format=ValueFormat::Integer
//! />
//! ```

use crate::shared::charts::spec::ValueFormat;
use leptos::prelude::*;

/// Акцент карточки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatTone {
    #[default]
    Neutral,
    Success,
    Error,
    Warning,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Neutral => "stat-card",
            StatTone::Success => "stat-card stat-card--success",
            StatTone::Error => "stat-card stat-card--error",
            StatTone::Warning => "stat-card stat-card--warning",
        }
    }
}

/// Текст значения; `None` пока данных нет
pub fn stat_text(value: Option<f64>, format: ValueFormat) -> String {
    match value {
        Some(v) => format.format(v),
        None => "-".to_string(),
    }
}

#[component]
pub fn StatCard(
    /// Подпись над значением
    #[prop(into)]
    label: Signal<String>,
    /// Эмодзи-иконка
    icon: &'static str,
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    #[prop(optional)]
    tone: StatTone,
    /// Строка под значением (например, число счетов)
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class=tone.class()>
            <div class="stat-card__icon">{icon}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{move || label.get()}</div>
                <div class="stat-card__value">{move || stat_text(value.get(), format)}</div>
                {move || {
                    subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_text() {
        assert_eq!(stat_text(Some(1234.0), ValueFormat::Integer), "1,234");
        assert_eq!(stat_text(Some(99.5), ValueFormat::Money { symbol: "€" }), "€99.50");
        assert_eq!(stat_text(None, ValueFormat::Integer), "-");
    }
}
