//! Утилиты форматирования чисел для таблиц и подписей графиков
//!
//! Разделитель тысяч: запятая, десятичный разделитель: точка (en-US),
//! как в отчётах, которые выгружает бэкенд.

/// Символ валюты по умолчанию
pub const CURRENCY_SYMBOL: &str = "€";

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let formatted = format!("{:.prec$}", value, prec = decimals.min(6) as usize);
    let formatted = strip_negative_zero(formatted);

    // Разделяем целую и дробную части
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (formatted.as_str(), None),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// `-0.00` → `0.00`: отрицательный ноль после округления не показываем
fn strip_negative_zero(formatted: String) -> String {
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// Денежное значение: 2 знака после запятой и разделитель тысяч
///
/// ```
/// use frontend::shared::components::table::format_money;
/// assert_eq!(format_money(1234567.891), "1,234,567.89");
/// ```
pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Целое число с разделителем тысяч
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Форматирование "по локали": до 3 знаков после запятой, хвостовые нули отбрасываются
pub fn format_locale(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 3);
    match formatted.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                int.to_string()
            } else {
                format!("{}.{}", int, frac)
            }
        }
        None => formatted,
    }
}

/// Валюта с префиксом символа: `€1,234.50`, `-€12.00`
pub fn format_currency(value: f64, symbol: &str) -> String {
    let formatted = format_money(value);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-{}{}", symbol, abs),
        None => format!("{}{}", symbol, formatted),
    }
}

/// Доля → проценты: `0.1234` → `12.3%`
pub fn format_percent(fraction: f64, decimals: u8) -> String {
    format!("{}%", format_number_with_decimals(fraction * 100.0, decimals))
}
