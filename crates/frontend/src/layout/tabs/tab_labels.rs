//! Заголовки и иконки вкладок

use crate::layout::global_context::AppTab;

/// Ключ перевода заголовка вкладки
pub fn tab_label_key(tab: AppTab) -> &'static str {
    match tab {
        AppTab::Upload => "tab_upload",
        AppTab::Occupancy => "tab_occupancy",
        AppTab::Revenue => "tab_revenue",
    }
}

pub fn tab_icon(tab: AppTab) -> &'static str {
    match tab {
        AppTab::Upload => "📁",
        AppTab::Occupancy => "📊",
        AppTab::Revenue => "💰",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::translations::translate;
    use crate::shared::i18n::Language;

    #[test]
    fn test_every_tab_has_translation() {
        for tab in AppTab::all() {
            let key = tab_label_key(tab);
            assert_ne!(translate(Language::En, key), key);
            assert_ne!(translate(Language::Pt, key), key);
        }
    }
}
