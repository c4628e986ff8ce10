use super::tab_labels::{tab_icon, tab_label_key};
use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;

/// Навигация по вкладкам; недоступные вкладки показывают подсказку
#[component]
pub fn TabBar(tabs_store: AppGlobalContext) -> impl IntoView {
    let i18n = use_i18n();

    let tab_button = move |tab: AppTab| {
        let enabled = move || tab.is_enabled(tabs_store.has_results());
        let class = move || {
            if tabs_store.active.get() == tab {
                "tabs__button tabs__button--active"
            } else if !enabled() {
                "tabs__button tabs__button--disabled"
            } else {
                "tabs__button"
            }
        };
        view! {
            <button
                class=class
                disabled=move || !enabled()
                on:click=move |_| tabs_store.activate_tab(tab)
            >
                <span class="tabs__icon">{tab_icon(tab)}</span>
                {move || i18n.t(tab_label_key(tab))}
                <Show when=move || !enabled()>
                    <span class="tabs__hint">{move || format!("({})", i18n.t("process_data_first"))}</span>
                </Show>
            </button>
        }
    };

    view! {
        <nav class="tabs__bar">
            {AppTab::all().into_iter().map(tab_button).collect_view()}
        </nav>
    }
}
