//! TabPage: контент активной вкладки
//!
//! Неактивные вкладки не монтируются: графики измеряют ширину контейнера
//! при монтировании, а у скрытого контейнера она нулевая.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, AppTab};
use leptos::prelude::*;

#[component]
pub fn TabPage(tab: AppTab, tabs_store: AppGlobalContext) -> impl IntoView {
    let is_active = move || tabs_store.active.get() == tab;

    view! {
        <Show when=is_active>
            <div class="tabs__item" data-tab-key=tab.key()>
                {render_tab_content(tab, tabs_store)}
            </div>
        </Show>
    }
}
