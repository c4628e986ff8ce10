use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::layout::tabs::TabPage;
use leptos::prelude::*;

/// Область контента: страница каждой вкладки, видима только активная
#[component]
pub fn Center() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <main data-zone="center" class="app-tabs">
            {AppTab::all()
                .into_iter()
                .map(|tab| view! { <TabPage tab=tab tabs_store=tabs_store /> })
                .collect_view()}
        </main>
    }
}
