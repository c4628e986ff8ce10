//! Маппинг вкладка → View

use crate::dashboards::{OccupancyDashboard, RevenueDashboard};
use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::usecases::u501_upload_files::UploadFiles;
use leptos::prelude::*;

/// Контент вкладки; аналитика перестраивается при каждой замене результатов
pub fn render_tab_content(tab: AppTab, ctx: AppGlobalContext) -> AnyView {
    match tab {
        AppTab::Upload => view! { <UploadFiles /> }.into_any(),
        AppTab::Occupancy => (move || {
            ctx.results.get().map(|results| {
                view! { <OccupancyDashboard data=results.occupancy /> }
            })
        })
        .into_any(),
        AppTab::Revenue => (move || {
            ctx.results.get().map(|results| {
                view! { <RevenueDashboard data=results.revenue /> }
            })
        })
        .into_any(),
    }
}
