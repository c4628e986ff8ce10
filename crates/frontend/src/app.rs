use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::charts::{TooltipController, TooltipHost};
use crate::shared::config::load_config_or_default;
use crate::shared::i18n::provide_i18n;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config_or_default();
    provide_context(config.clone());

    provide_i18n();

    // Единственная всплывающая подсказка на всё приложение
    provide_context(TooltipController::new());

    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    ctx.init_router_integration();

    // Файлы и результаты могли остаться на сервере с прошлой сессии
    spawn_local(async move {
        if let Err(e) = ctx.restore_from_backend(&config.api).await {
            log::error!("Failed to fetch status: {}", e);
        }
    });

    view! {
        <Shell />
        <TooltipHost />
    }
}
