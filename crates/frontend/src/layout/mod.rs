pub mod center;
pub mod global_context;
pub mod header;
pub mod tabs;

use crate::layout::global_context::AppGlobalContext;
use center::Center;
use header::Header;
use leptos::prelude::*;
use tabs::TabBar;

/// Оболочка приложения
///
/// ```text
/// +------------------------------------------+
/// |  Header (заголовок, язык)                |
/// +------------------------------------------+
/// |  TabBar: Upload | Occupancy | Revenue    |
/// +------------------------------------------+
/// |  Center: активная вкладка                |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <TabBar tabs_store=tabs_store />
                <Center />
            </div>
        </div>
    }
}
