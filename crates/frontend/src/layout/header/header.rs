use crate::shared::i18n::{use_i18n, LanguageToggle};
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__logo">"🏨"</span>
                <div>
                    <span class="header__title">{move || i18n.t("app_title")}</span>
                    <span class="header__subtitle">{move || i18n.t("app_subtitle")}</span>
                </div>
            </div>
            <div class="header__actions">
                <LanguageToggle />
                <span class="header__version">{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
            </div>
        </header>
    }
}
