//! Панель дашборда: Thaw Card с заголовком и анимацией появления `card-appear`
//!
//! ```rust,ignore
//! <CardAnimated title=Signal::derive(move || i18n.t("nights_by_property")) delay_ms=80>
//!     <BarChart records=nights spec=spec />
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

fn card_style(delay_ms: u32, style: &str) -> String {
    let animation = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    if style.is_empty() {
        animation
    } else {
        format!("{} {}", animation, style)
    }
}

#[component]
pub fn CardAnimated(
    /// Заголовок панели; пустой не выводится
    #[prop(optional, into)]
    title: Signal<String>,
    /// Задержка анимации, мс (каскад карточек)
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    style: String,
    /// Элементы справа от заголовка (кнопки экспорта и т.п.)
    #[prop(optional)]
    actions: Option<ChildrenFn>,
    children: Children,
) -> impl IntoView {
    let has_actions = actions.is_some();
    view! {
        <Card attr:style=card_style(delay_ms, &style)>
            <Show when=move || has_actions || title.with(|t| !t.is_empty())>
                <div class="card__header" style="display: flex; align-items: center; justify-content: space-between; gap: 8px;">
                    <h3 class="card__title" style="margin: 0; font-size: 16px;">{move || title.get()}</h3>
                    {actions.clone().map(|a| a())}
                </div>
            </Show>
            {children()}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_style() {
        assert_eq!(card_style(0, ""), "animation: card-appear 0.28s ease-out 0ms both;");
        assert_eq!(
            card_style(80, "max-width: 400px;"),
            "animation: card-appear 0.28s ease-out 80ms both; max-width: 400px;"
        );
    }
}
