//! Выбор текущего объекта размещения для фильтра дашборда

use crate::shared::charts::scene::truncate_label;
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use thaw::*;

/// Подписи кнопок длиннее 20 символов сокращаются до 17 + `...`
pub fn property_button_label(property: &str) -> String {
    truncate_label(property, 20, 17)
}

/// "Все объекты" + кнопка на каждый объект; `None` означает все объекты
#[component]
pub fn PropertySelector(
    #[prop(into)] properties: Signal<Vec<String>>,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let i18n = use_i18n();

    let appearance_for = move |value: Option<String>| {
        Signal::derive(move || {
            if selected.get() == value {
                ButtonAppearance::Primary
            } else {
                ButtonAppearance::Secondary
            }
        })
    };

    view! {
        <div class="property-selector" style="display: flex; flex-wrap: wrap; align-items: center; gap: 8px;">
            <span class="property-selector__label" style="font-weight: 500; color: #374151;">
                {move || i18n.t("select_property")}
            </span>
            <Button
                size=ButtonSize::Small
                appearance=appearance_for(None)
                on_click=move |_| selected.set(None)
            >
                {move || i18n.t("all_properties")}
            </Button>
            <For
                each=move || properties.get()
                key=|property| property.clone()
                children=move |property| {
                    let value = Some(property.clone());
                    let title = property.clone();
                    let label = property_button_label(&property);
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=appearance_for(value.clone())
                            attr:title=title
                            on_click=move |_| selected.set(value.clone())
                        >
                            {label}
                        </Button>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_button_label() {
        assert_eq!(property_button_label("Angra"), "Angra");
        assert_eq!(property_button_label("12345678901234567890"), "12345678901234567890");
        assert_eq!(
            property_button_label("Casa do Largo da Sé - Angra"),
            "Casa do Largo da ..."
        );
    }
}
