//! Заголовок колонки DataTable с переключением сортировки

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

/// Значение `aria-sort` для колонки
pub fn aria_sort(active: bool, ascending: bool) -> &'static str {
    match (active, ascending) {
        (false, _) => "none",
        (true, true) => "ascending",
        (true, false) => "descending",
    }
}

/// Ячейка заголовка: клик или Enter по ней передаёт `column_id` в `on_sort`
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: Signal<String>,
    column_id: &'static str,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<String>,
    #[prop(optional)] numeric: bool,
) -> impl IntoView {
    let active = Memo::new(move |_| current_sort_field.with(|f| f == column_id));
    let request_sort = move || on_sort.run(column_id.to_string());

    let justify = if numeric { "flex-end" } else { "flex-start" };

    view! {
        <TableHeaderCell attr:aria-sort=move || aria_sort(active.get(), sort_ascending.get())>
            <div
                class="table__sortable-header"
                role="button"
                tabindex="0"
                style=format!("cursor: pointer; display: flex; justify-content: {}; gap: 4px;", justify)
                on:click=move |_| request_sort()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        request_sort();
                    }
                }
            >
                {move || label.get()}
                <span class=move || current_sort_field.with(|f| get_sort_class(f, column_id))>
                    {move || current_sort_field.with(|f| get_sort_indicator(f, column_id, sort_ascending.get()))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
