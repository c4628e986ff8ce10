//! Таблица данных с сортировкой по колонкам
//!
//! # Пример
//!
//! ```rust,ignore
//! <DataTable
//!     rows=Signal::derive(move || nationality_rows.get())
//!     columns=Signal::derive(move || vec![
//!         ColumnSpec::category("Nationality"),
//!         ColumnSpec::metric(Metric::TotalNights, "Total Nights", ColumnKind::Number),
//!     ])
//! />
//! ```

use super::sortable_header_cell::SortableHeaderCell;
use super::table_model::{format_cell, is_total_row, sort_rows, ColumnSpec};
use crate::shared::charts::record::MetricRecord;
use crate::shared::i18n::use_i18n;
use leptos::prelude::*;
use thaw::*;

/// Таблица записей; строки итогов выделены и закреплены внизу
///
/// Пока колонка сортировки не выбрана, строки выводятся в порядке вызывающего.
#[component]
pub fn DataTable(
    #[prop(into)] rows: Signal<Vec<MetricRecord>>,
    #[prop(into)] columns: Signal<Vec<ColumnSpec>>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (sort_field, set_sort_field) = signal(String::new());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let toggle_sort = Callback::new(move |field: String| {
        if sort_field.get_untracked() == field {
            set_sort_ascending.update(|v| *v = !*v);
        } else {
            set_sort_field.set(field);
            set_sort_ascending.set(true);
        }
    });

    let sorted_rows = Memo::new(move |_| {
        let field = sort_field.get();
        let ascending = sort_ascending.get();
        rows.with(|rows| {
            columns.with(|columns| match columns.iter().find(|c| c.id() == field) {
                Some(column) => sort_rows(rows, column, ascending),
                None => rows.clone(),
            })
        })
    });

    view! {
        <Show
            when=move || rows.with(|r| !r.is_empty())
            fallback=move || {
                view! {
                    <div class="data-table__empty" style="text-align: center; padding: 32px 0; color: #6b7280;">
                        {move || i18n.t("no_data_available")}
                    </div>
                }
            }
        >
            <div class="data-table" style="overflow-x: auto;">
                <Table>
                    <TableHeader>
                        <TableRow>
                            {move || {
                                columns
                                    .get()
                                    .into_iter()
                                    .map(|column| {
                                        view! {
                                            <SortableHeaderCell
                                                label=column.label.clone()
                                                column_id=column.id()
                                                current_sort_field=sort_field
                                                sort_ascending=sort_ascending
                                                on_sort=toggle_sort
                                                numeric=column.kind.is_numeric()
                                            />
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let columns = columns.get();
                            sorted_rows
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let total = is_total_row(&row);
                                    let cells = columns
                                        .iter()
                                        .map(|column| {
                                            let class = if column.kind.is_numeric() {
                                                "table__cell--right"
                                            } else {
                                                "table__cell--left"
                                            };
                                            let text = format_cell(&column.value(&row), column.kind);
                                            view! { <TableCell class=class>{text}</TableCell> }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableRow
                                            class=if total { "table__totals-row" } else { "" }
                                            attr:style=if total {
                                                "background: #f3f4f6; font-weight: 600;"
                                            } else {
                                                ""
                                            }
                                        >
                                            {cells}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>
        </Show>
    }
}
