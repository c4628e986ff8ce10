//! Зона загрузки одного Excel-файла: drag & drop или выбор через диалог
//!
//! Компонент только принимает файл и показывает состояние; сама загрузка
//! выполняется владельцем через `on_file`.

use crate::shared::i18n::use_i18n;
use contracts::usecases::u501_upload_files::{is_accepted_file_name, UploadedFileInfo};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.get(0))
}

/// Строка описания загруженного файла: `120 rows • 8 columns`
pub fn file_summary(info: &UploadedFileInfo, rows: &str, columns: &str) -> String {
    format!("{} {} • {} {}", info.row_count, rows, info.columns.len(), columns)
}

#[component]
pub fn FileDropzone(
    #[prop(into)] label: Signal<String>,
    #[prop(optional)] required: bool,
    /// Уже загруженный файл
    #[prop(into)]
    current: Signal<Option<UploadedFileInfo>>,
    #[prop(into)] uploading: Signal<bool>,
    /// Ошибка последней загрузки
    #[prop(into)]
    error: Signal<Option<String>>,
    #[prop(into, optional)] disabled: Signal<bool>,
    on_file: Callback<web_sys::File>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();
    let (drag_active, set_drag_active) = signal(false);
    let (local_error, set_local_error) = signal(Option::<String>::None);
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let blocked = move || disabled.get() || uploading.get();

    let accept = move |file: web_sys::File| {
        if is_accepted_file_name(&file.name()) {
            set_local_error.set(None);
            on_file.run(file);
        } else {
            log::warn!("Rejected file {}", file.name());
            set_local_error.set(Some(i18n.t("invalid_file_type")));
        }
    };

    let handle_input_change = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(file) = first_file(input.files()) {
                accept(file);
            }
            // повторный выбор того же файла должен снова вызвать change
            input.set_value("");
        }
    };

    let handle_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if blocked() {
            return;
        }
        if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
            accept(file);
        }
    };

    let handle_drag_over = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if !blocked() {
            set_drag_active.set(true);
        }
    };

    let open_dialog = move |_: web_sys::MouseEvent| {
        if blocked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let zone_class = move || {
        let mut class = String::from("dropzone");
        if drag_active.get() {
            class.push_str(" dropzone--active");
        }
        if blocked() {
            class.push_str(" dropzone--disabled");
        }
        class
    };

    view! {
        <div class="dropzone-card">
            <div class="dropzone-card__header" style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;">
                <span class="dropzone-card__label" style="font-size: 14px; font-weight: 500;">
                    {move || label.get()}
                    {required.then(|| view! { <span style="color: #ef4444; margin-left: 4px;">"*"</span> })}
                </span>
                <Show when=move || current.with(|c| c.is_some())>
                    <button
                        class="dropzone-card__remove"
                        style="background: none; border: none; color: #ef4444; cursor: pointer; font-size: 13px;"
                        disabled=move || disabled.get()
                        on:click=move |_| on_remove.run(())
                    >
                        {move || i18n.t("remove")}
                    </button>
                </Show>
            </div>

            {move || match current.get() {
                Some(info) => {
                    let summary = file_summary(&info, &i18n.t("rows"), &i18n.t("columns"));
                    view! {
                        <div class="dropzone dropzone--done" style="border: 2px solid #bbf7d0; background: #f0fdf4; border-radius: 8px; padding: 16px; display: flex; gap: 12px; align-items: center;">
                            <span style="color: #22c55e; font-size: 22px;">"✓"</span>
                            <div style="min-width: 0;">
                                <div style="font-size: 14px; font-weight: 500; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                                    {info.filename.clone()}
                                </div>
                                <div style="font-size: 12px; color: #6b7280;">{summary}</div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div
                        class=zone_class
                        style="border: 2px dashed #d1d5db; border-radius: 8px; padding: 24px; text-align: center; cursor: pointer;"
                        on:click=open_dialog
                        on:dragover=handle_drag_over
                        on:dragleave=move |_| set_drag_active.set(false)
                        on:drop=handle_drop
                    >
                        <input
                            node_ref=input_ref
                            type="file"
                            accept=".xlsx,.xls"
                            class="hidden"
                            style="display: none;"
                            on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()
                            on:change=handle_input_change
                        />
                        <Show
                            when=move || uploading.get()
                            fallback=move || view! {
                                <span style="font-size: 28px; display: block; margin-bottom: 8px;">"📄"</span>
                                <p style="font-size: 14px; color: #4b5563; margin: 0;">
                                    {move || i18n.t(if drag_active.get() { "drop_here" } else { "drag_drop" })}
                                </p>
                                <p style="font-size: 12px; color: #9ca3af; margin: 4px 0 0;">
                                    {move || i18n.t("or_click_browse")}
                                </p>
                            }
                        >
                            <p style="font-size: 14px; color: #6b7280;">{move || i18n.t("uploading")}</p>
                        </Show>
                    </div>
                }
                .into_any(),
            }}

            {move || {
                local_error
                    .get()
                    .or_else(|| error.get())
                    .map(|e| view! {
                        <div class="warning-box warning-box--error" style="margin-top: 8px; font-size: 13px;">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                        </div>
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_summary() {
        let info = UploadedFileInfo {
            filename: "hospedes.xlsx".to_string(),
            columns: vec!["Nome".to_string(), "Pais".to_string(), "Noites".to_string()],
            row_count: 120,
        };
        assert_eq!(file_summary(&info, "rows", "columns"), "120 rows • 3 columns");
    }
}
