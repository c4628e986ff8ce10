use super::processing::{ErrorDisplay, ProcessingSection};
use super::results_summary::ResultsSummary;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::api;
use crate::shared::components::{CardAnimated, FileDropzone};
use crate::shared::config::use_config;
use crate::shared::i18n::use_i18n;
use contracts::usecases::u501_upload_files::UploadFileType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::{HashMap, HashSet};
use thaw::*;

fn dropzone_label_key(kind: UploadFileType) -> &'static str {
    match kind {
        UploadFileType::Guests => "guests_list",
        UploadFileType::Reservations => "reservations",
        UploadFileType::Invoices => "invoices_optional",
    }
}

/// Вкладка загрузки: три файла, запуск обработки, сводка результатов
#[component]
pub fn UploadFiles() -> impl IntoView {
    let i18n = use_i18n();
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();
    let api_config = StoredValue::new(use_config().api);

    let uploading = RwSignal::new(HashSet::<UploadFileType>::new());
    let upload_errors = RwSignal::new(HashMap::<UploadFileType, String>::new());

    let upload = move |kind: UploadFileType, file: web_sys::File| {
        uploading.update(|set| {
            set.insert(kind);
        });
        upload_errors.update(|errors| {
            errors.remove(&kind);
        });
        let config = api_config.get_value();
        spawn_local(async move {
            match api::upload_file(&config, kind, file).await {
                Ok(info) => ctx.file_uploaded(kind, info),
                Err(e) => {
                    log::error!("Upload of {} failed: {}", kind.as_str(), e);
                    upload_errors.update(|errors| {
                        errors.insert(kind, e.to_string());
                    });
                }
            }
            uploading.update(|set| {
                set.remove(&kind);
            });
        });
    };

    let remove = move |kind: UploadFileType| {
        let config = api_config.get_value();
        spawn_local(async move {
            match api::delete_file(&config, kind).await {
                Ok(()) => ctx.file_removed(kind),
                Err(e) => log::error!("Failed to delete file: {}", e),
            }
        });
    };

    let clear_all = move |_: leptos::ev::MouseEvent| {
        let config = api_config.get_value();
        spawn_local(async move {
            match api::clear_all_files(&config).await {
                Ok(()) => {
                    upload_errors.set(HashMap::new());
                    ctx.files_cleared();
                }
                Err(e) => log::error!("Failed to clear files: {}", e),
            }
        });
    };

    let process = Callback::new(move |_: ()| {
        if ctx.busy.get_untracked() {
            return;
        }
        ctx.busy.set(true);
        ctx.processing_started();
        let config = api_config.get_value();
        spawn_local(async move {
            match api::run_processing(&config).await {
                Ok(response) if response.success => match api::get_results(&config).await {
                    Ok(results) => ctx.processing_completed(results),
                    Err(e) => ctx.processing_failed(vec![e.to_string()]),
                },
                Ok(response) => ctx.processing_failed(response.error_lines()),
                Err(e) => ctx.processing_failed(vec![e.to_string()]),
            }
            ctx.busy.set(false);
        });
    });

    let dropzone = move |kind: UploadFileType| {
        view! {
            <FileDropzone
                label=Signal::derive(move || i18n.t(dropzone_label_key(kind)))
                required=kind.is_required()
                current=Signal::derive(move || ctx.files.with(|files| files.get(kind).cloned()))
                uploading=Signal::derive(move || uploading.with(|set| set.contains(&kind)))
                error=Signal::derive(move || upload_errors.with(|errors| errors.get(&kind).cloned()))
                disabled=Signal::derive(move || ctx.busy.get())
                on_file=Callback::new(move |file: web_sys::File| upload(kind, file))
                on_remove=Callback::new(move |_: ()| remove(kind))
            />
        }
    };

    view! {
        <div class="upload" style="display: flex; flex-direction: column; gap: 24px;">
            <ErrorDisplay errors=ctx.errors />

            <CardAnimated
                title=Signal::derive(move || format!("📁 {}", i18n.t("upload_title")))
                actions=ChildrenFn::to_children(move || view! {
                    <Show when=move || ctx.files.with(|files| files.has_any())>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || ctx.busy.get())
                            on_click=clear_all
                        >
                            {move || i18n.t("clear_all")}
                        </Button>
                    </Show>
                })
            >
                <div class="upload__dropzones" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 16px;">
                    {UploadFileType::all().into_iter().map(dropzone).collect_view()}
                </div>
                <p style="font-size: 12px; color: #6b7280; margin-top: 16px;">
                    {move || i18n.t("required_files")}
                </p>
            </CardAnimated>

            <CardAnimated title=Signal::derive(move || format!("⚙️ {}", i18n.t("process_data"))) delay_ms=80>
                <ProcessingSection
                    status=ctx.processing
                    can_process=Signal::derive(move || ctx.files.with(|files| files.ready_to_process()))
                    busy=ctx.busy
                    on_process=process
                />
            </CardAnimated>

            {move || {
                ctx.results
                    .get()
                    .map(|results| view! { <ResultsSummary results=results api=api_config.get_value() /> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::i18n::translations::translate;
    use crate::shared::i18n::Language;

    #[test]
    fn test_dropzone_labels_translated() {
        for kind in UploadFileType::all() {
            let key = dropzone_label_key(kind);
            assert_ne!(translate(Language::En, key), key);
        }
        assert_eq!(translate(Language::En, dropzone_label_key(UploadFileType::Invoices)), "Invoices (Optional)");
    }
}
