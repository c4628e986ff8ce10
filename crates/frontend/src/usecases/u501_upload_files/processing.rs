use crate::shared::i18n::use_i18n;
use contracts::usecases::u502_process_data::ProcessingStatus;
use leptos::prelude::*;
use thaw::*;

/// Строка состояния обработки: (ключ перевода, модификатор CSS)
pub fn status_line(status: ProcessingStatus, can_process: bool) -> (&'static str, &'static str) {
    match status {
        ProcessingStatus::Completed => ("processing_completed", "processing__status--ok"),
        ProcessingStatus::Failed => ("processing_failed", "processing__status--error"),
        ProcessingStatus::Processing => ("status_processing", "processing__status--busy"),
        ProcessingStatus::NotStarted if can_process => ("ready_hint", "processing__status--ready"),
        ProcessingStatus::NotStarted => ("upload_required", "processing__status--idle"),
    }
}

fn status_icon(status: ProcessingStatus) -> &'static str {
    match status {
        ProcessingStatus::Completed => "✓ ",
        ProcessingStatus::Failed => "✗ ",
        _ => "",
    }
}

/// Запуск обработки и её состояние
#[component]
pub fn ProcessingSection(
    #[prop(into)] status: Signal<ProcessingStatus>,
    #[prop(into)] can_process: Signal<bool>,
    #[prop(into)] busy: Signal<bool>,
    on_process: Callback<()>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="processing" style="display: flex; justify-content: space-between; align-items: center; gap: 16px;">
            <div class="processing__status">
                {move || {
                    let status = status.get();
                    let (key, modifier) = status_line(status, can_process.get());
                    view! {
                        <span class=format!("processing__status-text {}", modifier)>
                            {status_icon(status)}
                            {i18n.t(key)}
                        </span>
                    }
                }}
            </div>
            <Button
                appearance=ButtonAppearance::Primary
                size=ButtonSize::Large
                disabled=Signal::derive(move || !can_process.get() || busy.get())
                on_click=move |_| on_process.run(())
            >
                {move || {
                    if busy.get() && status.get() == ProcessingStatus::Processing {
                        i18n.t("processing")
                    } else {
                        i18n.t("start_processing")
                    }
                }}
            </Button>
        </div>
    }
}

/// Список ошибок обработки
#[component]
pub fn ErrorDisplay(#[prop(into)] errors: Signal<Vec<String>>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Show when=move || errors.with(|e| !e.is_empty())>
            <div class="warning-box warning-box--error" style="display: flex; gap: 12px; padding: 16px; border-radius: 12px;">
                <span class="warning-box__icon">"⚠️"</span>
                <div>
                    <div class="warning-box__title" style="font-weight: 500;">{move || i18n.t("processing_error")}</div>
                    <ul class="warning-box__list" style="margin: 8px 0 0; padding-left: 18px;">
                        {move || errors.get().into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        assert_eq!(status_line(ProcessingStatus::NotStarted, false).0, "upload_required");
        assert_eq!(status_line(ProcessingStatus::NotStarted, true).0, "ready_hint");
        assert_eq!(status_line(ProcessingStatus::Processing, true).0, "status_processing");
        assert_eq!(status_line(ProcessingStatus::Completed, true).0, "processing_completed");
        assert_eq!(status_line(ProcessingStatus::Failed, false).0, "processing_failed");
    }
}
