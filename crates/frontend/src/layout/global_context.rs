use crate::shared::api::{self, ApiError};
use crate::shared::config::ApiConfig;
use contracts::dashboards::d402_results::AnalyticsResults;
use contracts::usecases::u501_upload_files::{UploadFileType, UploadedFileInfo, UploadedFiles};
use contracts::usecases::u502_process_data::ProcessingStatus;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Вкладка приложения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppTab {
    #[default]
    Upload,
    Occupancy,
    Revenue,
}

impl AppTab {
    pub fn all() -> [AppTab; 3] {
        [AppTab::Upload, AppTab::Occupancy, AppTab::Revenue]
    }

    /// Значение параметра `?tab=` в адресной строке
    pub fn key(&self) -> &'static str {
        match self {
            AppTab::Upload => "upload",
            AppTab::Occupancy => "occupancy",
            AppTab::Revenue => "revenue",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        AppTab::all().into_iter().find(|tab| tab.key() == key)
    }

    /// Аналитические вкладки доступны только при наличии результатов
    pub fn is_enabled(&self, has_results: bool) -> bool {
        matches!(self, AppTab::Upload) || has_results
    }
}

/// Вкладка из строки запроса (`?tab=revenue`)
pub fn tab_from_query(search: &str) -> Option<AppTab> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("tab").and_then(|key| AppTab::from_key(key))
}

/// Состояние сессии анализа: файлы, обработка, результаты, активная вкладка
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppTab>,
    pub files: RwSignal<UploadedFiles>,
    pub processing: RwSignal<ProcessingStatus>,
    /// Ошибки последней обработки
    pub errors: RwSignal<Vec<String>>,
    pub results: RwSignal<Option<AnalyticsResults>>,
    /// Идёт запрос, блокирующий загрузку и обработку
    pub busy: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppTab::Upload),
            files: RwSignal::new(UploadedFiles::default()),
            processing: RwSignal::new(ProcessingStatus::NotStarted),
            errors: RwSignal::new(vec![]),
            results: RwSignal::new(None),
            busy: RwSignal::new(false),
        }
    }

    pub fn has_results(&self) -> bool {
        self.results.with(|r| r.is_some())
    }

    /// Переключает вкладку; недоступная вкладка игнорируется
    pub fn activate_tab(&self, tab: AppTab) {
        let has_results = self.results.with_untracked(|r| r.is_some());
        if tab.is_enabled(has_results) {
            log::debug!("activate_tab: {}", tab.key());
            self.active.set(tab);
        }
    }

    /// Новые входные данные делают прежние результаты недействительными
    fn invalidate_results(&self) {
        self.processing.set(ProcessingStatus::NotStarted);
        self.results.set(None);
        self.active.set(AppTab::Upload);
    }

    pub fn file_uploaded(&self, kind: UploadFileType, info: UploadedFileInfo) {
        log::info!("Uploaded {}: {} ({} rows)", kind.as_str(), info.filename, info.row_count);
        self.files.update(|files| files.set(kind, Some(info)));
        self.errors.set(vec![]);
        self.invalidate_results();
    }

    pub fn file_removed(&self, kind: UploadFileType) {
        self.files.update(|files| files.set(kind, None));
        self.invalidate_results();
    }

    pub fn files_cleared(&self) {
        self.files.set(UploadedFiles::default());
        self.errors.set(vec![]);
        self.invalidate_results();
    }

    pub fn processing_started(&self) {
        log::info!("Processing started");
        self.processing.set(ProcessingStatus::Processing);
        self.errors.set(vec![]);
    }

    pub fn processing_completed(&self, results: AnalyticsResults) {
        log::info!("Results loaded");
        self.processing.set(ProcessingStatus::Completed);
        self.errors.set(vec![]);
        self.results.set(Some(results));
    }

    pub fn processing_failed(&self, errors: Vec<String>) {
        log::error!("Processing failed: {:?}", errors);
        self.processing.set(ProcessingStatus::Failed);
        self.errors.set(errors);
    }

    /// Восстанавливает состояние с сервера при старте (файлы могли быть загружены ранее)
    pub async fn restore_from_backend(&self, config: &ApiConfig) -> Result<(), ApiError> {
        let status = api::get_upload_status(config).await?;
        self.files.set(status.files);

        let processing = api::get_processing_status(config).await?.status();
        self.processing.set(processing);

        if processing == ProcessingStatus::Completed {
            let results = api::get_results(config).await?;
            self.results.set(Some(results));
            log::info!("Results loaded");
        }
        Ok(())
    }

    /// Синхронизация активной вкладки с параметром `?tab=` адресной строки
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let requested = tab_from_query(&search);

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("tab".to_string(), active.key().to_string())]))
                    .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });

        // Аналитическая вкладка из URL открывается, как только появятся результаты
        if let Some(tab) = requested.filter(|tab| *tab != AppTab::Upload) {
            Effect::new(move |done: Option<bool>| {
                if done == Some(true) {
                    return true;
                }
                if this.has_results() {
                    this.activate_tab(tab);
                    return true;
                }
                false
            });
        }
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys() {
        for tab in AppTab::all() {
            assert_eq!(AppTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(AppTab::from_key("settings"), None);
    }

    #[test]
    fn test_analytics_tabs_need_results() {
        assert!(AppTab::Upload.is_enabled(false));
        assert!(!AppTab::Occupancy.is_enabled(false));
        assert!(!AppTab::Revenue.is_enabled(false));
        assert!(AppTab::Revenue.is_enabled(true));
    }

    #[test]
    fn test_tab_from_query() {
        assert_eq!(tab_from_query("?tab=revenue"), Some(AppTab::Revenue));
        assert_eq!(tab_from_query("tab=occupancy"), Some(AppTab::Occupancy));
        assert_eq!(tab_from_query("?tab=unknown"), None);
        assert_eq!(tab_from_query(""), None);
    }
}
