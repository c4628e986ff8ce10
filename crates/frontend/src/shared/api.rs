//! HTTP-клиент бэкенда обработки: загрузка файлов, запуск обработки, результаты

use crate::shared::api_utils::api_url;
use crate::shared::config::ApiConfig;
use contracts::dashboards::d402_results::AnalyticsResults;
use contracts::shared::ApiEnvelope;
use contracts::usecases::u501_upload_files::{
    UploadFileType, UploadResponse, UploadStatusResponse, UploadedFileInfo,
};
use contracts::usecases::u502_process_data::{ProcessResponse, ProcessStatusResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    /// Сообщение об ошибке из тела ответа бэкенда
    #[error("{0}")]
    Backend(String),
}

/// Отчёт для скачивания `GET /download/{kind}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Occupancy,
    Revenue,
    All,
}

impl ReportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Occupancy => "occupancy",
            ReportKind::Revenue => "revenue",
            ReportKind::All => "all",
        }
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Разбор JSON-ответа
///
/// Бэкенд кладёт `{success: false, error}` и в ответы 4xx/5xx, поэтому тело
/// разбирается при любом статусе; `Http` возвращается, только если тело не JSON.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await.map_err(network)?;
    match serde_json::from_str::<T>(&text) {
        Ok(value) => Ok(value),
        Err(_) if !(200..300).contains(&status) => Err(ApiError::Http {
            status,
            message: if text.trim().is_empty() {
                response_status_text(status)
            } else {
                text
            },
        }),
        Err(e) => Err(ApiError::Parse(e.to_string())),
    }
}

fn response_status_text(status: u16) -> String {
    match status {
        400 => "Bad Request".to_string(),
        404 => "Not Found".to_string(),
        500 => "Internal Server Error".to_string(),
        _ => format!("Status {}", status),
    }
}

/// `POST /upload/{kind}` с multipart-полем `file`
pub async fn upload_file(
    config: &ApiConfig,
    kind: UploadFileType,
    file: web_sys::File,
) -> Result<UploadedFileInfo, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network("FormData".to_string()))?;
    form.append_with_blob_and_filename("file", &file, &file.name())
        .map_err(|_| ApiError::Network("FormData append".to_string()))?;

    let url = api_url(config, &format!("/upload/{}", kind.as_str()));
    let response = Request::post(&url)
        .body(form)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    let body: UploadResponse = read_json(response).await?;
    body.into_file_info().map_err(ApiError::Backend)
}

/// `GET /upload/status`
pub async fn get_upload_status(config: &ApiConfig) -> Result<UploadStatusResponse, ApiError> {
    let response = Request::get(&api_url(config, "/upload/status"))
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

/// `DELETE /upload/{kind}`
pub async fn delete_file(config: &ApiConfig, kind: UploadFileType) -> Result<(), ApiError> {
    let url = api_url(config, &format!("/upload/{}", kind.as_str()));
    let response = Request::delete(&url).send().await.map_err(network)?;
    ensure_success(response).await
}

/// `DELETE /upload/clear`
pub async fn clear_all_files(config: &ApiConfig) -> Result<(), ApiError> {
    let response = Request::delete(&api_url(config, "/upload/clear"))
        .send()
        .await
        .map_err(network)?;
    ensure_success(response).await
}

async fn ensure_success(response: Response) -> Result<(), ApiError> {
    let body: ApiEnvelope<serde_json::Value> = read_json(response).await?;
    if body.success {
        Ok(())
    } else {
        Err(ApiError::Backend(
            body.error.unwrap_or_else(|| "Request failed".to_string()),
        ))
    }
}

/// `POST /process`; ошибки обработки возвращаются в теле, не как `Err`
pub async fn run_processing(config: &ApiConfig) -> Result<ProcessResponse, ApiError> {
    let response = Request::post(&api_url(config, "/process"))
        .json(&serde_json::json!({}))
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

/// `GET /process/status`
pub async fn get_processing_status(config: &ApiConfig) -> Result<ProcessStatusResponse, ApiError> {
    let response = Request::get(&api_url(config, "/process/status"))
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

/// `GET /results`
pub async fn get_results(config: &ApiConfig) -> Result<AnalyticsResults, ApiError> {
    let response = Request::get(&api_url(config, "/results"))
        .send()
        .await
        .map_err(network)?;
    let envelope: ApiEnvelope<AnalyticsResults> = read_json(response).await?;
    envelope.into_result().map_err(ApiError::Backend)
}

/// URL отчёта для скачивания
pub fn download_url(config: &ApiConfig, kind: ReportKind) -> String {
    api_url(config, &format!("/download/{}", kind.as_str()))
}

/// Открывает отчёт в новой вкладке; браузер сам сохраняет Excel-файл
pub fn open_download(config: &ApiConfig, kind: ReportKind) {
    let url = download_url(config, kind);
    let Some(window) = web_sys::window() else {
        log::error!("No window to open {}", url);
        return;
    };
    if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
        log::error!("Failed to open {}: {:?}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_kind_paths() {
        assert_eq!(ReportKind::Occupancy.as_str(), "occupancy");
        assert_eq!(ReportKind::Revenue.as_str(), "revenue");
        assert_eq!(ReportKind::All.as_str(), "all");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
        assert_eq!(
            ApiError::Backend("Missing column: Pais".to_string()).to_string(),
            "Missing column: Pais"
        );
    }
}
