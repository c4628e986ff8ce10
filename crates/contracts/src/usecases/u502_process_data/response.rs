use crate::dashboards::d402_results::ProcessingSummary;
use crate::shared::lenient::vec_or_empty;
use serde::{Deserialize, Serialize};

/// Lifecycle of a processing run as seen by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProcessingStatus {
    #[default]
    NotStarted,
    Processing,
    Completed,
    Failed,
}

impl ProcessingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessingStatus::NotStarted => "not_started",
            ProcessingStatus::Processing => "processing",
            ProcessingStatus::Completed => "completed",
            ProcessingStatus::Failed => "failed",
        }
    }

    /// Unknown values are treated as "not started"
    pub fn from_str(s: &str) -> Self {
        match s {
            "processing" => ProcessingStatus::Processing,
            "completed" => ProcessingStatus::Completed,
            "failed" => ProcessingStatus::Failed,
            _ => ProcessingStatus::NotStarted,
        }
    }
}

/// Response of `GET /process/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessStatusResponse {
    #[serde(default)]
    pub status: String,
}

impl ProcessStatusResponse {
    pub fn status(&self) -> ProcessingStatus {
        ProcessingStatus::from_str(&self.status)
    }
}

/// Response of `POST /process`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "vec_or_empty")]
    pub errors: Vec<String>,
    #[serde(default)]
    pub summary: Option<ProcessingSummary>,
}

impl ProcessResponse {
    /// All error lines reported by the backend, never empty on failure
    pub fn error_lines(&self) -> Vec<String> {
        let mut lines = self.errors.clone();
        if let Some(error) = &self.error {
            lines.push(error.clone());
        }
        if lines.is_empty() && !self.success {
            lines.push("Processing failed".to_string());
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_names() {
        for status in [
            ProcessingStatus::NotStarted,
            ProcessingStatus::Processing,
            ProcessingStatus::Completed,
            ProcessingStatus::Failed,
        ] {
            assert_eq!(ProcessingStatus::from_str(status.as_str()), status);
        }
        assert_eq!(ProcessingStatus::from_str("queued"), ProcessingStatus::NotStarted);
    }

    #[test]
    fn test_error_lines() {
        let failed: ProcessResponse =
            serde_json::from_str(r#"{"success": false, "errors": ["Missing column: Pais"]}"#)
                .unwrap();
        assert_eq!(failed.error_lines(), vec!["Missing column: Pais".to_string()]);

        let bare: ProcessResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(bare.error_lines(), vec!["Processing failed".to_string()]);

        let ok: ProcessResponse = serde_json::from_str(
            r#"{"success": true, "message": "Processing completed successfully", "errors": null}"#,
        )
        .unwrap();
        assert!(ok.error_lines().is_empty());
    }
}
