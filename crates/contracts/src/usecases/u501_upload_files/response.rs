use super::request::UploadFileType;
use crate::shared::lenient::u64_or_zero;
use serde::{Deserialize, Serialize};

/// Response of `POST /upload/{kind}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub row_count: u64,
    #[serde(default)]
    pub error: Option<String>,
    /// `"file_swap"` when guests and reservations files were swapped
    #[serde(default)]
    pub error_type: Option<String>,
}

impl UploadResponse {
    /// File description on success, the backend message otherwise
    pub fn into_file_info(self) -> Result<UploadedFileInfo, String> {
        if self.success {
            Ok(UploadedFileInfo {
                filename: self.filename,
                columns: self.columns,
                row_count: self.row_count,
            })
        } else {
            Err(self.error.unwrap_or_else(|| "Upload failed".to_string()))
        }
    }
}

/// What the dashboard remembers about an uploaded sheet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedFileInfo {
    pub filename: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default, deserialize_with = "u64_or_zero")]
    pub row_count: u64,
}

/// Slots for the three uploadable sheets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedFiles {
    #[serde(default)]
    pub guests: Option<UploadedFileInfo>,
    #[serde(default)]
    pub reservations: Option<UploadedFileInfo>,
    #[serde(default)]
    pub invoices: Option<UploadedFileInfo>,
}

impl UploadedFiles {
    pub fn get(&self, kind: UploadFileType) -> Option<&UploadedFileInfo> {
        match kind {
            UploadFileType::Guests => self.guests.as_ref(),
            UploadFileType::Reservations => self.reservations.as_ref(),
            UploadFileType::Invoices => self.invoices.as_ref(),
        }
    }

    pub fn set(&mut self, kind: UploadFileType, info: Option<UploadedFileInfo>) {
        match kind {
            UploadFileType::Guests => self.guests = info,
            UploadFileType::Reservations => self.reservations = info,
            UploadFileType::Invoices => self.invoices = info,
        }
    }

    pub fn has_any(&self) -> bool {
        UploadFileType::all().iter().any(|kind| self.get(*kind).is_some())
    }

    /// Every required sheet is present
    pub fn ready_to_process(&self) -> bool {
        UploadFileType::all()
            .iter()
            .filter(|kind| kind.is_required())
            .all(|kind| self.get(*kind).is_some())
    }
}

/// Response of `GET /upload/status`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadStatusResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub files: UploadedFiles,
    #[serde(default)]
    pub ready_to_process: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> UploadedFileInfo {
        UploadedFileInfo {
            filename: name.to_string(),
            columns: vec!["Nome".to_string(), "Pais".to_string()],
            row_count: 10,
        }
    }

    #[test]
    fn test_ready_to_process_requires_guests_and_reservations() {
        let mut files = UploadedFiles::default();
        assert!(!files.has_any());
        assert!(!files.ready_to_process());

        files.set(UploadFileType::Invoices, Some(info("faturas.xlsx")));
        assert!(files.has_any());
        assert!(!files.ready_to_process());

        files.set(UploadFileType::Guests, Some(info("guests.xlsx")));
        assert!(!files.ready_to_process());

        files.set(UploadFileType::Reservations, Some(info("reservas.xlsx")));
        assert!(files.ready_to_process());

        files.set(UploadFileType::Guests, None);
        assert!(!files.ready_to_process());
    }

    #[test]
    fn test_upload_response_into_file_info() {
        let ok: UploadResponse = serde_json::from_str(
            r#"{"success": true, "filename": "g.xlsx", "columns": ["Nome"], "row_count": 5, "preview": []}"#,
        )
        .unwrap();
        assert_eq!(
            ok.into_file_info(),
            Ok(UploadedFileInfo {
                filename: "g.xlsx".to_string(),
                columns: vec!["Nome".to_string()],
                row_count: 5,
            })
        );

        let swapped: UploadResponse = serde_json::from_str(
            r#"{"success": false, "error": "FILE_SWAP_GUESTS_HAS_RESERVATIONS", "error_type": "file_swap"}"#,
        )
        .unwrap();
        assert_eq!(swapped.error_type.as_deref(), Some("file_swap"));
        assert_eq!(
            swapped.into_file_info(),
            Err("FILE_SWAP_GUESTS_HAS_RESERVATIONS".to_string())
        );
    }

    #[test]
    fn test_parse_upload_status() {
        let status: UploadStatusResponse = serde_json::from_str(
            r#"{"success": true, "files": {"guests": {"filename": "g.xlsx", "columns": [], "row_count": 3}, "reservations": null, "invoices": null}, "ready_to_process": false}"#,
        )
        .unwrap();
        assert_eq!(status.files.guests.unwrap().row_count, 3);
        assert!(status.files.reservations.is_none());
        assert!(!status.ready_to_process);
    }
}
