use serde::{Deserialize, Serialize};

/// Kind of spreadsheet accepted by `POST /upload/{kind}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadFileType {
    Guests,
    Reservations,
    Invoices,
}

impl UploadFileType {
    /// Path segment used by the upload endpoints
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFileType::Guests => "guests",
            UploadFileType::Reservations => "reservations",
            UploadFileType::Invoices => "invoices",
        }
    }

    /// Processing refuses to start without guests and reservations
    pub fn is_required(&self) -> bool {
        !matches!(self, UploadFileType::Invoices)
    }

    pub fn all() -> [UploadFileType; 3] {
        [
            UploadFileType::Guests,
            UploadFileType::Reservations,
            UploadFileType::Invoices,
        ]
    }
}

/// Extensions the backend can read
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Client-side pre-check mirroring the backend's extension whitelist
pub fn is_accepted_file_name(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_files() {
        assert!(UploadFileType::Guests.is_required());
        assert!(UploadFileType::Reservations.is_required());
        assert!(!UploadFileType::Invoices.is_required());
    }

    #[test]
    fn test_accepted_file_names() {
        assert!(is_accepted_file_name("guests.xlsx"));
        assert!(is_accepted_file_name("RESERVAS.XLS"));
        assert!(!is_accepted_file_name("report.csv"));
        assert!(!is_accepted_file_name("xlsx"));
    }
}
