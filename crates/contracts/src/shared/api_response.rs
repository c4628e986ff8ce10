use serde::{Deserialize, Serialize};

/// Standard `{ success, data, error }` wrapper used by the results endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning `success: false` or an empty body into the
    /// backend's error message.
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(self
                .error
                .unwrap_or_else(|| "Empty response from server".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let env: ApiEnvelope<Vec<u32>> =
            serde_json::from_str(r#"{"success": true, "data": [1, 2]}"#).unwrap();
        assert_eq!(env.into_result(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_envelope_error() {
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(
            r#"{"success": false, "error": "No results available. Please run processing first."}"#,
        )
        .unwrap();
        assert_eq!(
            env.into_result(),
            Err("No results available. Please run processing first.".to_string())
        );
    }

    #[test]
    fn test_envelope_without_data() {
        let env: ApiEnvelope<Vec<u32>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(env.into_result().is_err());
    }
}
