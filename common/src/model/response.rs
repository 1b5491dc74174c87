use serde::Deserialize;

/// Outcome body of the mutating endpoints.
///
/// The backend answers `{success, message?, serial_number?, id?}` on success and
/// `{detail}` on errors, so `success` defaults to `false` when absent: an error body is a
/// completed request that failed, not a malformed one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServerResponse {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub detail: Option<String>,
    pub serial_number: Option<String>,
    pub id: Option<i64>,
    /// Final URL after redirects. Filled in by the HTTP client for same-origin form posts.
    #[serde(skip)]
    pub redirected_to: Option<String>,
}

impl ServerResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// The most specific human-readable text the backend sent, if any.
    pub fn explanation(&self) -> Option<&str> {
        non_blank(&self.message).or_else(|| non_blank(&self.detail))
    }
}

fn non_blank(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_created_report() {
        let response: ServerResponse = serde_json::from_value(json!({
            "success": true,
            "id": 12,
            "serial_number": "R1001",
            "message": "Report created successfully"
        }))
        .unwrap();
        assert!(response.success);
        assert_eq!(response.serial_number.as_deref(), Some("R1001"));
        assert_eq!(response.id, Some(12));
    }

    #[test]
    fn error_body_parses_as_unsuccessful() {
        let response: ServerResponse =
            serde_json::from_value(json!({ "detail": "Report not found" })).unwrap();
        assert!(!response.success);
        assert_eq!(response.explanation(), Some("Report not found"));
    }

    #[test]
    fn blank_message_is_not_an_explanation() {
        let response = ServerResponse {
            message: Some("  ".into()),
            ..ServerResponse::ok()
        };
        assert_eq!(response.explanation(), None);
    }

    #[test]
    fn blank_message_falls_back_to_detail() {
        let response: ServerResponse = serde_json::from_value(json!({
            "message": "",
            "detail": "Email already registered"
        }))
        .unwrap();
        assert_eq!(response.explanation(), Some("Email already registered"));
    }
}
