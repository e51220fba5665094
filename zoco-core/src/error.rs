use serde::Deserialize;

/// Uniform error contract for all domain services.
///
/// Every service call resolves to exactly one of these, so call sites (the
/// store thunks) handle failures the same way regardless of endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection,
    /// timeout). Carries no HTTP status.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response. `message` comes from the server's error body when
    /// it is parseable, otherwise a generic fallback.
    #[error("{message}")]
    Server { message: String, status: u16 },
    /// 2xx response whose body could not be decoded as the expected shape.
    #[error("unexpected response format")]
    Parse,
}

impl ApiError {
    /// HTTP status of the failure, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Error body shape the server is expected to send on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    #[serde(rename = "statusCode")]
    pub status_code: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_message_verbatim() {
        let err = ApiError::Server {
            message: "Invalid credentials.".to_string(),
            status: 401,
        };
        assert_eq!(err.to_string(), "Invalid credentials.");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn network_error_has_no_status() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn parse_error_body_with_both_fields() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message": "Advert not found", "statusCode": 404}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Advert not found"));
        assert_eq!(body.status_code, Some(404));
    }

    #[test]
    fn parse_error_body_tolerates_missing_fields() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
        assert!(body.status_code.is_none());
    }
}
