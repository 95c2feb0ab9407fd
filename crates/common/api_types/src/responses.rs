use serde::{Deserialize, Serialize};
use syncwatch_sync_status::SyncStatus;

/// Body of `GET /status` once all four progress values were fetched.
///
/// # Example
/// {
///  "status": "healthy"
/// }
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: SyncStatus,
}

impl StatusResponse {
    pub fn new(status: SyncStatus) -> Self {
        Self { status }
    }
}

/// Body of `GET /height`.
///
/// # Example
/// {
///  "geth_height": 7105325
/// }
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeightResponse {
    pub geth_height: u64,
}

impl HeightResponse {
    pub fn new(geth_height: u64) -> Self {
        Self { geth_height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use syncwatch_sync_status::SyncStatus;

    use super::{ErrorResponse, HeightResponse, StatusResponse};

    #[test]
    fn test_response_shapes() {
        assert_eq!(
            serde_json::to_value(StatusResponse::new(SyncStatus::Unhealthy)).unwrap(),
            json!({ "status": "unhealthy" })
        );
        assert_eq!(
            serde_json::to_value(HeightResponse::new(7105325)).unwrap(),
            json!({ "geth_height": 7105325 })
        );
        assert_eq!(
            serde_json::to_value(ErrorResponse::new("Missing API key")).unwrap(),
            json!({ "error": "Missing API key" })
        );
    }
}
