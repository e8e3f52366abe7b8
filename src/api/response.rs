//! Operation response envelope
//!
//! `{"success": true, "data": ...}` or
//! `{"success": false, "error": {"code", "message", "status"}}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
    pub status: u16,
}

impl OperationResponse {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(err: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorInfo {
                code: err.code().to_string(),
                message: err.to_string(),
                status: err.status_code().as_u16(),
            }),
        }
    }

    pub fn from_result(result: &Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(data.clone()),
            Err(err) => Self::error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;
    use serde_json::json;

    #[test]
    fn test_success_response() {
        let resp = OperationResponse::success(json!({"id": 1, "name": "J. K. Rowling"}));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "J. K. Rowling");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_response() {
        let err = ApiError::from(StoreError::AuthorNotFound(999));
        let json = serde_json::to_value(OperationResponse::error(&err)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["status"], 404);
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_absent_entity_is_still_success() {
        let resp = OperationResponse::from_result(&Ok(Value::Null));
        assert!(resp.success);
        assert_eq!(resp.data, Some(Value::Null));
    }
}
