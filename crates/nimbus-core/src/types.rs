//! Wire types shared by every Nimbus service.

use serde::{Deserialize, Serialize};

/// Fields present on every platform response envelope.
///
/// Resource responses flatten this alongside their payload field. All
/// fields default so an empty body (decoded as `{}`) still produces a
/// value; the executor performs no schema validation beyond decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResponse {
    /// Whether the operation succeeded.
    #[serde(default)]
    pub success: bool,

    /// Optional human-readable outcome message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Structured error strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,

    /// Structured warning strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::BaseResponse;

    #[test]
    fn empty_object_decodes() {
        let response: BaseResponse = serde_json::from_str("{}").unwrap();
        assert!(!response.success);
        assert!(response.message.is_none());
    }

    #[test]
    fn success_flag_round_trips() {
        let response: BaseResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.success);
    }
}
