//! Wire contract shared by the server and the client.

use serde::{Deserialize, Serialize};

use crate::store::CounterAction;

pub const HEALTH_PATH: &str = "/health";
pub const GET_COUNTER_PATH: &str = "/rpc/getCounter";
pub const UPDATE_COUNTER_PATH: &str = "/rpc/updateCounter";

/// Body of `updateCounter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCounterInput {
    pub action: CounterAction,
}

/// JSON error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_input_uses_lowercase_action() {
        let input: UpdateCounterInput =
            serde_json::from_str(r#"{"action":"reset"}"#).unwrap();
        assert_eq!(input.action, CounterAction::Reset);
        assert!(serde_json::from_str::<UpdateCounterInput>(r#"{"action":"Reset"}"#).is_err());
    }

    #[test]
    fn error_envelope_renames_type() {
        let envelope = ErrorEnvelope {
            error: ErrorBody {
                error_type: "persistence_error".to_string(),
                message: "boom".to_string(),
                request_id: "abc".to_string(),
            },
        };
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(value["error"]["type"], "persistence_error");
    }
}
