use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Generic `{ "message": ..., ... }` acknowledgement.
///
/// Fields other than `message` are kept in `extra` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MessageResponse {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

/// Shorthand for endpoints whose body shape is owned entirely by the server.
pub type JsonValue = Value;
