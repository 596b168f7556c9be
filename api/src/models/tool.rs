//! Custom tool requests handed to the workflow builder.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::article::ArticleStatus;
use super::null_as_default;

/// Processing state of a tool request; shares the article lifecycle.
pub type ToolStatus = ArticleStatus;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolRequest {
    pub id: String,
    #[serde(default)]
    pub request_payload: Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: ToolStatus,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub workflow_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ToolRequest {
    /// The free-text description the user typed, when present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.request_payload.get("description").and_then(Value::as_str)
    }
}
