use serde::{Deserialize, Serialize};

/// What a card puts on the drag: its own id and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DragPayload {
    pub task_id: String,
}

impl DragPayload {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self { task_id: task_id.into() }
    }

    pub fn encode(&self) -> Result<String, String> {
        serde_json::to_string(self).map_err(|e| format!("Failed to encode drag payload: {}", e))
    }

    /// Validates raw drop data before anything acts on it.
    pub fn decode(raw: &str) -> Result<Self, String> {
        if raw.trim().is_empty() {
            return Err("Drop carried no payload".to_string());
        }
        let payload: DragPayload = serde_json::from_str(raw)
            .map_err(|e| format!("Malformed drag payload {:?}: {}", raw, e))?;
        if payload.task_id.trim().is_empty() {
            return Err("Drag payload has an empty task id".to_string());
        }
        Ok(payload)
    }
}
