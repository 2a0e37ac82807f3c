use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event streamed to connected clients after a mutating tool call.
///
/// Carries the entire current state rather than an incremental diff; the
/// UI replaces its copy wholesale on every event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    #[serde(rename = "STATE_SNAPSHOT")]
    StateSnapshot { snapshot: Value },
}

impl UiEvent {
    pub fn snapshot_of<S: Serialize>(state: &S) -> Result<Self, serde_json::Error> {
        Ok(UiEvent::StateSnapshot {
            snapshot: serde_json::to_value(state)?,
        })
    }

    pub fn snapshot(&self) -> &Value {
        match self {
            UiEvent::StateSnapshot { snapshot } => snapshot,
        }
    }
}
