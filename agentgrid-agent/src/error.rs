use thiserror::Error;

use agentgrid_core::ToolError;

#[derive(Debug, Error)]
pub enum ToolDispatchError {
    #[error("unknown tool '{name}' (call {call_id})")]
    UnknownTool { name: String, call_id: String },
    #[error("invalid arguments for '{name}' (call {call_id}): {source}")]
    InvalidArgs {
        name: String,
        call_id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("tool '{name}' failed (call {call_id}): {source}")]
    Execution {
        name: String,
        call_id: String,
        #[source]
        source: ToolError,
    },
    #[error("failed to serialize output of '{name}' (call {call_id}): {source}")]
    Serialization {
        name: String,
        call_id: String,
        #[source]
        source: serde_json::Error,
    },
}
