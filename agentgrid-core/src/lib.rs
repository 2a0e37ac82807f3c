mod error;
mod event;
mod llm;

pub use error::{AgentGridError, ToolError};
pub use event::UiEvent;
pub use llm::{LlmRequest, LlmResponse, Message, Role, ToolCall, ToolCallingLlm, ToolSpec};
