//! OpenAI-compatible chat-completions wire format, as served by OpenRouter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use agentgrid_core::{AgentGridError, Message, Role, ToolCall, ToolSpec};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<WireTool>>,
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct WireMessage {
    pub role: &'static str,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: WireFunctionCall,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    /// JSON-encoded argument object, as the OpenAI format requires.
    pub arguments: String,
}

#[derive(Debug, Serialize)]
pub struct WireTool {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub function: WireFunction,
}

#[derive(Debug, Serialize)]
pub struct WireFunction {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
    #[serde(default)]
    pub tool_calls: Option<Vec<WireToolCall>>,
}

pub fn map_message(message: Message) -> Result<WireMessage, AgentGridError> {
    let role = match message.role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
        Role::Tool => "tool",
    };

    if message.role == Role::Tool && message.tool_call_id.is_none() {
        return Err(AgentGridError::InvalidConfig(
            "tool message missing tool_call_id".to_string(),
        ));
    }

    let tool_calls = if message.tool_calls.is_empty() {
        None
    } else {
        Some(
            message
                .tool_calls
                .into_iter()
                .map(map_tool_call)
                .collect::<Result<Vec<_>, _>>()?,
        )
    };

    Ok(WireMessage {
        role,
        content: message.content,
        tool_call_id: message.tool_call_id,
        tool_calls,
    })
}

fn map_tool_call(call: ToolCall) -> Result<WireToolCall, AgentGridError> {
    Ok(WireToolCall {
        id: call.id,
        kind: "function".to_string(),
        function: WireFunctionCall {
            name: call.name,
            arguments: serde_json::to_string(&call.args)?,
        },
    })
}

pub fn map_tool_spec(spec: ToolSpec) -> WireTool {
    WireTool {
        kind: "function",
        function: WireFunction {
            name: spec.name,
            description: spec.description,
            parameters: spec.parameters,
        },
    }
}

pub fn unmap_tool_call(call: WireToolCall) -> Result<ToolCall, AgentGridError> {
    let args = serde_json::from_str(&call.function.arguments)?;
    Ok(ToolCall {
        id: call.id,
        name: call.function.name,
        args,
    })
}
