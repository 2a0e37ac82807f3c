use agentgrid_core::{LlmRequest, LlmResponse, Message, Role, ToolCall};
use serde_json::json;

#[test]
fn request_omits_empty_tool_list() {
    let request = LlmRequest {
        model: "openai/gpt-4o-mini".to_string(),
        messages: vec![Message::user("hi")],
        tools: vec![],
    };

    let wire = serde_json::to_value(&request).unwrap();
    assert!(wire.get("tools").is_none());
    assert_eq!(wire["messages"][0]["role"], "user");
}

#[test]
fn tool_result_message_carries_call_id() {
    let message = Message::tool_result("call-7", "{\"ok\":true}");
    assert_eq!(message.role, Role::Tool);
    assert_eq!(message.tool_call_id.as_deref(), Some("call-7"));
}

#[test]
fn response_defaults_missing_tool_calls_to_empty() {
    let response: LlmResponse = serde_json::from_value(json!({"content": "done"})).unwrap();
    assert!(response.tool_calls.is_empty());
}

#[test]
fn assistant_message_serializes_tool_calls() {
    let message = Message::assistant(
        "",
        vec![ToolCall {
            id: "call-1".to_string(),
            name: "add_row".to_string(),
            args: json!({"product_name": "X"}),
        }],
    );

    let wire = serde_json::to_value(&message).unwrap();
    assert_eq!(wire["tool_calls"][0]["name"], "add_row");
}
