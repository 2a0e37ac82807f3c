//! Shapes agent output into the SSE events the UI consumes.

use axum::response::sse::Event;
use serde_json::json;

use agentgrid_core::UiEvent;

pub fn snapshot_event(event: &UiEvent) -> Event {
    Event::default()
        .event("snapshot")
        .json_data(event)
        .expect("SSE payload should serialize")
}

pub fn answer_event(content: &str) -> Event {
    Event::default()
        .event("answer")
        .json_data(json!({"content": content}))
        .expect("SSE payload should serialize")
}

pub fn error_event(message: &str) -> Event {
    Event::default()
        .event("error")
        .json_data(json!({"message": message}))
        .expect("SSE payload should serialize")
}

pub fn done_event() -> Event {
    Event::default().event("done").data("{}")
}
