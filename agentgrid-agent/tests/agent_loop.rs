use std::sync::{Arc, Mutex};

use serde_json::json;

use agentgrid_agent::tools::grid_tool_set;
use agentgrid_agent::{Agent, ToolContext};
use agentgrid_core::{
    AgentGridError, LlmRequest, LlmResponse, ToolCall, ToolCallingLlm, UiEvent,
};
use agentgrid_state::{grid_seed, JsonStateFile, PersistencePolicy};
use tempfile::tempdir;

/// Plays back a fixed sequence of model responses and records every
/// request it saw.
struct ScriptedLlm {
    responses: Mutex<Vec<LlmResponse>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl ScriptedLlm {
    fn new(responses: Vec<LlmResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ToolCallingLlm for ScriptedLlm {
    async fn invoke(&self, request: LlmRequest) -> Result<LlmResponse, AgentGridError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| AgentGridError::LlmProvider("script exhausted".to_string()))
    }
}

fn answer(content: &str) -> LlmResponse {
    LlmResponse {
        content: content.to_string(),
        tool_calls: vec![],
    }
}

fn tool_call(name: &str, args: serde_json::Value) -> LlmResponse {
    LlmResponse {
        content: String::new(),
        tool_calls: vec![ToolCall {
            id: "call-1".to_string(),
            name: name.to_string(),
            args,
        }],
    }
}

#[tokio::test]
async fn turn_with_tool_call_collects_snapshot_and_narration() {
    // Responses pop from the back: first the tool call, then the answer.
    let llm = Arc::new(ScriptedLlm::new(vec![
        answer("Added row 10."),
        tool_call(
            "add_row",
            json!({"product_name": "X", "product_type": "Software", "key_points": "notes"}),
        ),
    ]));

    let agent = Agent::new(
        llm.clone(),
        grid_tool_set().unwrap(),
        "openai/gpt-4o-mini",
        "You are a data grid assistant.",
    );
    let ctx = ToolContext::new(grid_seed(), PersistencePolicy::Ephemeral);

    let run = agent.run(&ctx, "add product X").await.unwrap();

    assert_eq!(run.reply, "Added row 10.");
    assert_eq!(run.events.len(), 1);
    let UiEvent::StateSnapshot { snapshot } = &run.events[0];
    assert_eq!(snapshot["next_id"], 11);

    let requests = llm.requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    // Tool contract is advertised on every request.
    assert_eq!(requests[0].tools.len(), 2);
    // The second request carries the tool result back to the model.
    let last = requests[1].messages.last().unwrap();
    assert_eq!(last.tool_call_id.as_deref(), Some("call-1"));
    assert!(last.content.contains("STATE_SNAPSHOT"));
}

#[tokio::test]
async fn plain_answer_produces_no_events() {
    let llm = Arc::new(ScriptedLlm::new(vec![answer("There are 9 rows.")]));
    let agent = Agent::new(
        llm,
        grid_tool_set().unwrap(),
        "openai/gpt-4o-mini",
        "You are a data grid assistant.",
    );
    let ctx = ToolContext::new(grid_seed(), PersistencePolicy::Ephemeral);

    let run = agent.run(&ctx, "how many rows are there?").await.unwrap();
    assert_eq!(run.reply, "There are 9 rows.");
    assert!(run.events.is_empty());
}

#[tokio::test]
async fn unknown_tool_is_reported_to_the_model_not_raised() {
    let llm = Arc::new(ScriptedLlm::new(vec![
        answer("Sorry, I cannot do that."),
        tool_call("drop_table", json!({})),
    ]));
    let agent = Agent::new(
        llm.clone(),
        grid_tool_set().unwrap(),
        "openai/gpt-4o-mini",
        "You are a data grid assistant.",
    );
    let ctx = ToolContext::new(grid_seed(), PersistencePolicy::Ephemeral);

    let run = agent.run(&ctx, "drop everything").await.unwrap();
    assert_eq!(run.reply, "Sorry, I cannot do that.");
    assert!(run.events.is_empty());

    let requests = llm.requests.lock().unwrap();
    let last = requests[1].messages.last().unwrap();
    assert!(last.content.starts_with("error:"));
}

#[tokio::test]
async fn failed_state_write_fails_the_turn() {
    // Parent of the state file is a regular file, so the write cannot
    // create the directory and the durable persist fails.
    let dir = tempdir().unwrap();
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, "occupied").unwrap();
    let path = blocker.join("grid_state.json");

    let llm = Arc::new(ScriptedLlm::new(vec![
        answer("Added."),
        tool_call(
            "add_row",
            json!({"product_name": "X", "product_type": "Software", "key_points": ""}),
        ),
    ]));
    let agent = Agent::new(
        llm,
        grid_tool_set().unwrap(),
        "openai/gpt-4o-mini",
        "You are a data grid assistant.",
    );
    let ctx = ToolContext::new(
        grid_seed(),
        PersistencePolicy::Durable(JsonStateFile::new(&path)),
    );

    let err = agent.run(&ctx, "add product X").await.unwrap_err();
    assert!(matches!(
        err,
        AgentGridError::ToolCallFailed { ref tool_name, .. } if tool_name == "add_row"
    ));
    assert!(!path.exists());
}

#[tokio::test]
async fn endless_tool_calls_exhaust_the_step_budget() {
    let calls: Vec<LlmResponse> = (0..4)
        .map(|_| {
            tool_call(
                "add_row",
                json!({"product_name": "X", "product_type": "S", "key_points": ""}),
            )
        })
        .collect();
    let agent = Agent::new(
        Arc::new(ScriptedLlm::new(calls)),
        grid_tool_set().unwrap(),
        "openai/gpt-4o-mini",
        "You are a data grid assistant.",
    )
    .with_max_steps(4);
    let ctx = ToolContext::new(grid_seed(), PersistencePolicy::Ephemeral);

    let err = agent.run(&ctx, "loop forever").await.unwrap_err();
    assert!(matches!(err, AgentGridError::MaxStepsExceeded { max: 4 }));
}
