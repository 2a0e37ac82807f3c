use std::sync::Arc;

use serde::Serialize;

use agentgrid_core::{AgentGridError, LlmRequest, Message, ToolCallingLlm, UiEvent};

use crate::context::ToolContext;
use crate::error::ToolDispatchError;
use crate::tooling::{ToolCallEnvelope, ToolSet};

const DEFAULT_MAX_STEPS: u32 = 8;

/// One conversational turn: the final narration plus every snapshot event
/// the tools produced along the way, in order.
#[derive(Clone, Debug)]
pub struct AgentRun {
    pub reply: String,
    pub events: Vec<UiEvent>,
}

/// Drives a tool-calling model against a fixed tool set. The model owns
/// the decision of which tool to call; this loop only registers the
/// contract, dispatches calls, and feeds results back.
pub struct Agent<S> {
    llm: Arc<dyn ToolCallingLlm>,
    tools: ToolSet<S>,
    model: String,
    system_prompt: String,
    max_steps: u32,
}

impl<S> Agent<S>
where
    S: Serialize + Send + 'static,
{
    pub fn new(
        llm: Arc<dyn ToolCallingLlm>,
        tools: ToolSet<S>,
        model: impl Into<String>,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            llm,
            tools,
            model: model.into(),
            system_prompt: system_prompt.into(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn tools(&self) -> &ToolSet<S> {
        &self.tools
    }

    pub async fn run(
        &self,
        ctx: &ToolContext<S>,
        user_text: &str,
    ) -> Result<AgentRun, AgentGridError> {
        let mut messages = vec![
            Message::system(&self.system_prompt),
            Message::user(user_text),
        ];
        let mut events = Vec::new();

        for step in 0..self.max_steps {
            let response = self
                .llm
                .invoke(LlmRequest {
                    model: self.model.clone(),
                    messages: messages.clone(),
                    tools: self.tools.to_specs(),
                })
                .await?;

            if response.tool_calls.is_empty() {
                return Ok(AgentRun {
                    reply: response.content,
                    events,
                });
            }

            messages.push(Message::assistant(
                response.content.clone(),
                response.tool_calls.clone(),
            ));

            for call in response.tool_calls {
                let envelope = ToolCallEnvelope {
                    name: call.name.clone(),
                    args: call.args,
                    call_id: call.id.clone(),
                };

                match self.tools.dispatch(envelope, ctx).await {
                    Ok(output) => {
                        if let Ok(event) = serde_json::from_value::<UiEvent>(output.clone()) {
                            events.push(event);
                        }
                        messages.push(Message::tool_result(call.id, serde_json::to_string(&output)?));
                    }
                    Err(
                        err @ (ToolDispatchError::UnknownTool { .. }
                        | ToolDispatchError::InvalidArgs { .. }),
                    ) => {
                        // The model picked a tool or arguments that do not
                        // exist; feed the error back so it can recover or
                        // apologize instead of aborting the turn.
                        tracing::warn!(step, tool = %call.name, error = %err, "tool dispatch failed");
                        messages.push(Message::tool_result(call.id, format!("error: {err}")));
                    }
                    Err(err) => {
                        // Execution and serialization failures (a failed
                        // state write among them) are faults the model
                        // cannot fix; the turn fails and the caller sees
                        // the error.
                        return Err(AgentGridError::ToolCallFailed {
                            tool_name: call.name,
                            reason: err.to_string(),
                        });
                    }
                }
            }
        }

        Err(AgentGridError::MaxStepsExceeded {
            max: self.max_steps,
        })
    }
}
