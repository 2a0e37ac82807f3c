use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::response::sse::{KeepAlive, Sse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use agentgrid_agent::{Agent, ToolContext};

use crate::sse::{answer_event, done_event, error_event, snapshot_event};

/// Shared per-process handles: the agent and the one state instance every
/// session mutates.
pub struct AppContext<S> {
    agent: Arc<Agent<S>>,
    ctx: ToolContext<S>,
}

impl<S> Clone for AppContext<S> {
    fn clone(&self) -> Self {
        Self {
            agent: Arc::clone(&self.agent),
            ctx: self.ctx.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RunRequest {
    message: String,
}

/// Router for one agent variant: `POST /agent/run` streams snapshot
/// events and the reply over SSE; `GET /healthz` is a liveness probe.
pub fn agent_app<S>(agent: Agent<S>, ctx: ToolContext<S>, allowed_origin: HeaderValue) -> Router
where
    S: Serialize + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/agent/run", post(run_agent::<S>))
        .route("/healthz", get(|| async { "ok" }))
        .layer(cors)
        .with_state(AppContext {
            agent: Arc::new(agent),
            ctx,
        })
}

async fn run_agent<S>(
    State(app): State<AppContext<S>>,
    Json(body): Json<RunRequest>,
) -> Sse<impl futures::Stream<Item = Result<axum::response::sse::Event, Infallible>>>
where
    S: Serialize + Send + Sync + 'static,
{
    // The whole turn (model calls, tool mutations, disk writes) resolves
    // before the stream starts; events then replay in order.
    let events = match app.agent.run(&app.ctx, &body.message).await {
        Ok(run) => {
            let mut out: Vec<_> = run.events.iter().map(snapshot_event).collect();
            out.push(answer_event(&run.reply));
            out.push(done_event());
            out
        }
        Err(err) => {
            tracing::error!(error = %err, "agent turn failed");
            vec![error_event(&err.to_string()), done_event()]
        }
    };

    Sse::new(tokio_stream::iter(events.into_iter().map(Ok))).keep_alive(KeepAlive::default())
}
