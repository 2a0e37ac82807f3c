use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use agentgrid_agent::prompts::{GRID_SYSTEM_PROMPT, PROVERBS_SYSTEM_PROMPT};
use agentgrid_agent::tools::{grid_tool_set, proverbs_tool_set};
use agentgrid_agent::{Agent, ToolContext};
use agentgrid_openrouter::OpenRouterClient;
use agentgrid_server::{agent_app, ServerConfig, ServerError, Variant};
use agentgrid_state::{
    grid_seed, JsonStateFile, LoadOutcome, PersistencePolicy, ProverbsState,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "startup failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    // Missing credential is fatal; nothing else is worth starting without it.
    let llm = Arc::new(OpenRouterClient::from_env()?);

    let app = build_app(&config, llm)?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, variant = ?config.variant, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_app(config: &ServerConfig, llm: Arc<OpenRouterClient>) -> Result<Router, ServerError> {
    match config.variant {
        Variant::Grid => {
            let file = JsonStateFile::new(&config.grid_state_file);
            let state = match file.load_or_seed(grid_seed) {
                LoadOutcome::Loaded(state) => {
                    tracing::info!(path = %file.path().display(), "loaded grid state");
                    state
                }
                LoadOutcome::Seeded { state, reason } => {
                    tracing::info!(path = %file.path().display(), ?reason, "seeded default grid state");
                    state
                }
            };

            let ctx = ToolContext::new(state, PersistencePolicy::Durable(file));
            let agent = Agent::new(llm, grid_tool_set()?, &config.model, GRID_SYSTEM_PROMPT);
            Ok(agent_app(agent, ctx, config.allowed_origin.clone()))
        }
        Variant::Proverbs => {
            let (state, persistence) = match &config.proverbs_file {
                Some(path) => {
                    let file = JsonStateFile::new(path);
                    let state = file.load_or_seed(ProverbsState::default).into_state();
                    (state, PersistencePolicy::Durable(file))
                }
                None => (ProverbsState::default(), PersistencePolicy::Ephemeral),
            };

            let ctx = ToolContext::new(state, persistence);
            let agent = Agent::new(
                llm,
                proverbs_tool_set()?,
                &config.model,
                PROVERBS_SYSTEM_PROMPT,
            );
            Ok(agent_app(agent, ctx, config.allowed_origin.clone()))
        }
    }
}
