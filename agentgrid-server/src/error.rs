use thiserror::Error;

use agentgrid_agent::ToolSetBuildError;
use agentgrid_core::AgentGridError;
use agentgrid_state::StateFileError;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Agent(#[from] AgentGridError),
    #[error(transparent)]
    ToolSet(#[from] ToolSetBuildError),
    #[error(transparent)]
    StateFile(#[from] StateFileError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
