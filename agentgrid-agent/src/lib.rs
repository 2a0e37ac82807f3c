mod agent;
mod context;
mod error;
pub mod prompts;
pub mod tools;
mod tooling;

pub use agent::{Agent, AgentRun};
pub use context::ToolContext;
pub use error::ToolDispatchError;
pub use tooling::{ToolCallEnvelope, ToolSet, ToolSetBuildError, ToolSetBuilder, TypedTool};

pub use agentgrid_core::ToolError;
