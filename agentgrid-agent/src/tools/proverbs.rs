use schemars::JsonSchema;
use serde::Deserialize;

use agentgrid_core::{ToolError, UiEvent};
use agentgrid_state::ProverbsState;

use crate::context::ToolContext;
use crate::tooling::{ToolSet, ToolSetBuildError, TypedTool};

/// Read the current proverb list.
pub struct GetProverbs;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProverbsArgs {}

#[async_trait::async_trait]
impl TypedTool for GetProverbs {
    type State = ProverbsState;
    type Args = GetProverbsArgs;
    type Output = Vec<String>;

    const NAME: &'static str = "get_proverbs";
    const DESCRIPTION: &'static str = "Get the current list of proverbs.";

    async fn run(
        &self,
        _args: Self::Args,
        ctx: &ToolContext<ProverbsState>,
    ) -> Result<Vec<String>, ToolError> {
        ctx.read(|state| state.get().to_vec())
    }
}

/// Append proverbs to the end of the list.
pub struct AddProverbs;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddProverbsArgs {
    /// Proverbs to append, in order
    pub proverbs: Vec<String>,
}

#[async_trait::async_trait]
impl TypedTool for AddProverbs {
    type State = ProverbsState;
    type Args = AddProverbsArgs;
    type Output = UiEvent;

    const NAME: &'static str = "add_proverbs";
    const DESCRIPTION: &'static str = "Append proverbs to the end of the list.";

    async fn run(
        &self,
        args: Self::Args,
        ctx: &ToolContext<ProverbsState>,
    ) -> Result<UiEvent, ToolError> {
        let ((), event) = ctx.commit(|state| state.add(args.proverbs))?;
        Ok(event)
    }
}

/// Replace the whole proverb list.
pub struct SetProverbs;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SetProverbsArgs {
    /// The full replacement list
    pub proverbs: Vec<String>,
}

#[async_trait::async_trait]
impl TypedTool for SetProverbs {
    type State = ProverbsState;
    type Args = SetProverbsArgs;
    type Output = UiEvent;

    const NAME: &'static str = "set_proverbs";
    const DESCRIPTION: &'static str = "Replace the entire list of proverbs.";

    async fn run(
        &self,
        args: Self::Args,
        ctx: &ToolContext<ProverbsState>,
    ) -> Result<UiEvent, ToolError> {
        let ((), event) = ctx.commit(|state| state.set(args.proverbs))?;
        Ok(event)
    }
}

/// The proverbs variant's tool set.
pub fn proverbs_tool_set() -> Result<ToolSet<ProverbsState>, ToolSetBuildError> {
    ToolSet::new()
        .register_with(GetProverbs)?
        .register_with(AddProverbs)?
        .register_with(SetProverbs)?
        .build()
}
