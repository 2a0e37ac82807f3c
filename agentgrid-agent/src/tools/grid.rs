use schemars::JsonSchema;
use serde::Deserialize;

use agentgrid_core::{ToolError, UiEvent};
use agentgrid_state::{GridState, RowPatch, RowUpdate};

use crate::context::ToolContext;
use crate::tooling::{ToolSet, ToolSetBuildError, TypedTool};

/// Add a new row to the data grid.
pub struct AddRow;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddRowArgs {
    /// Product name
    pub product_name: String,
    /// Product category
    pub product_type: String,
    /// Key product description/notes
    pub key_points: String,
}

#[async_trait::async_trait]
impl TypedTool for AddRow {
    type State = GridState;
    type Args = AddRowArgs;
    type Output = UiEvent;

    const NAME: &'static str = "add_row";
    const DESCRIPTION: &'static str = "Add a new row to the data grid.";

    async fn run(
        &self,
        args: Self::Args,
        ctx: &ToolContext<GridState>,
    ) -> Result<UiEvent, ToolError> {
        let (row, event) = ctx.commit(|state| {
            state.add_row(args.product_name, args.product_type, args.key_points)
        })?;
        tracing::debug!(row_id = row.id, "row added");
        Ok(event)
    }
}

/// Update specific fields in an existing row.
pub struct UpdateRow;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateRowArgs {
    /// Id of the row to update
    pub row_id: u64,
    /// New product name, if changing
    pub product_name: Option<String>,
    /// New product category, if changing
    pub product_type: Option<String>,
    /// New description/notes, if changing
    pub key_points: Option<String>,
}

#[async_trait::async_trait]
impl TypedTool for UpdateRow {
    type State = GridState;
    type Args = UpdateRowArgs;
    type Output = UiEvent;

    const NAME: &'static str = "update_row";
    const DESCRIPTION: &'static str = "Update specific fields in an existing row by id.";

    async fn run(
        &self,
        args: Self::Args,
        ctx: &ToolContext<GridState>,
    ) -> Result<UiEvent, ToolError> {
        let patch = RowPatch {
            product_name: args.product_name,
            product_type: args.product_type,
            key_points: args.key_points,
        };

        // A missing row is tolerated: the unchanged snapshot goes back to
        // the model and nothing is persisted. No delete operation exists,
        // so a row present here cannot vanish before the commit below.
        let exists = ctx.read(|state| state.rows.iter().any(|row| row.id == args.row_id))?;
        if !exists {
            tracing::debug!(row_id = args.row_id, "update targeted an unknown row; returning unchanged snapshot");
            return ctx.snapshot();
        }

        let (outcome, event) = ctx.commit(|state| state.update_row(args.row_id, patch))?;
        debug_assert!(matches!(outcome, RowUpdate::Updated(_)));
        Ok(event)
    }
}

/// The grid variant's tool set: add and update, no delete.
pub fn grid_tool_set() -> Result<ToolSet<GridState>, ToolSetBuildError> {
    ToolSet::new()
        .register_with(AddRow)?
        .register_with(UpdateRow)?
        .build()
}
