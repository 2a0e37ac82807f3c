mod grid;
mod proverbs;

pub use grid::{grid_tool_set, AddRow, AddRowArgs, UpdateRow, UpdateRowArgs};
pub use proverbs::{
    proverbs_tool_set, AddProverbs, AddProverbsArgs, GetProverbs, GetProverbsArgs, SetProverbs,
    SetProverbsArgs,
};
