mod file;
mod grid;
mod proverbs;
mod seed;

pub use file::{JsonStateFile, LoadOutcome, PersistencePolicy, SeedReason, StateFileError};
pub use grid::{GridRow, GridState, RowPatch, RowUpdate};
pub use proverbs::ProverbsState;
pub use seed::grid_seed;
