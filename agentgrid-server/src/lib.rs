mod app;
mod config;
mod error;
mod sse;

pub use app::{agent_app, AppContext};
pub use config::{ServerConfig, Variant};
pub use error::ServerError;
