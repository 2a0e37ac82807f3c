use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::HeaderValue;

use agentgrid_openrouter::DEFAULT_MODEL;

use crate::error::ServerError;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_GRID_STATE_FILE: &str = "data/grid_state.json";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Which demo backend this process serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Grid,
    Proverbs,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub variant: Variant,
    pub addr: SocketAddr,
    pub model: String,
    pub grid_state_file: PathBuf,
    /// When set, the proverbs variant persists too; by default it is
    /// ephemeral.
    pub proverbs_file: Option<PathBuf>,
    pub allowed_origin: HeaderValue,
}

impl ServerConfig {
    /// Reads `AGENTGRID_*` variables, falling back to the defaults the
    /// reference deployment uses. The API credential is read separately by
    /// the OpenRouter client.
    pub fn from_env() -> Result<Self, ServerError> {
        let variant = match std::env::var("AGENTGRID_VARIANT").as_deref() {
            Ok("proverbs") => Variant::Proverbs,
            Ok("grid") | Err(_) => Variant::Grid,
            Ok(other) => {
                return Err(ServerError::Config(format!(
                    "unknown AGENTGRID_VARIANT {other:?} (expected \"grid\" or \"proverbs\")"
                )))
            }
        };

        let addr = std::env::var("AGENTGRID_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|err| ServerError::Config(format!("invalid AGENTGRID_ADDR: {err}")))?;

        let allowed_origin = std::env::var("AGENTGRID_ALLOWED_ORIGIN")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string())
            .parse::<HeaderValue>()
            .map_err(|err| {
                ServerError::Config(format!("invalid AGENTGRID_ALLOWED_ORIGIN: {err}"))
            })?;

        Ok(Self {
            variant,
            addr,
            model: std::env::var("AGENTGRID_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            grid_state_file: std::env::var("AGENTGRID_STATE_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_GRID_STATE_FILE)),
            proverbs_file: std::env::var("AGENTGRID_PROVERBS_FILE").ok().map(PathBuf::from),
            allowed_origin,
        })
    }
}
