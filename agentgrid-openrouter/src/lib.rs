mod client;
mod wire;

pub use client::{OpenRouterBuilder, OpenRouterClient, DEFAULT_MODEL, OPENROUTER_API_KEY_VAR};
