use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use agentgrid_core::{ToolError, ToolSpec};

use crate::context::ToolContext;
use crate::error::ToolDispatchError;

/// Statically typed tool: arguments deserialize from the model's JSON via
/// a schemars-described schema, output serializes back to JSON.
#[async_trait::async_trait]
pub trait TypedTool {
    type State: Send + 'static;
    type Args: DeserializeOwned + JsonSchema + Send;
    type Output: serde::Serialize + Send;

    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    async fn run(
        &self,
        args: Self::Args,
        ctx: &ToolContext<Self::State>,
    ) -> Result<Self::Output, ToolError>;
}

#[derive(Clone, Debug, Deserialize)]
pub struct ToolCallEnvelope {
    pub name: String,
    pub args: Value,
    pub call_id: String,
}

/// Fixed collection of tools over one state type, keyed by name.
pub struct ToolSet<S> {
    specs: Vec<ToolSpec>,
    dispatchers: BTreeMap<String, Arc<dyn ErasedToolRunner<S>>>,
}

impl<S> Clone for ToolSet<S> {
    fn clone(&self) -> Self {
        Self {
            specs: self.specs.clone(),
            dispatchers: self.dispatchers.clone(),
        }
    }
}

impl<S> std::fmt::Debug for ToolSet<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolSet")
            .field("specs", &self.specs)
            .field("dispatchers_len", &self.dispatchers.len())
            .finish()
    }
}

impl<S> ToolSet<S> {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ToolSetBuilder<S> {
        ToolSetBuilder {
            entries: Vec::new(),
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name.as_str()).collect()
    }

    /// The contract advertised to the agent runtime: name, description,
    /// and argument schema per tool.
    pub fn to_specs(&self) -> Vec<ToolSpec> {
        self.specs.clone()
    }

    pub async fn dispatch(
        &self,
        envelope: ToolCallEnvelope,
        ctx: &ToolContext<S>,
    ) -> Result<Value, ToolDispatchError> {
        let Some(dispatcher) = self.dispatchers.get(&envelope.name) else {
            return Err(ToolDispatchError::UnknownTool {
                name: envelope.name,
                call_id: envelope.call_id,
            });
        };

        dispatcher
            .dispatch(&envelope.name, envelope.args, envelope.call_id, ctx)
            .await
    }
}

pub struct ToolSetBuilder<S> {
    entries: Vec<ToolEntry<S>>,
}

struct ToolEntry<S> {
    spec: ToolSpec,
    runner: Arc<dyn ErasedToolRunner<S>>,
}

impl<S: Send + 'static> ToolSetBuilder<S> {
    pub fn register_with<T>(mut self, tool: T) -> Result<Self, ToolSetBuildError>
    where
        T: TypedTool<State = S> + Send + Sync + 'static,
    {
        let parameters = serde_json::to_value(schemars::schema_for!(T::Args)).map_err(|source| {
            ToolSetBuildError::Schema {
                name: T::NAME.to_string(),
                source,
            }
        })?;

        self.entries.push(ToolEntry {
            spec: ToolSpec {
                name: T::NAME.to_string(),
                description: T::DESCRIPTION.to_string(),
                parameters,
            },
            runner: Arc::new(TypedToolRunner { tool }),
        });
        Ok(self)
    }

    pub fn build(self) -> Result<ToolSet<S>, ToolSetBuildError> {
        let mut seen = HashSet::new();
        let mut specs = Vec::new();
        let mut dispatchers = BTreeMap::new();

        for entry in self.entries {
            let name = entry.spec.name.clone();
            if name.trim().is_empty() {
                return Err(ToolSetBuildError::InvalidName { name });
            }
            if !seen.insert(name.clone()) {
                return Err(ToolSetBuildError::DuplicateName { name });
            }

            specs.push(entry.spec);
            dispatchers.insert(name, entry.runner);
        }

        Ok(ToolSet { specs, dispatchers })
    }
}

#[async_trait::async_trait]
trait ErasedToolRunner<S>: Send + Sync {
    async fn dispatch(
        &self,
        name: &str,
        args: Value,
        call_id: String,
        ctx: &ToolContext<S>,
    ) -> Result<Value, ToolDispatchError>;
}

struct TypedToolRunner<T> {
    tool: T,
}

#[async_trait::async_trait]
impl<S, T> ErasedToolRunner<S> for TypedToolRunner<T>
where
    S: Send + 'static,
    T: TypedTool<State = S> + Send + Sync,
{
    async fn dispatch(
        &self,
        name: &str,
        args: Value,
        call_id: String,
        ctx: &ToolContext<S>,
    ) -> Result<Value, ToolDispatchError> {
        let typed_args = serde_json::from_value::<T::Args>(args).map_err(|source| {
            ToolDispatchError::InvalidArgs {
                name: name.to_string(),
                call_id: call_id.clone(),
                source,
            }
        })?;

        let output = self.tool.run(typed_args, ctx).await.map_err(|source| {
            ToolDispatchError::Execution {
                name: name.to_string(),
                call_id: call_id.clone(),
                source,
            }
        })?;

        serde_json::to_value(output).map_err(|source| ToolDispatchError::Serialization {
            name: name.to_string(),
            call_id,
            source,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ToolSetBuildError {
    #[error("tool name must not be empty or whitespace: {name:?}")]
    InvalidName { name: String },
    #[error("duplicate tool name: {name}")]
    DuplicateName { name: String },
    #[error("failed to build schema for tool '{name}': {source}")]
    Schema {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
