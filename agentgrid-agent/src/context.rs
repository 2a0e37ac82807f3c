use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use agentgrid_core::{ToolError, UiEvent};
use agentgrid_state::PersistencePolicy;

/// Explicitly owned handle to the process-wide state, passed into every
/// tool invocation. There is one instance per server; all sessions share
/// it with no isolation beyond the mutex (last write wins).
pub struct ToolContext<S> {
    state: Arc<Mutex<S>>,
    persistence: Arc<PersistencePolicy>,
}

impl<S> Clone for ToolContext<S> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            persistence: Arc::clone(&self.persistence),
        }
    }
}

impl<S: Serialize> ToolContext<S> {
    pub fn new(state: S, persistence: PersistencePolicy) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            persistence: Arc::new(persistence),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, ToolError> {
        self.state
            .lock()
            .map_err(|_| ToolError::ExecutionFailed("state lock poisoned".to_string()))
    }

    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> Result<R, ToolError> {
        Ok(f(&*self.lock()?))
    }

    /// Apply a mutation, persist the resulting state, and return the
    /// mutation's value together with a full snapshot event. The disk
    /// write happens synchronously within the tool call.
    pub fn commit<R>(&self, f: impl FnOnce(&mut S) -> R) -> Result<(R, UiEvent), ToolError> {
        let mut guard = self.lock()?;
        let value = f(&mut guard);
        self.persistence
            .persist(&*guard)
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        let event = UiEvent::snapshot_of(&*guard)?;
        Ok((value, event))
    }

    /// Snapshot of the current state without mutating or persisting.
    pub fn snapshot(&self) -> Result<UiEvent, ToolError> {
        let guard = self.lock()?;
        Ok(UiEvent::snapshot_of(&*guard)?)
    }
}
