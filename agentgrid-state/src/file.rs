use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateFileError {
    #[error("failed to write state file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to create state directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Why the seed was used instead of the persisted file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedReason {
    Missing,
    Unreadable(String),
}

/// Outcome of a startup load. Seeding is the tolerated path, not an error,
/// but callers (and tests) can still tell the two apart.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome<S> {
    Loaded(S),
    Seeded { state: S, reason: SeedReason },
}

impl<S> LoadOutcome<S> {
    pub fn into_state(self) -> S {
        match self {
            LoadOutcome::Loaded(state) => state,
            LoadOutcome::Seeded { state, .. } => state,
        }
    }
}

/// Whole-document JSON persistence for a state value.
///
/// Every save rewrites the full document in place; there is no temp-file
/// rename and no fsync. A failed write after an in-memory mutation leaves
/// disk and memory divergent until the next successful save.
#[derive(Clone, Debug)]
pub struct JsonStateFile {
    path: PathBuf,
}

impl JsonStateFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the file, falling back to the seed on a missing or
    /// unreadable document. Parse failures are logged, never surfaced.
    pub fn load_or_seed<S>(&self, seed: impl FnOnce() -> S) -> LoadOutcome<S>
    where
        S: DeserializeOwned,
    {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return LoadOutcome::Seeded {
                    state: seed(),
                    reason: SeedReason::Missing,
                };
            }
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "state file unreadable; seeding defaults");
                return LoadOutcome::Seeded {
                    state: seed(),
                    reason: SeedReason::Unreadable(err.to_string()),
                };
            }
        };

        match serde_json::from_str(&raw) {
            Ok(state) => LoadOutcome::Loaded(state),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "state file failed to parse; seeding defaults");
                LoadOutcome::Seeded {
                    state: seed(),
                    reason: SeedReason::Unreadable(err.to_string()),
                }
            }
        }
    }

    /// Serialize the full state and overwrite the file, creating the
    /// parent directory first when needed.
    pub fn save<S: Serialize>(&self, state: &S) -> Result<(), StateFileError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StateFileError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let serialized = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, serialized).map_err(|source| StateFileError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Whether mutations reach disk. Resolves the reference design's split
/// (grid persisted, proverbs ephemeral) into an explicit, configurable
/// choice instead of two hardcoded behaviors.
#[derive(Clone, Debug)]
pub enum PersistencePolicy {
    Durable(JsonStateFile),
    Ephemeral,
}

impl PersistencePolicy {
    pub fn persist<S: Serialize>(&self, state: &S) -> Result<(), StateFileError> {
        match self {
            PersistencePolicy::Durable(file) => file.save(state),
            PersistencePolicy::Ephemeral => Ok(()),
        }
    }

    pub fn is_durable(&self) -> bool {
        matches!(self, PersistencePolicy::Durable(_))
    }
}
