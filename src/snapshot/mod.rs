//! Point-in-time introspection records of a machine.
//!
//! A snapshot captures the state table and the engine's position so it can be
//! logged, shipped to tooling, or compared across runs. Hooks, guards and
//! timers are not serializable and are never part of a snapshot; snapshots
//! are not restored into machines.

use crate::core::{Clock, StateId};
use crate::engine::Machine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// One row of the state table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateInfo {
    pub id: StateId,
    pub name: String,
    pub is_final: bool,
}

/// Serializable view of a machine at one instant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// Wall-clock time the snapshot was taken
    pub taken_at: DateTime<Utc>,

    /// All states in arena order
    pub states: Vec<StateInfo>,

    pub initial: Option<StateId>,
    pub current: Option<StateId>,
    pub previous: Option<StateId>,
    pub initialized: bool,
    pub finished: bool,

    /// Milliseconds since the last state change, 0 if none
    pub since_transition_ms: u64,
}

impl Snapshot {
    /// Name of the current state, if any.
    pub fn current_name(&self) -> Option<&str> {
        let current = self.current?;
        self.states
            .iter()
            .find(|info| info.id == current)
            .map(|info| info.name.as_str())
    }

    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.check_version()
    }

    fn check_version(self) -> Result<Self, SnapshotError> {
        if self.version == SNAPSHOT_VERSION {
            Ok(self)
        } else {
            Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            })
        }
    }
}

impl<C: Clock> Machine<C> {
    /// Capture the machine's current position. Pure; fires no hooks.
    pub fn snapshot(&self) -> Snapshot {
        let states = self
            .states()
            .map(|(id, state)| StateInfo {
                id,
                name: state.name().to_string(),
                is_final: state.is_final(),
            })
            .collect();

        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            taken_at: Utc::now(),
            states,
            initial: self.initial_state(),
            current: self.state(),
            previous: self.previous_state(),
            initialized: self.is_initialized(),
            finished: self.is_finished(),
            since_transition_ms: self.last_transitioned(),
        }
    }
}
