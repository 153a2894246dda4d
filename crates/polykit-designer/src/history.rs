//! Snapshot-based undo history.
//!
//! Each snapshot is the scene serialized to JSON, so stored states share
//! nothing with the live scene. The stack is bounded: once it grows past its
//! capacity the oldest snapshot is evicted. There is no redo.

use std::collections::VecDeque;

use polykit_core::DesignError;
use tracing::{debug, trace};

use crate::scene::Scene;
use crate::serialization;

/// Default number of snapshots kept.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: VecDeque<String>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// A capacity of zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            snapshots: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// True when an earlier state than the current one is stored.
    pub fn can_undo(&self) -> bool {
        self.snapshots.len() >= 2
    }

    /// Records the scene as the newest snapshot.
    pub fn push(&mut self, scene: &Scene) -> Result<(), DesignError> {
        let snapshot = serialization::serialize_scene(scene)?;
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            trace!(capacity = self.capacity, "evicted oldest snapshot");
        }
        Ok(())
    }

    /// Drops the newest snapshot and returns the scene stored before it.
    ///
    /// Fails with `NoHistory` when only the current state is stored. The
    /// history is unchanged on failure.
    pub fn undo(&mut self) -> Result<Scene, DesignError> {
        if !self.can_undo() {
            return Err(DesignError::NoHistory);
        }
        let previous = &self.snapshots[self.snapshots.len() - 2];
        let scene = serialization::deserialize_scene(previous)?;
        self.snapshots.pop_back();
        debug!(remaining = self.snapshots.len(), "undo restored snapshot");
        Ok(scene)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
