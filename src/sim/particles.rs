//! Grain records and the arena that owns them

use std::time::Duration;

use derive_more::{From, Into};

use crate::util::vectors::WorldVector;

/// Stable handle to a grain for the duration of a run
///
/// Grains are never removed from the arena, so the underlying index
/// never dangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct GrainId(usize);

/// A single grain of sand
#[derive(Debug, Clone, Copy)]
pub struct Grain {
    /// Continuous world position; always a cell center after creation
    pub pos: WorldVector,
    /// Clock reading when the grain was created
    pub spawn_time: Duration,
    /// Clock reading of the last successful fall or slide
    pub last_fall: Duration,
    /// False only for grains that were never meaningfully created
    pub active: bool,
    /// Terminal once true; a settled grain never moves again
    pub settled: bool,
}

/// Fixed-capacity arena of grains in insertion order
pub struct ParticleStore {
    grains: Vec<Grain>,
    capacity: usize,
}

impl ParticleStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            grains: Vec::new(),
            capacity,
        }
    }

    pub fn count(&self) -> usize {
        self.grains.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.grains.len() >= self.capacity
    }

    /// Appends a new falling grain, refusing at capacity
    pub fn spawn(&mut self, pos: WorldVector, at: Duration) -> Option<GrainId> {
        if self.is_full() {
            return None;
        }
        let id = GrainId(self.grains.len());
        self.grains.push(Grain {
            pos,
            spawn_time: at,
            last_fall: at,
            active: true,
            settled: false,
        });
        Some(id)
    }

    pub fn get(&self, id: GrainId) -> &Grain {
        &self.grains[id.0]
    }

    pub fn get_mut(&mut self, id: GrainId) -> &mut Grain {
        &mut self.grains[id.0]
    }

    /// Handles of grains that can still move, newest first
    ///
    /// Updating the most recently spawned grains first reduces visible
    /// stacking artifacts, so the reverse insertion order is load-bearing
    /// even though the automaton itself does not depend on it.
    pub fn movable_ids(&self) -> Vec<GrainId> {
        self.grains
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, grain)| grain.active && !grain.settled)
            .map(|(index, _)| GrainId(index))
            .collect()
    }

    /// World positions of all active grains, in insertion order
    pub fn positions(&self) -> impl Iterator<Item = WorldVector> + '_ {
        self.grains
            .iter()
            .filter(|grain| grain.active)
            .map(|grain| grain.pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Grain> {
        self.grains.iter()
    }

    /// Number of grains that have settled
    pub fn settled_count(&self) -> usize {
        self.grains.iter().filter(|grain| grain.settled).count()
    }
}
