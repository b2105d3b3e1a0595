//! The owning simulation state and its public surface

use std::time::Duration;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::util::clock::Clock;
use crate::util::vectors::WorldVector;

use super::config::SandConfig;
use super::coords;
use super::occupancy::OccupancyGrid;
use super::particles::ParticleStore;
use super::spawn;
use super::update::{self, StepOutcome};

/// All mutable simulation state for one run
///
/// The occupancy grid and the particle store are siblings owned here;
/// nothing outside this struct mutates either directly. One tick runs to
/// completion inside [`update`](Self::update) before control returns, so
/// [`positions`](Self::positions) never observes a tick in progress.
pub struct Sandbox {
    config: SandConfig,
    grid: OccupancyGrid,
    grains: ParticleStore,
    clock: Clock,
    rng: StdRng,
    last_spawn: Option<Duration>,
}

impl Sandbox {
    pub fn new(config: SandConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Deterministic constructor for tests and replays
    pub fn with_seed(config: SandConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SandConfig, rng: StdRng) -> Self {
        debug!(
            "new sandbox: {}x{} cells, capacity {} grains",
            config.grid_size, config.grid_size, config.max_particles
        );
        Self {
            grid: OccupancyGrid::new(config.grid_size),
            grains: ParticleStore::new(config.max_particles),
            clock: Clock::new(),
            rng,
            last_spawn: None,
            config,
        }
    }

    /// Advances the clock by `delta` and runs one full tick
    ///
    /// Every active unsettled grain whose individual fall timer has
    /// elapsed gets one gravity step, newest grain first.
    pub fn update(&mut self, delta: Duration) {
        self.clock.update(delta);
        let now = self.clock.get_current_time();
        let fall_interval = self.config.fall_interval();

        for id in self.grains.movable_ids() {
            if now - self.grains.get(id).last_fall < fall_interval {
                continue;
            }
            let outcome = update::step_grain(
                id,
                &mut self.grains,
                &mut self.grid,
                &mut self.rng,
                self.config.grid_size,
                now,
            );
            if outcome == StepOutcome::Settled {
                trace!("grain settled at {:?}", self.grains.get(id).pos);
            }
        }
    }

    /// Tries to place one grain near the given world position
    ///
    /// Returns true when a grain was created. Every refusal is a normal
    /// outcome, not an error: the spawn cadence has not elapsed, the
    /// store is at capacity, or no cell within the search radius is
    /// free. Out-of-range positions clamp to the field edge.
    pub fn request_spawn(&mut self, world: WorldVector) -> bool {
        let now = self.clock.get_current_time();
        if let Some(last) = self.last_spawn {
            if now - last < self.config.spawn_interval() {
                return false;
            }
        }
        if self.grains.is_full() {
            debug!("spawn refused: store at capacity {}", self.grains.capacity());
            return false;
        }

        let center = coords::world_to_cell(world, self.config.grid_size);
        let cell = match spawn::find_free_cell(&self.grid, center, self.config.search_radius) {
            Some(cell) => cell,
            None => {
                trace!("spawn refused: no free cell near {:?}", center);
                return false;
            }
        };

        let pos = coords::cell_to_world(cell, self.config.grid_size);
        // Capacity was checked above, so the store cannot refuse here.
        if self.grains.spawn(pos, now).is_some() {
            self.grid.set(cell, true);
            self.last_spawn = Some(now);
            true
        } else {
            false
        }
    }

    /// World positions of all active grains, for the presentation layer
    ///
    /// One pair per active grain, in particle store iteration order.
    pub fn positions(&self) -> impl Iterator<Item = WorldVector> + '_ {
        self.grains.positions()
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    pub fn config(&self) -> &SandConfig {
        &self.config
    }

    pub fn grain_count(&self) -> usize {
        self.grains.count()
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn store(&self) -> &ParticleStore {
        &self.grains
    }

    /// Checks that the grid and the store agree on occupancy
    ///
    /// True iff every active grain maps to a distinct occupied cell and
    /// no occupied cell lacks a grain. Intended for tests and debug
    /// assertions; the simulation never needs to call it.
    pub fn is_consistent(&self) -> bool {
        let mut seen = OccupancyGrid::new(self.config.grid_size);
        let mut active = 0;
        for grain in self.grains.iter().filter(|grain| grain.active) {
            active += 1;
            let cell = coords::world_to_cell(grain.pos, self.config.grid_size);
            let (x, y) = (cell.x as i64, cell.y as i64);
            // A second grain on the same cell, or an unmarked cell,
            // breaks the invariant.
            if !seen.is_free_and_in_bounds(x, y) {
                return false;
            }
            if self.grid.is_free_and_in_bounds(x, y) {
                return false;
            }
            seen.set(cell, true);
        }
        self.grid.occupied_count() == active
    }
}
