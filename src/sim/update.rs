//! The fall/slide/settle rule applied to one grain per gravity step

use std::time::Duration;

use rand::Rng;

use crate::util::vectors::CellVector;

use super::coords;
use super::occupancy::OccupancyGrid;
use super::particles::{GrainId, ParticleStore};

/// Outcome of one gravity step for one grain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved straight down one row
    Fell,
    /// Straight fall was blocked; moved to a diagonal cell
    Slid,
    /// Neither fall nor slide possible; the grain is now settled
    Settled,
}

/// Attempts one gravity step for the given grain
///
/// Straight fall has priority. When it is blocked, the two diagonals are
/// tried in an order drawn fresh from `rng` on every attempt, so grains
/// contesting the same pile do not develop a permanent left or right
/// bias. A slide needs both the lateral cell and the diagonal below it
/// free. When nothing is free the grain settles; there is no path out of
/// the settled state, even if neighboring cells empty later.
pub fn step_grain<R: Rng>(
    id: GrainId,
    store: &mut ParticleStore,
    grid: &mut OccupancyGrid,
    rng: &mut R,
    grid_size: usize,
    now: Duration,
) -> StepOutcome {
    let cell = coords::world_to_cell(store.get(id).pos, grid_size);
    let (gx, gy) = (cell.x as i64, cell.y as i64);

    if grid.is_free_and_in_bounds(gx, gy - 1) {
        let below = CellVector {
            x: cell.x,
            y: cell.y - 1,
        };
        move_grain(id, store, grid, cell, below, grid_size, now);
        return StepOutcome::Fell;
    }

    let sides = if rng.gen_bool(0.5) { [-1, 1] } else { [1, -1] };
    for side in sides {
        let lateral_free = grid.is_free_and_in_bounds(gx + side, gy);
        let diagonal_free = grid.is_free_and_in_bounds(gx + side, gy - 1);
        if lateral_free && diagonal_free {
            let diagonal = CellVector {
                x: (gx + side) as usize,
                y: (gy - 1) as usize,
            };
            move_grain(id, store, grid, cell, diagonal, grid_size, now);
            return StepOutcome::Slid;
        }
    }

    store.get_mut(id).settled = true;
    StepOutcome::Settled
}

/// Relocates a grain, keeping position, occupancy and fall timer in step
fn move_grain(
    id: GrainId,
    store: &mut ParticleStore,
    grid: &mut OccupancyGrid,
    from: CellVector,
    to: CellVector,
    grid_size: usize,
    now: Duration,
) {
    grid.set(from, false);
    grid.set(to, true);
    let grain = store.get_mut(id);
    grain.pos = coords::cell_to_world(to, grid_size);
    grain.last_fall = now;
}
