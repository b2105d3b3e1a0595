//! Conversion between continuous world space and discrete grid cells
//!
//! World coordinates live in the normalized [-1, 1] square; grid
//! coordinates are integers in [0, grid_size). Mapping a cell back to
//! world space returns the cell center, so a cell round-trips through
//! grid -> world -> grid to itself.

use crate::util::vectors::{CellVector, WorldVector};

/// Maps a world position to the grid cell containing it
///
/// Out-of-range input clamps to the nearest boundary cell rather than
/// failing, so an off-screen cursor pours sand at the field edge.
pub fn world_to_cell(world: WorldVector, grid_size: usize) -> CellVector {
    CellVector {
        x: axis_to_index(world.x, grid_size),
        y: axis_to_index(world.y, grid_size),
    }
}

/// Maps a grid cell to the world position of its center
pub fn cell_to_world(cell: CellVector, grid_size: usize) -> WorldVector {
    let cell_span = 2.0 / grid_size as f32;
    WorldVector {
        x: -1.0 + (cell.x as f32 + 0.5) * cell_span,
        y: -1.0 + (cell.y as f32 + 0.5) * cell_span,
    }
}

/// Floors one axis into a cell index, clamped into [0, grid_size)
fn axis_to_index(coord: f32, grid_size: usize) -> usize {
    let scaled = ((coord + 1.0) / 2.0 * grid_size as f32).floor();
    (scaled.max(0.0) as usize).min(grid_size - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID_SIZE: usize = 10;

    #[test]
    fn test_origin_maps_to_upper_middle_cell() {
        let cell = world_to_cell(WorldVector::ZERO, GRID_SIZE);
        assert_eq!(cell, CellVector { x: 5, y: 5 });
    }

    #[test]
    fn test_cell_round_trips_through_world() {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let cell = CellVector { x, y };
                let world = cell_to_world(cell, GRID_SIZE);
                assert_eq!(world_to_cell(world, GRID_SIZE), cell);
            }
        }
    }

    #[test]
    fn test_out_of_range_clamps_to_boundary() {
        let far_low = world_to_cell(WorldVector::new(-5.0, -1.2), GRID_SIZE);
        assert_eq!(far_low, CellVector::ZERO);

        let far_high = world_to_cell(WorldVector::new(3.0, 1.0), GRID_SIZE);
        assert_eq!(far_high, CellVector { x: 9, y: 9 });
    }

    #[test]
    fn test_cell_centers_stay_in_world_range() {
        for x in 0..GRID_SIZE {
            for y in 0..GRID_SIZE {
                let world = cell_to_world(CellVector { x, y }, GRID_SIZE);
                assert!(world.x > -1.0 && world.x < 1.0);
                assert!(world.y > -1.0 && world.y < 1.0);
            }
        }
    }
}
