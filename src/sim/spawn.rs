//! Spawn placement: the expanding-ring nearest-free-cell search

use crate::util::vectors::CellVector;

use super::occupancy::OccupancyGrid;

/// Finds the first free in-bounds cell in the ring scan around `center`
///
/// The scan expands row by row: for each vertical offset `dy` from 0 to
/// `search_radius` it sweeps `dx` from `-dy` to `dy`, probing the row
/// above the center before the row below. Among several free cells the
/// winner is the first one visited in this order, not the nearest by
/// Euclidean distance; the scan order is the tie-break policy.
///
/// Returns `None` when every candidate within the radius is occupied or
/// out of bounds, which is a normal "field full near the cursor"
/// outcome.
pub fn find_free_cell(
    grid: &OccupancyGrid,
    center: CellVector,
    search_radius: i64,
) -> Option<CellVector> {
    let (cx, cy) = (center.x as i64, center.y as i64);
    for dy in 0..=search_radius {
        for dx in -dy..=dy {
            if grid.is_free_and_in_bounds(cx + dx, cy + dy) {
                return Some(CellVector {
                    x: (cx + dx) as usize,
                    y: (cy + dy) as usize,
                });
            }
            if dy > 0 && grid.is_free_and_in_bounds(cx + dx, cy - dy) {
                return Some(CellVector {
                    x: (cx + dx) as usize,
                    y: (cy - dy) as usize,
                });
            }
        }
    }
    None
}
