//! A fixed-size boolean field recording which cells hold a grain
//!
//! The field owns no grain identity, only the "something is here" bit.
//! Keeping it consistent with the particle store is the caller's job;
//! only the spawn and update paths write to it.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt;

use ndarray::Array2;

use crate::util::vectors::CellVector;

/// A bounds-checked read went outside the field
#[derive(Debug, Clone)]
pub struct OutOfBoundsError(pub i64, pub i64);

impl fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}) went outside the occupancy field", self.0, self.1)
    }
}

impl std::error::Error for OutOfBoundsError {}

/// Per-cell occupancy for the whole square field
#[derive(Clone)]
pub struct OccupancyGrid(Array2<bool>);

/* =================
 * Initialization
 * ================= */
impl OccupancyGrid {
    /// Create an empty field of `grid_size` cells per axis
    pub fn new(grid_size: usize) -> Self {
        Self(Array2::from_elem((grid_size, grid_size), false))
    }
}

/* ======================================
 * Predicates & Access
 * ====================================== */
impl OccupancyGrid {
    /// Cells per axis
    pub fn size(&self) -> usize {
        self.0.shape()[0]
    }

    /// True iff the coordinate is inside the field and the cell is empty
    ///
    /// This is the single predicate gating every spawn and movement
    /// decision. The arguments are signed so movement code can probe the
    /// neighbors of boundary cells without pre-checking the range.
    pub fn is_free_and_in_bounds(&self, x: i64, y: i64) -> bool {
        self.in_bounds(x, y) && !self.0[[x as usize, y as usize]]
    }

    /// True iff the coordinate lies inside the field
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        let size = self.size() as i64;
        x >= 0 && x < size && y >= 0 && y < size
    }

    /// Unconditional occupancy write
    pub fn set(&mut self, cell: CellVector, occupied: bool) {
        self.0[[cell.x, cell.y]] = occupied;
    }

    /// Gets the occupancy bit, or an error if the coordinate is out of bounds
    pub fn checked_get(&self, x: i64, y: i64) -> Result<bool, OutOfBoundsError> {
        if !self.in_bounds(x, y) {
            return Err(OutOfBoundsError(x, y));
        }
        Ok(self.0[[x as usize, y as usize]])
    }

    /// Number of occupied cells in the whole field
    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|&&occupied| occupied).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_all_free() {
        let grid = OccupancyGrid::new(4);
        assert_eq!(grid.occupied_count(), 0);
        for x in 0..4 {
            for y in 0..4 {
                assert!(grid.is_free_and_in_bounds(x, y));
            }
        }
    }

    #[test]
    fn test_set_marks_and_clears() {
        let mut grid = OccupancyGrid::new(4);
        let cell = CellVector { x: 1, y: 2 };

        grid.set(cell, true);
        assert!(!grid.is_free_and_in_bounds(1, 2));
        assert_eq!(grid.occupied_count(), 1);

        grid.set(cell, false);
        assert!(grid.is_free_and_in_bounds(1, 2));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_never_free() {
        let grid = OccupancyGrid::new(4);
        assert!(!grid.is_free_and_in_bounds(-1, 0));
        assert!(!grid.is_free_and_in_bounds(0, -1));
        assert!(!grid.is_free_and_in_bounds(4, 0));
        assert!(!grid.is_free_and_in_bounds(0, 4));
    }

    #[test]
    fn test_checked_get_errors_outside() {
        let grid = OccupancyGrid::new(4);
        assert!(grid.checked_get(3, 3).is_ok());
        assert!(grid.checked_get(0, -1).is_err());
        assert!(grid.checked_get(4, 0).is_err());
    }
}
