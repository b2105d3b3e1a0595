/// A discrete grid cell coordinate
/// x is the column axis, positive to the right
/// y is the row axis, row 0 is the bottom of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellVector {
    pub x: usize,
    pub y: usize,
}

/// Convenient constants
impl CellVector {
    pub const ZERO: Self = Self { x: 0, y: 0 };
}

/// A continuous world-space position
/// Both axes live in the normalized [-1, 1] range; after creation a
/// grain's position is always some cell center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldVector {
    pub x: f32,
    pub y: f32,
}

impl WorldVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
