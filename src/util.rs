pub mod clock;
pub mod vectors;
