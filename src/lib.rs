//! # Sandfall
//!
//! A falling-sand cellular automaton core: grains spawned into a square
//! grid fall under gravity, slide diagonally when blocked, and settle
//! permanently. The crate is the simulation engine only — it exposes
//! spawn requests in and occupied-cell world positions out, and has no
//! dependency on any windowing or graphics API.

pub mod sim;
pub mod util;
