//! The simulation core: occupancy tracking, spawn placement, and the
//! per-tick fall/slide/settle rule. [`sandbox::Sandbox`] owns all of it.

pub mod config;
pub mod coords;
pub mod occupancy;
pub mod particles;
pub mod sandbox;
pub mod spawn;
pub mod update;
