use std::time::Duration;

/// Fixed configuration for one simulation run
///
/// Recognized at initialization only; there is no runtime
/// reconfiguration.
#[derive(Debug, Clone, Copy)]
pub struct SandConfig {
    /// Cells per axis of the square field
    pub grid_size: usize,
    /// Hard cap on the number of grains in a run
    pub max_particles: usize,
    /// Spawn cadence cap in grains per second
    pub spawn_rate: f32,
    /// Gravity steps per second for each grain
    pub fall_speed: f32,
    /// Extent of the expanding-ring spawn search, in cells
    pub search_radius: i64,
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            max_particles: 100_000,
            spawn_rate: 100.0,
            fall_speed: 60.0,
            search_radius: 3,
        }
    }
}

impl SandConfig {
    /// Minimum time between two accepted spawn requests
    pub fn spawn_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.spawn_rate)
    }

    /// Minimum time between two gravity steps of the same grain
    pub fn fall_interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.fall_speed)
    }
}
