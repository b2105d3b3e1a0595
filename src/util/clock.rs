use std::time::Duration;

/// A clock for the simulation
///
/// The host advances it once per frame with whatever wall time elapsed.
/// Timers inside the simulation compare elapsed seconds, not frame
/// counts, so the gravity rate does not drift with the frame rate.
#[derive(Default, Clone, Copy, Debug)]
pub struct Clock {
    elapsed: Duration,
    frame: u32,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get_current_time(&self) -> Duration {
        self.elapsed
    }
    pub fn get_current_frame(&self) -> u32 {
        self.frame
    }
    /// Advance by one frame worth of time
    pub fn update(&mut self, delta: Duration) {
        self.elapsed += delta;
        self.frame += 1;
    }
}
