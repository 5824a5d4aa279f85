use std::time::Duration;

/// Fixed timestep accumulator.
/// Used when the host drives frames from its own callback (e.g. the browser's
/// animation frame) and only reports elapsed wall time.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    /// Most steps a single host callback may run.
    pub const MAX_STEPS: u32 = 10;

    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // A long stall (tab in background) must not replay minutes of frames.
        self.accumulator = self.accumulator.min(self.dt * Self::MAX_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Holds a native loop at a target frame rate.
///
/// After each frame the loop asks how long to sleep; a frame that overran
/// its budget gets no sleep and the next one starts immediately.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    frame_time: Duration,
}

impl FramePacer {
    pub fn from_rate(frames_per_second: u32) -> Self {
        Self {
            frame_time: Duration::from_secs(1) / frames_per_second.max(1),
        }
    }

    pub fn from_dt(dt: f32) -> Self {
        Self {
            frame_time: Duration::from_secs_f32(dt.max(f32::EPSILON)),
        }
    }

    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    /// Time left in the frame budget after `elapsed` was spent working.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.frame_time.saturating_sub(elapsed)
    }
}
