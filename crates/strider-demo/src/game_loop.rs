//! Fixed-timestep loop for the live gamepad mode, implementing the
//! "fix your timestep" pattern.
//!
//! Simulation ticks run at a fixed 60 Hz driven by an accumulator; the
//! per-frame callback runs once per wall-clock frame for summary output.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Maximum frame time clamp to prevent spiral of death. A frame longer than
/// this is clamped and the simulation accepts slowdown rather than trying
/// to catch up with dozens of steps.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep loop state.
///
/// Call [`tick`](Self::tick) once per frame to run simulation steps at the
/// fixed rate.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    update_count: u64,
}

impl GameLoop {
    /// Creates a loop starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            update_count: 0,
        }
    }

    /// Runs one frame: measures elapsed time, runs zero or more fixed-rate
    /// simulation steps, then calls `frame_fn` once.
    ///
    /// `update_fn(fixed_dt, total_sim_time)` is invoked per simulation step.
    pub fn tick(&mut self, mut update_fn: impl FnMut(f64, f64), mut frame_fn: impl FnMut()) {
        let current_time = Instant::now();
        let mut frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;

        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            update_fn(FIXED_DT, self.total_sim_time);
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
        }

        frame_fn();
    }

    /// Total simulation update steps executed so far.
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulation time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
