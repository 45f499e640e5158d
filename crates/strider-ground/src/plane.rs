//! Analytic infinite-plane probe for tests and flat-world scenarios.

use glam::Vec3;

use crate::GroundSensor;

/// Grounding probe against an infinite plane with normal `up` passing
/// through `up * height`.
///
/// Deterministic and allocation-free; the default scenario of the demo and
/// the machine's unit tests run on it. A flat plane cannot give the
/// `strict` flag extra meaning, so both query flavors reduce to the signed
/// foot height against the caller's tolerance.
#[derive(Clone, Copy, Debug)]
pub struct PlanarGround {
    height: f32,
    up: Vec3,
    foot: Vec3,
    dt: f32,
    slope_limit: bool,
    clamping: bool,
}

impl PlanarGround {
    /// Plane at `height` along `up`. `up` must be unit length.
    pub fn new(height: f32, up: Vec3) -> Self {
        Self {
            height,
            up,
            foot: up * height,
            dt: 0.0,
            slope_limit: true,
            clamping: true,
        }
    }

    /// Signed height of the foot above the plane; negative means below.
    pub fn height_above_plane(&self) -> f32 {
        self.foot.dot(self.up) - self.height
    }

    /// Whether ground clamping is currently enabled.
    pub fn clamping_enabled(&self) -> bool {
        self.clamping
    }

    /// Whether the slope limit is currently enabled.
    pub fn slope_limit_enabled(&self) -> bool {
        self.slope_limit
    }
}

impl GroundSensor for PlanarGround {
    fn begin_tick(&mut self, foot_position: Vec3, dt: f32) {
        self.foot = foot_position;
        self.dt = dt;
    }

    fn is_grounded(&self, _strict: bool, tolerance: f32) -> bool {
        self.height_above_plane() <= tolerance
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn delta_time(&self) -> f32 {
        self.dt
    }

    fn enable_slope_limit(&mut self) {
        self.slope_limit = true;
    }

    fn disable_slope_limit(&mut self) {
        self.slope_limit = false;
    }

    fn enable_clamping(&mut self) {
        self.clamping = true;
    }

    fn disable_clamping(&mut self) {
        self.clamping = false;
    }
}
