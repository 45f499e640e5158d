//! Raycast ground probe against a [`CollisionWorld`].

use glam::Vec3;
use rapier3d::prelude::*;
use tracing::debug;

use crate::{CollisionWorld, GroundSensor};

/// Default maximum walkable slope angle: 45°.
pub const DEFAULT_MAX_SLOPE: f32 = std::f32::consts::FRAC_PI_4;

/// Grounding probe that casts a ray from the character's foot along `-up`
/// into the collision scene.
///
/// The ray length is the caller's tolerance, so the maintaining query (0.5)
/// reaches further than the acquiring one (0.01). While the slope limit is
/// enabled, strict queries also reject surfaces whose normal deviates from
/// `up` by more than `max_slope` — standing on a too-steep ramp does not
/// count as maintaining ground, which is what tips the machine into Fall.
pub struct RapierProbe {
    world: CollisionWorld,
    up: Vec3,
    foot: Vec3,
    dt: f32,
    max_slope: f32,
    slope_limit: bool,
    clamping: bool,
}

impl RapierProbe {
    /// Wraps a collision scene with the default 45° slope limit.
    ///
    /// The scene is stepped once so its query structures cover geometry
    /// added before the probe took ownership.
    pub fn new(mut world: CollisionWorld, up: Vec3) -> Self {
        world.step();
        Self {
            world,
            up,
            foot: Vec3::ZERO,
            dt: 0.0,
            max_slope: DEFAULT_MAX_SLOPE,
            slope_limit: true,
            clamping: true,
        }
    }

    /// Overrides the maximum walkable slope angle, in radians.
    pub fn with_max_slope(mut self, max_slope: f32) -> Self {
        self.max_slope = max_slope;
        self
    }

    /// Read access to the wrapped scene.
    pub fn world(&self) -> &CollisionWorld {
        &self.world
    }

    /// Mutable access to the wrapped scene, for adding geometry mid-run.
    pub fn world_mut(&mut self) -> &mut CollisionWorld {
        &mut self.world
    }

    /// Whether ground clamping is currently enabled.
    pub fn clamping_enabled(&self) -> bool {
        self.clamping
    }

    /// Whether the slope limit is currently enabled.
    pub fn slope_limit_enabled(&self) -> bool {
        self.slope_limit
    }

    fn cast_down(&self, tolerance: f32, check_slope: bool) -> bool {
        let origin = Vector::new(self.foot.x, self.foot.y, self.foot.z);
        let dir = Vector::new(-self.up.x, -self.up.y, -self.up.z);
        let ray = Ray::new(origin, dir);

        let query_pipeline = self.world.broad_phase.as_query_pipeline(
            self.world.narrow_phase.query_dispatcher(),
            &self.world.rigid_body_set,
            &self.world.collider_set,
            QueryFilter::new(),
        );

        // Extend the ray by a small skin so a foot resting exactly on the
        // surface still registers a hit.
        let skin = 1e-3;
        match query_pipeline.cast_ray_and_get_normal(&ray, tolerance + skin, true) {
            Some((_, intersection)) => {
                if !check_slope {
                    return true;
                }
                let normal = Vec3::new(
                    intersection.normal.x,
                    intersection.normal.y,
                    intersection.normal.z,
                );
                let cos = normal.dot(self.up).clamp(-1.0, 1.0);
                let walkable = cos.acos() <= self.max_slope;
                if !walkable {
                    debug!("surface below foot exceeds slope limit");
                }
                walkable
            }
            None => false,
        }
    }
}

impl GroundSensor for RapierProbe {
    fn begin_tick(&mut self, foot_position: Vec3, dt: f32) {
        self.foot = foot_position;
        self.dt = dt;
        // Refresh the query structures in case geometry changed.
        self.world.step();
    }

    fn is_grounded(&self, strict: bool, tolerance: f32) -> bool {
        let check_slope = strict && self.slope_limit;
        self.cast_down(tolerance, check_slope)
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

#[cfg(test)]
mod tests {
    use super::*;

    /// Flat floor spanning 100x1x100 with its top face at y=0.
    fn floor_world() -> CollisionWorld {
        let mut world = CollisionWorld::new();
        world.add_static_cuboid(Vec3::new(0.0, -0.5, 0.0), Vec3::new(50.0, 0.5, 50.0));
        world
    }

    #[test]
    fn test_foot_on_floor_is_grounded() {
        let mut probe = RapierProbe::new(floor_world(), Vec3::Y);
        probe.begin_tick(Vec3::new(0.0, 0.0, 0.0), 1.0 / 60.0);
        assert!(probe.is_grounded(true, 0.5));
        assert!(probe.is_grounded(false, 0.01));
    }

    #[test]
    fn test_hovering_foot_passes_only_the_wide_tolerance() {
        let mut probe = RapierProbe::new(floor_world(), Vec3::Y);
        probe.begin_tick(Vec3::new(0.0, 0.3, 0.0), 1.0 / 60.0);
        assert!(probe.is_grounded(true, 0.5));
        assert!(!probe.is_grounded(false, 0.01));
    }

    #[test]
    fn test_airborne_foot_is_not_grounded() {
        let mut probe = RapierProbe::new(floor_world(), Vec3::Y);
        probe.begin_tick(Vec3::new(0.0, 2.0, 0.0), 1.0 / 60.0);
        assert!(!probe.is_grounded(true, 0.5));
        assert!(!probe.is_grounded(false, 0.01));
    }

    #[test]
    fn test_strict_query_rejects_steep_surface() {
        let mut world = CollisionWorld::new();
        // A 60° ramp, steeper than the default 45° limit.
        world.add_static_ramp(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.1, 5.0),
            60.0_f32.to_radians(),
        );
        let mut probe = RapierProbe::new(world, Vec3::Y);
        probe.begin_tick(Vec3::new(0.0, 0.4, 0.0), 1.0 / 60.0);

        assert!(
            !probe.is_grounded(true, 0.5),
            "strict query should reject a surface beyond the slope limit"
        );
        assert!(
            probe.is_grounded(false, 0.5),
            "loose query ignores the slope limit"
        );
    }

    #[test]
    fn test_disabling_slope_limit_accepts_steep_surface() {
        let mut world = CollisionWorld::new();
        world.add_static_ramp(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(5.0, 0.1, 5.0),
            60.0_f32.to_radians(),
        );
        let mut probe = RapierProbe::new(world, Vec3::Y);
        probe.begin_tick(Vec3::new(0.0, 0.4, 0.0), 1.0 / 60.0);

        probe.disable_slope_limit();
        assert!(probe.is_grounded(true, 0.5));
    }

    #[test]
    fn test_geometry_added_after_construction_is_seen() {
        let probe_world = CollisionWorld::new();
        let mut probe = RapierProbe::new(probe_world, Vec3::Y);
        probe.begin_tick(Vec3::new(0.0, 0.0, 0.0), 1.0 / 60.0);
        assert!(!probe.is_grounded(true, 0.5));

        probe
            .world_mut()
            .add_static_cuboid(Vec3::new(0.0, -0.5, 0.0), Vec3::new(50.0, 0.5, 50.0));
        probe.begin_tick(Vec3::new(0.0, 0.0, 0.0), 1.0 / 60.0);
        assert!(probe.is_grounded(true, 0.5));
    }
}
