//! Trailing chase camera driven by the shared turn-ease controller.

use bevy_ecs::prelude::*;
use glam::Vec3;
use strider_input::CameraBasis;
use strider_locomotion::{ActiveCameraBasis, CharacterBody, LocomotionState, SimTime, TurnEase};
use strider_math::planar_direction;

/// Tuning for a chase camera following one character.
#[derive(Component, Clone, Copy, Debug)]
pub struct ChaseCamera {
    /// Distance behind the character along the camera's planar forward.
    pub back_follow: f32,
    /// Height above the character along the character's up vector.
    pub up_follow: f32,
    /// Half-angle of the back-facing cone (radians) inside which the camera
    /// holds its heading instead of chasing the turn direction. Stops the
    /// camera from whipping around when the player walks straight at it.
    pub rotation_dead_zone: f32,
    /// Reorientation tween, shared with the character body's facing update.
    pub turn: TurnEase,
}

impl Default for ChaseCamera {
    fn default() -> Self {
        Self {
            back_follow: 5.0,
            up_follow: 2.0,
            rotation_dead_zone: 45.0_f32.to_radians(),
            turn: TurnEase::default(),
        }
    }
}

/// A camera's pose: where it sits and where it looks.
#[derive(Component, Clone, Copy, Debug)]
pub struct CameraRig {
    /// World position of the camera.
    pub position: Vec3,
    /// Unit forward direction, horizontal relative to the character's up.
    pub forward: Vec3,
}

impl CameraRig {
    /// Rig looking along `forward` from `position`.
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self { position, forward }
    }
}

/// Advances one camera rig for one tick, reading the body only.
///
/// While the character walks, the rig's planar forward is stepped through
/// the turn-ease controller toward the character's last nonzero turn
/// direction — unless that direction falls inside the back-facing dead
/// zone, in which case the heading holds. The rig then trails the body by
/// `back_follow` and rises by `up_follow`.
pub fn follow_step(cam: &ChaseCamera, rig: &mut CameraRig, body: &CharacterBody, dt: f32) {
    let up = body.up();

    let mut forward = planar_direction(up, rig.forward);
    if forward == Vec3::ZERO {
        // Rig was looking straight along the up axis; recover a usable
        // heading from the body.
        forward = body.facing();
    }

    if body.state() == LocomotionState::Walk {
        let target = body.last_turn_direction();
        let back_angle = target.angle_between(-forward);
        if back_angle >= cam.rotation_dead_zone {
            forward = planar_direction(up, cam.turn.step(forward, target, up, dt));
        }
    }

    rig.forward = forward;
    rig.position = body.position() - forward * cam.back_follow + up * cam.up_follow;
}

/// Follow system for every rig; must be scheduled strictly after the
/// locomotion system so it reads this tick's body state, never last tick's.
///
/// Republishes the rig's planar basis as [`ActiveCameraBasis`] for the next
/// tick's input resolution.
pub fn chase_follow_system(
    time: Res<SimTime>,
    mut basis: ResMut<ActiveCameraBasis>,
    bodies: Query<&CharacterBody>,
    mut rigs: Query<(&ChaseCamera, &mut CameraRig)>,
) {
    let Ok(body) = bodies.get_single() else {
        return;
    };
    for (cam, mut rig) in rigs.iter_mut() {
        follow_step(cam, &mut rig, body, time.delta);
        basis.0 = CameraBasis::from_forward_up(rig.forward, body.up());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn walking_body(turn_toward: Vec3) -> CharacterBody {
        // Drive a real body into Walk so the camera sees an authentic state.
        use strider_ground::{GroundSensor, PlanarGround};
        use strider_input::{CameraBasis, InputSnapshot};
        use strider_locomotion::CharacterMachine;

        let machine = CharacterMachine::default();
        let mut body = CharacterBody::new(Vec3::ZERO, turn_toward, Vec3::Y);
        let mut ground = PlanarGround::new(0.0, Vec3::Y);
        let basis = CameraBasis::from_forward_up(turn_toward, Vec3::Y);
        for _ in 0..2 {
            ground.begin_tick(body.position(), DT);
            machine.tick(&mut body, &InputSnapshot::stick(0.0, 1.0), &basis, &mut ground);
        }
        assert_eq!(body.state(), LocomotionState::Walk);
        body
    }

    #[test]
    fn test_rig_trails_behind_and_above() {
        let cam = ChaseCamera::default();
        let body = CharacterBody::new(Vec3::new(1.0, 0.0, 2.0), Vec3::Z, Vec3::Y);
        let mut rig = CameraRig::new(Vec3::ZERO, Vec3::Z);

        follow_step(&cam, &mut rig, &body, DT);

        let expected =
            body.position() - Vec3::Z * cam.back_follow + Vec3::Y * cam.up_follow;
        assert!((rig.position - expected).length() < 1e-5);
    }

    #[test]
    fn test_idle_body_does_not_rotate_the_camera() {
        let cam = ChaseCamera::default();
        let body = CharacterBody::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        let mut rig = CameraRig::new(Vec3::ZERO, Vec3::Z);

        follow_step(&cam, &mut rig, &body, DT);
        assert!((rig.forward - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_walking_body_pulls_the_camera_around() {
        let cam = ChaseCamera::default();
        let body = walking_body(Vec3::X);
        // Camera looking 90° away from the walk direction.
        let mut rig = CameraRig::new(Vec3::ZERO, Vec3::Z);

        let before = rig.forward;
        follow_step(&cam, &mut rig, &body, DT);
        assert!(
            rig.forward.angle_between(Vec3::X) < before.angle_between(Vec3::X),
            "camera should rotate toward the turn direction"
        );
    }

    #[test]
    fn test_back_facing_dead_zone_holds_the_heading() {
        let cam = ChaseCamera::default();
        let body = walking_body(Vec3::Z);
        // Walking straight at the camera: target is dead on the rig's back.
        let mut rig = CameraRig::new(Vec3::ZERO, -Vec3::Z);

        follow_step(&cam, &mut rig, &body, DT);
        assert!(
            (rig.forward - -Vec3::Z).length() < 1e-6,
            "inside the dead zone the camera must not turn"
        );
    }

    #[test]
    fn test_convergence_settles_behind_the_walk_direction() {
        let cam = ChaseCamera::default();
        let body = walking_body(Vec3::X);
        let mut rig = CameraRig::new(Vec3::ZERO, Vec3::Z);

        for _ in 0..240 {
            follow_step(&cam, &mut rig, &body, DT);
        }
        assert!(
            rig.forward.angle_between(Vec3::X) < 0.05,
            "camera should settle looking along the walk direction"
        );
        let expected =
            body.position() - rig.forward * cam.back_follow + Vec3::Y * cam.up_follow;
        assert!((rig.position - expected).length() < 1e-4);
    }

    #[test]
    fn test_degenerate_rig_forward_recovers_from_body_facing() {
        let cam = ChaseCamera::default();
        let body = CharacterBody::new(Vec3::ZERO, Vec3::Z, Vec3::Y);
        let mut rig = CameraRig::new(Vec3::ZERO, Vec3::Y);

        follow_step(&cam, &mut rig, &body, DT);
        assert!((rig.forward - body.facing()).length() < 1e-6);
    }
}
