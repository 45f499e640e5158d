//! The four-state locomotion machine driving velocity integration and
//! facing updates.

use glam::Vec3;
use strider_ground::GroundSensor;
use strider_input::{CameraBasis, InputSnapshot, resolve_direction};
use strider_math::{move_towards, project_onto_plane};
use tracing::debug;

use crate::{CharacterBody, LocomotionState, TurnEase};

/// Tuning constants plus the per-tick update for one character.
///
/// The machine itself is immutable during simulation; all mutable state
/// lives in the [`CharacterBody`] it updates. Constants are applied at
/// startup (from configuration) and never change mid-tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CharacterMachine {
    /// Top ground speed, units per second.
    pub move_speed: f32,
    /// Ground acceleration toward the movement target, units/s².
    pub move_acceleration: f32,
    /// Idle deceleration toward zero, units/s².
    pub friction_deceleration: f32,
    /// Stick magnitude below which movement input is treated as zero.
    pub move_dead_zone: f32,
    /// Stick magnitude below which facing input is treated as zero.
    /// Smaller than [`move_dead_zone`](Self::move_dead_zone) so facing keeps
    /// tracking light input that is not strong enough to walk.
    pub turn_dead_zone: f32,
    /// Airborne steering acceleration, units/s².
    pub airborne_acceleration: f32,
    /// Apex height of a jump, in units.
    pub jump_height: f32,
    /// Gravity magnitude along the body's `-up`, units/s².
    pub gravity: f32,
    /// Grounding tolerance for the strict "still standing" query.
    pub maintain_tolerance: f32,
    /// Grounding tolerance for the loose "freshly landed" query.
    pub acquire_tolerance: f32,
    /// Facing interpolation shared with the chase camera.
    pub turn: TurnEase,
}

impl Default for CharacterMachine {
    fn default() -> Self {
        Self {
            move_speed: 4.0,
            move_acceleration: 30.0,
            friction_deceleration: 10.0,
            move_dead_zone: 0.7,
            turn_dead_zone: 0.5,
            airborne_acceleration: 5.0,
            jump_height: 3.0,
            gravity: 25.0,
            maintain_tolerance: 0.5,
            acquire_tolerance: 0.01,
            turn: TurnEase::default(),
        }
    }
}

impl CharacterMachine {
    /// Initial upward speed that peaks a jump at `jump_height` under
    /// `gravity`.
    pub fn jump_speed(&self) -> f32 {
        (2.0 * self.jump_height * self.gravity).sqrt()
    }

    /// Runs one simulation tick for `body`.
    ///
    /// Fixed phase order, regardless of state:
    /// 1. resolve the movement and turn directions from the stick and the
    ///    camera basis, latching the last nonzero value of each;
    /// 2. evaluate the active state's priority checks — a transition runs
    ///    its enter effects immediately and consumes the tick, otherwise the
    ///    state's velocity update runs;
    /// 3. integrate `position += velocity * dt`;
    /// 4. step the facing toward the last nonzero turn direction.
    ///
    /// The facing update therefore always applies, in the air as much as on
    /// the ground, using whatever direction was last intentionally input.
    ///
    /// The caller refreshes `ground` (via
    /// [`GroundSensor::begin_tick`]) before invoking this; `dt` and the up
    /// vector are read from the oracle.
    pub fn tick<G: GroundSensor + ?Sized>(
        &self,
        body: &mut CharacterBody,
        input: &InputSnapshot,
        basis: &CameraBasis,
        ground: &mut G,
    ) {
        let dt = ground.delta_time();
        body.up = ground.up().normalize_or_zero();

        let move_dir = resolve_direction(input.stick, self.move_dead_zone, basis, body.up);
        let turn_dir = resolve_direction(input.stick, self.turn_dead_zone, basis, body.up);
        if turn_dir != Vec3::ZERO {
            body.last_turn_direction = turn_dir;
        }
        if move_dir != Vec3::ZERO {
            body.last_move_direction = move_dir;
        }

        let next = match body.state {
            LocomotionState::Idle => self.idle_tick(body, input, ground, move_dir, dt),
            LocomotionState::Walk => self.walk_tick(body, input, ground, move_dir, dt),
            LocomotionState::Jump => self.airborne_tick(body, ground, move_dir, dt, true),
            LocomotionState::Fall => self.airborne_tick(body, ground, move_dir, dt, false),
        };
        if let Some(next) = next {
            self.enter_state(body, ground, next);
        }

        body.position += body.velocity * dt;

        let facing = self
            .turn
            .step(body.facing, body.last_turn_direction, body.up, dt);
        body.set_facing(facing);
    }

    /// Still standing, at the generous tolerance.
    fn maintaining_ground<G: GroundSensor + ?Sized>(&self, ground: &G) -> bool {
        ground.is_grounded(true, self.maintain_tolerance)
    }

    /// Freshly touching down, at the tight tolerance.
    fn acquiring_ground<G: GroundSensor + ?Sized>(&self, ground: &G) -> bool {
        ground.is_grounded(false, self.acquire_tolerance)
    }

    fn idle_tick<G: GroundSensor + ?Sized>(
        &self,
        body: &mut CharacterBody,
        input: &InputSnapshot,
        ground: &G,
        move_dir: Vec3,
        dt: f32,
    ) -> Option<LocomotionState> {
        if input.jump_pressed {
            return Some(LocomotionState::Jump);
        }
        if !self.maintaining_ground(ground) {
            return Some(LocomotionState::Fall);
        }
        if move_dir != Vec3::ZERO {
            return Some(LocomotionState::Walk);
        }

        body.velocity = move_towards(body.velocity, Vec3::ZERO, self.friction_deceleration * dt);
        None
    }

    fn walk_tick<G: GroundSensor + ?Sized>(
        &self,
        body: &mut CharacterBody,
        input: &InputSnapshot,
        ground: &G,
        move_dir: Vec3,
        dt: f32,
    ) -> Option<LocomotionState> {
        if input.jump_pressed {
            return Some(LocomotionState::Jump);
        }
        if !self.maintaining_ground(ground) {
            return Some(LocomotionState::Fall);
        }
        if move_dir == Vec3::ZERO {
            return Some(LocomotionState::Idle);
        }

        body.velocity = move_towards(
            body.velocity,
            move_dir * self.move_speed,
            self.move_acceleration * dt,
        );
        None
    }

    /// Shared Jump/Fall update: land when descending onto fresh ground,
    /// otherwise steer the planar component and apply gravity.
    ///
    /// Jump keeps airborne steering; Fall leaves the planar component alone,
    /// matching its on-enter velocity.
    fn airborne_tick<G: GroundSensor + ?Sized>(
        &self,
        body: &mut CharacterBody,
        ground: &G,
        move_dir: Vec3,
        dt: f32,
        steering: bool,
    ) -> Option<LocomotionState> {
        let planar = project_onto_plane(body.up, body.velocity);
        let vertical = body.velocity - planar;

        // A jump may still overlap the launch surface, so it only lands once
        // the vertical component has turned downward. Fall has no such
        // guard: fresh contact at the tight tolerance is enough.
        let may_land = !steering || vertical.dot(body.up) < 0.0;
        if may_land && self.acquiring_ground(ground) {
            body.velocity = planar;
            return Some(LocomotionState::Idle);
        }

        let planar = if steering {
            move_towards(
                planar,
                move_dir * self.move_speed,
                self.airborne_acceleration * dt,
            )
        } else {
            planar
        };
        let vertical = vertical - body.up * self.gravity * dt;
        body.velocity = planar + vertical;
        None
    }

    /// Runs the enter side effects for `next` and records the transition.
    ///
    /// The clamping/slope-limit toggles are idempotent. Jump's entry impulse
    /// happens here, before this tick's position integration.
    fn enter_state<G: GroundSensor + ?Sized>(
        &self,
        body: &mut CharacterBody,
        ground: &mut G,
        next: LocomotionState,
    ) {
        match next {
            LocomotionState::Idle | LocomotionState::Walk => {
                ground.enable_slope_limit();
                ground.enable_clamping();
            }
            LocomotionState::Jump => {
                ground.disable_clamping();
                ground.disable_slope_limit();
                body.velocity += body.up * self.jump_speed();
            }
            LocomotionState::Fall => {
                ground.disable_clamping();
                ground.disable_slope_limit();
            }
        }
        debug!(from = ?body.state, to = ?next, "locomotion transition");
        body.state = next;
    }
}
