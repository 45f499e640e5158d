//! ECS resources and the per-tick locomotion system.
//!
//! The simulation runs single-threaded with a fixed phase order per tick:
//! the locomotion system mutates every [`CharacterBody`], and the camera
//! follow system (in the camera crate) runs strictly after it, reading the
//! bodies and republishing the camera basis. Hosts chain the two systems in
//! one schedule to enforce that ordering.

use bevy_ecs::prelude::*;
use strider_ground::GroundSensor;
use strider_input::{CameraBasis, InputSnapshot};

use crate::{CharacterBody, CharacterMachine};

/// Frame delta time, written by the host loop before each schedule run.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SimTime {
    /// Seconds covered by the current tick.
    pub delta: f32,
}

impl Default for SimTime {
    fn default() -> Self {
        Self { delta: 1.0 / 60.0 }
    }
}

/// This tick's immutable input snapshot.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct TickInput(pub InputSnapshot);

/// The camera basis the resolver reads; the camera follow system republishes
/// it at the end of each tick.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ActiveCameraBasis(pub CameraBasis);

impl Default for ActiveCameraBasis {
    fn default() -> Self {
        Self(CameraBasis::default())
    }
}

/// The grounding oracle shared by all characters.
#[derive(Resource)]
pub struct Ground(pub Box<dyn GroundSensor + Send + Sync>);

/// The machine (tuning constants) applied to every character.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct Machine(pub CharacterMachine);

/// Runs one locomotion tick for every character body.
///
/// Refreshes the oracle with the body's pre-update position, then hands the
/// body to [`CharacterMachine::tick`].
pub fn locomotion_system(
    machine: Res<Machine>,
    time: Res<SimTime>,
    input: Res<TickInput>,
    basis: Res<ActiveCameraBasis>,
    mut ground: ResMut<Ground>,
    mut bodies: Query<&mut CharacterBody>,
) {
    for mut body in bodies.iter_mut() {
        ground.0.begin_tick(body.position(), time.delta);
        machine.0.tick(&mut body, &input.0, &basis.0, ground.0.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};
    use strider_ground::PlanarGround;

    use crate::LocomotionState;

    fn test_world() -> (World, Schedule) {
        let mut world = World::new();
        world.insert_resource(SimTime::default());
        world.insert_resource(TickInput::default());
        world.insert_resource(ActiveCameraBasis::default());
        world.insert_resource(Ground(Box::new(PlanarGround::new(0.0, Vec3::Y))));
        world.insert_resource(Machine(CharacterMachine::default()));
        world.spawn(CharacterBody::new(Vec3::ZERO, Vec3::Z, Vec3::Y));

        let mut schedule = Schedule::default();
        schedule.add_systems(locomotion_system);
        (world, schedule)
    }

    #[test]
    fn test_system_drives_the_body_through_the_machine() {
        let (mut world, mut schedule) = test_world();
        world.resource_mut::<TickInput>().0 = InputSnapshot::stick(0.0, 1.0);

        for _ in 0..120 {
            schedule.run(&mut world);
        }

        let mut query = world.query::<&CharacterBody>();
        let body = query.get_single(&world).expect("one character");
        assert_eq!(body.state(), LocomotionState::Walk);
        assert!(body.position().z > 1.0);
    }

    #[test]
    fn test_system_respects_jump_edges() {
        let (mut world, mut schedule) = test_world();
        world.resource_mut::<TickInput>().0 = InputSnapshot {
            stick: Vec2::ZERO,
            jump_pressed: true,
        };
        schedule.run(&mut world);

        let mut query = world.query::<&CharacterBody>();
        let body = query.get_single(&world).expect("one character");
        assert_eq!(body.state(), LocomotionState::Jump);
    }
}
