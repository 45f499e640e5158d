//! Static walkable geometry for the raycast ground probe.
//!
//! Wraps the Rapier collision sets behind a single [`CollisionWorld`] that
//! owns the scene the probe raycasts against. The locomotion core never
//! steps dynamics for the character itself — it integrates its own velocity
//! — so this world only hosts fixed bodies (floors, ramps, platforms).

use rapier3d::prelude::*;

/// Collision scene owning all Rapier state the ground probe queries.
pub struct CollisionWorld {
    /// Gravity for the pipeline step; irrelevant to fixed bodies but kept
    /// consistent with the locomotion tuning for any dynamic props.
    pub gravity: Vector,
    /// Timestep and solver configuration.
    pub integration_parameters: IntegrationParameters,
    /// The simulation pipeline; stepping it keeps the query acceleration
    /// structures current after geometry changes.
    pub physics_pipeline: PhysicsPipeline,
    /// Tracks sleeping/awake body islands.
    pub island_manager: IslandManager,
    /// Broad-phase collision detection (also provides the query pipeline).
    pub broad_phase: BroadPhaseBvh,
    /// Narrow-phase collision detection.
    pub narrow_phase: NarrowPhase,
    /// All rigid bodies in the scene.
    pub rigid_body_set: RigidBodySet,
    /// All colliders in the scene.
    pub collider_set: ColliderSet,
    /// Impulse-based joints (unused by fixed scenes, required by the step).
    pub impulse_joint_set: ImpulseJointSet,
    /// Multibody joints (unused by fixed scenes, required by the step).
    pub multibody_joint_set: MultibodyJointSet,
    /// Continuous collision detection solver.
    pub ccd_solver: CCDSolver,
}

impl CollisionWorld {
    /// Creates an empty scene with a `1/60` second timestep.
    pub fn new() -> Self {
        let integration_parameters = IntegrationParameters {
            dt: 1.0 / 60.0,
            ..Default::default()
        };

        Self {
            gravity: Vector::new(0.0, -25.0, 0.0),
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Adds a fixed cuboid — the usual floor or platform piece.
    ///
    /// `half_extents` are the cuboid's half sizes along each axis.
    pub fn add_static_cuboid(
        &mut self,
        center: glam::Vec3,
        half_extents: glam::Vec3,
    ) -> ColliderHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(Vector::new(center.x, center.y, center.z))
            .build();
        let handle = self.rigid_body_set.insert(body);
        let collider =
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set)
    }

    /// Adds a fixed ramp: a thin cuboid rotated `roll` radians about Z.
    ///
    /// Useful for exercising the slope-aware strict grounding query.
    pub fn add_static_ramp(
        &mut self,
        center: glam::Vec3,
        half_extents: glam::Vec3,
        roll: f32,
    ) -> ColliderHandle {
        let body = RigidBodyBuilder::fixed()
            .translation(Vector::new(center.x, center.y, center.z))
            .rotation(Vector::new(0.0, 0.0, roll))
            .build();
        let handle = self.rigid_body_set.insert(body);
        let collider =
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z).build();
        self.collider_set
            .insert_with_parent(collider, handle, &mut self.rigid_body_set)
    }

    /// Advances the pipeline by one timestep.
    ///
    /// Fixed scenes do not move, but stepping refreshes the broad phase so
    /// queries see colliders added since the last step.
    pub fn step(&mut self) {
        self.physics_pipeline.step(
            self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}
