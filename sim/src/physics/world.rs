//! Rapier-backed dynamics world with a keep-alive registry of everything it creates.
//!
//! Every body created through the binding layer is recorded as a [`BodyRecord`]
//! (rigid body + collider + optional sensor collider + declared shape/mass/inertia)
//! and referenced from entities and constraints by [`BodyId`]. The records are the
//! only owners; teardown removes constraints, then sensors, then bodies, before the
//! records are dropped.
//!
//! Conventions
//! - `mass == 0` means a fixed (static) body: no inertia is computed and applied
//!   forces have no effect.
//! - Forces applied through [`PhysicsWorld::apply_central_force`] act for exactly one
//!   step; they are cleared after every [`PhysicsWorld::step_simulation`].

use std::collections::HashMap;

use rapier3d::na::{Point3, Translation3};
use rapier3d::prelude::*;

use super::hooks::IgnoredPairs;
use super::{BodyId, BodyShape, JointId, PhysicsSettings};
use crate::constants::PROJECTILE_RADIUS;
use crate::contact::ContactSource;
use crate::entity::Entity;
use crate::error::SimError;
use crate::types::{Iso, Quat, Vec3};

/// Everything created for one body, kept alive for the lifetime of the world.
#[derive(Clone, Debug)]
pub struct BodyRecord {
    pub shape: BodyShape,
    pub mass: f32,
    /// Diagonal local inertia; zero for fixed bodies.
    pub local_inertia: Vec3,
    body: RigidBodyHandle,
    collider: ColliderHandle,
    sensor: Option<ColliderHandle>,
}

impl BodyRecord {
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    pub fn has_sensor(&self) -> bool {
        self.sensor.is_some()
    }
}

/// Kind and local placement of a constraint between two bodies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstraintKind {
    /// One rotational degree of freedom about `axis`, pivoting at the given
    /// anchor on each body (body-local coordinates).
    Hinge {
        anchor_a: Vec3,
        anchor_b: Vec3,
        axis: Vec3,
    },
    /// No relative motion; each body sees the joint at its local frame.
    Fixed { frame_a: Iso, frame_b: Iso },
}

#[derive(Clone, Debug)]
pub struct ConstraintRecord {
    pub kind: ConstraintKind,
    pub body_a: BodyId,
    pub body_b: BodyId,
    handle: ImpulseJointHandle,
}

/// Owner of the rapier world and of every body/constraint record.
pub struct PhysicsWorld {
    settings: PhysicsSettings,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    ignored: IgnoredPairs,

    records: Vec<BodyRecord>,
    constraints: Vec<ConstraintRecord>,
    /// Reverse lookup used when walking contact pairs.
    ids_by_handle: HashMap<RigidBodyHandle, BodyId>,
    /// Bodies that received a force since the last step.
    forced: Vec<RigidBodyHandle>,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsSettings::default())
    }
}

impl PhysicsWorld {
    pub fn new(settings: PhysicsSettings) -> Self {
        Self {
            settings,
            gravity: settings.gravity,
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            ignored: IgnoredPairs::default(),
            records: Vec::new(),
            constraints: Vec::new(),
            ids_by_handle: HashMap::new(),
            forced: Vec::new(),
        }
    }

    /// Box body; fixed when `mass == 0`, dynamic otherwise. Attaches the new id to `entity`.
    pub fn add_rigid_body(
        &mut self,
        entity: &mut Entity,
        origin: Vec3,
        half_extents: Vec3,
        mass: f32,
    ) -> Result<BodyId, SimError> {
        let id = self.insert_body(origin, BodyShape::Cuboid { half_extents }, mass, false);
        entity.attach_physics(Some(id))?;
        Ok(id)
    }

    /// Same as [`Self::add_rigid_body`] plus a matching sensor collider that reports
    /// overlaps without contact response.
    pub fn add_sensor_body(
        &mut self,
        entity: &mut Entity,
        origin: Vec3,
        half_extents: Vec3,
        mass: f32,
    ) -> Result<BodyId, SimError> {
        let id = self.insert_body(origin, BodyShape::Cuboid { half_extents }, mass, true);
        entity.attach_physics(Some(id))?;
        Ok(id)
    }

    /// Dynamic sphere used for projectiles.
    ///
    /// The requested size is accepted for API symmetry with the box builders but the
    /// radius is always [`PROJECTILE_RADIUS`].
    pub fn add_sphere_body(
        &mut self,
        entity: &mut Entity,
        origin: Vec3,
        _radius_vector: Vec3,
        mass: f32,
    ) -> Result<BodyId, SimError> {
        let shape = BodyShape::Ball {
            radius: PROJECTILE_RADIUS,
        };
        let id = self.insert_body(origin, shape, mass, false);
        entity.attach_physics(Some(id))?;
        Ok(id)
    }

    fn insert_body(&mut self, origin: Vec3, shape: BodyShape, mass: f32, with_sensor: bool) -> BodyId {
        let is_static = mass == 0.0;

        let builder = if is_static {
            RigidBodyBuilder::fixed()
        } else {
            RigidBodyBuilder::dynamic()
        };
        let body = self.bodies.insert(builder.translation(origin).build());

        let local_inertia = if is_static {
            Vec3::zeros()
        } else {
            shape.local_inertia(mass)
        };

        let mut collider = shape
            .collider_builder()
            .restitution(self.settings.restitution)
            .friction(self.settings.friction)
            .friction_combine_rule(CoefficientCombineRule::Multiply);
        if !is_static {
            collider = collider.mass(mass);
        }
        let collider = self
            .colliders
            .insert_with_parent(collider.build(), body, &mut self.bodies);

        // Zero density keeps the sensor from changing the body's mass.
        let sensor = with_sensor.then(|| {
            let sensor = shape.collider_builder().sensor(true).density(0.0).build();
            self.colliders
                .insert_with_parent(sensor, body, &mut self.bodies)
        });

        let id = BodyId(self.records.len() as u32);
        self.records.push(BodyRecord {
            shape,
            mass,
            local_inertia,
            body,
            collider,
            sensor,
        });
        self.ids_by_handle.insert(body, id);
        id
    }

    /// Hinge between `a` and `b`. Contacts between the two bodies are disabled.
    pub fn add_hinge(
        &mut self,
        a: BodyId,
        b: BodyId,
        anchor_a: Vec3,
        anchor_b: Vec3,
        axis: Vec3,
    ) -> Result<JointId, SimError> {
        let joint = RevoluteJointBuilder::new(UnitVector::new_normalize(axis))
            .local_anchor1(Point3::from(anchor_a))
            .local_anchor2(Point3::from(anchor_b))
            .contacts_enabled(false);
        self.insert_constraint(
            a,
            b,
            ConstraintKind::Hinge {
                anchor_a,
                anchor_b,
                axis,
            },
            joint.into(),
        )
    }

    /// Fixed joint between `a` and `b`. Contacts between the two bodies are disabled.
    pub fn add_fixed(
        &mut self,
        a: BodyId,
        b: BodyId,
        frame_a: Iso,
        frame_b: Iso,
    ) -> Result<JointId, SimError> {
        let joint = FixedJointBuilder::new()
            .local_frame1(frame_a)
            .local_frame2(frame_b)
            .contacts_enabled(false);
        self.insert_constraint(a, b, ConstraintKind::Fixed { frame_a, frame_b }, joint.into())
    }

    fn insert_constraint(
        &mut self,
        a: BodyId,
        b: BodyId,
        kind: ConstraintKind,
        joint: GenericJoint,
    ) -> Result<JointId, SimError> {
        let handle_a = self.record(a)?.body;
        let handle_b = self.record(b)?.body;
        let handle = self.impulse_joints.insert(handle_a, handle_b, joint, true);

        let id = JointId(self.constraints.len() as u32);
        self.constraints.push(ConstraintRecord {
            kind,
            body_a: a,
            body_b: b,
            handle,
        });
        Ok(id)
    }

    /// Disable contact response between `a` and `b`, in both directions.
    pub fn ignore_collision(&mut self, a: BodyId, b: BodyId) -> Result<(), SimError> {
        let handle_a = self.record(a)?.body;
        let handle_b = self.record(b)?.body;
        self.ignored.insert(handle_a, handle_b);

        for id in [a, b] {
            let record = &self.records[id.index()];
            if let Some(collider) = self.colliders.get_mut(record.collider) {
                collider.set_active_hooks(collider.active_hooks() | ActiveHooks::FILTER_CONTACT_PAIRS);
            }
        }
        Ok(())
    }

    pub fn is_collision_ignored(&self, a: BodyId, b: BodyId) -> bool {
        match (self.record(a), self.record(b)) {
            (Ok(ra), Ok(rb)) => self.ignored.contains(ra.body, rb.body),
            _ => false,
        }
    }

    /// Keep the body awake forever (tank parts must respond to input at any time).
    pub fn disable_sleeping(&mut self, id: BodyId) -> Result<(), SimError> {
        let rb = self.rigid_body_mut(id)?;
        *rb.activation_mut() = RigidBodyActivation::cannot_sleep();
        Ok(())
    }

    /// Advance the world by `dt` seconds, then clear every force applied since the
    /// previous step.
    pub fn step_simulation(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &self.ignored,
            &(),
        );

        for handle in self.forced.drain(..) {
            if let Some(rb) = self.bodies.get_mut(handle) {
                rb.reset_forces(false);
            }
        }
    }

    pub fn record(&self, id: BodyId) -> Result<&BodyRecord, SimError> {
        self.records.get(id.index()).ok_or(SimError::UnknownBody(id))
    }

    fn rigid_body(&self, id: BodyId) -> Result<&RigidBody, SimError> {
        let handle = self.record(id)?.body;
        self.bodies.get(handle).ok_or(SimError::UnknownBody(id))
    }

    fn rigid_body_mut(&mut self, id: BodyId) -> Result<&mut RigidBody, SimError> {
        let handle = self.record(id)?.body;
        self.bodies.get_mut(handle).ok_or(SimError::UnknownBody(id))
    }

    /// Current world placement of the body.
    pub fn transform(&self, id: BodyId) -> Result<Iso, SimError> {
        let rb = self.rigid_body(id)?;
        Ok(Iso::from_parts(Translation3::from(*rb.translation()), *rb.rotation()))
    }

    pub fn translation(&self, id: BodyId) -> Result<Vec3, SimError> {
        Ok(*self.rigid_body(id)?.translation())
    }

    pub fn rotation(&self, id: BodyId) -> Result<Quat, SimError> {
        Ok(*self.rigid_body(id)?.rotation())
    }

    pub fn linear_velocity(&self, id: BodyId) -> Result<Vec3, SimError> {
        Ok(*self.rigid_body(id)?.linvel())
    }

    /// Move the body without touching its velocity (used for scripted fixed bodies).
    pub fn set_translation(&mut self, id: BodyId, translation: Vec3) -> Result<(), SimError> {
        self.rigid_body_mut(id)?.set_translation(translation, true);
        Ok(())
    }

    /// Hard reset: place the body at `pose` and discard its velocity and pending forces.
    pub fn teleport(&mut self, id: BodyId, pose: Iso) -> Result<(), SimError> {
        let rb = self.rigid_body_mut(id)?;
        rb.set_translation(pose.translation.vector, true);
        rb.set_rotation(pose.rotation, true);
        rb.set_linvel(Vector::zeros(), true);
        rb.set_angvel(Vector::zeros(), true);
        rb.reset_forces(true);
        rb.reset_torques(true);
        Ok(())
    }

    /// Force through the center of mass for the next step. No effect on fixed bodies.
    pub fn apply_central_force(&mut self, id: BodyId, force: Vec3) -> Result<(), SimError> {
        let rb = self.rigid_body_mut(id)?;
        rb.add_force(force, true);
        let handle = self.records[id.index()].body;
        self.forced.push(handle);
        Ok(())
    }

    pub fn is_static(&self, id: BodyId) -> Result<bool, SimError> {
        Ok(self.rigid_body(id)?.is_fixed())
    }

    pub fn local_inertia(&self, id: BodyId) -> Result<Vec3, SimError> {
        Ok(self.record(id)?.local_inertia)
    }

    /// Radius of a sphere body, `None` for boxes.
    pub fn ball_radius(&self, id: BodyId) -> Result<Option<f32>, SimError> {
        let collider = self
            .colliders
            .get(self.record(id)?.collider)
            .ok_or(SimError::UnknownBody(id))?;
        Ok(collider.shape().as_ball().map(|ball| ball.radius))
    }

    pub fn is_sensor_attached(&self, id: BodyId) -> Result<bool, SimError> {
        let record = self.record(id)?;
        Ok(record
            .sensor
            .and_then(|handle| self.colliders.get(handle))
            .is_some_and(|collider| collider.is_sensor()))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn collider_count(&self) -> usize {
        self.colliders.len()
    }

    pub fn constraint_count(&self) -> usize {
        self.impulse_joints.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn constraints(&self) -> &[ConstraintRecord] {
        &self.constraints
    }

    fn body_of_collider(&self, handle: ColliderHandle) -> Option<BodyId> {
        let parent = self.colliders.get(handle)?.parent()?;
        self.ids_by_handle.get(&parent).copied()
    }

    /// Remove constraints, then sensor colliders, then bodies (with their remaining
    /// colliders) from the world, and drop the records. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.records.is_empty() && self.constraints.is_empty() {
            return;
        }
        let (n_bodies, n_constraints) = (self.records.len(), self.constraints.len());

        for constraint in self.constraints.drain(..) {
            self.impulse_joints.remove(constraint.handle, false);
        }
        for record in &self.records {
            if let Some(sensor) = record.sensor {
                self.colliders
                    .remove(sensor, &mut self.islands, &mut self.bodies, false);
            }
        }
        for record in &self.records {
            self.bodies.remove(
                record.body,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            );
        }

        self.records.clear();
        self.ids_by_handle.clear();
        self.ignored.clear();
        self.forced.clear();
        log::info!("physics world torn down ({n_bodies} bodies, {n_constraints} constraints)");
    }
}

impl ContactSource for PhysicsWorld {
    fn for_each_contact(&self, visit: &mut dyn FnMut(BodyId, BodyId, f32)) {
        for pair in self.narrow_phase.contact_pairs() {
            let (Some(a), Some(b)) = (
                self.body_of_collider(pair.collider1),
                self.body_of_collider(pair.collider2),
            ) else {
                continue;
            };
            for manifold in &pair.manifolds {
                for point in &manifold.points {
                    visit(a, b, point.dist);
                }
            }
        }
    }
}

impl Drop for PhysicsWorld {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIXED_DT;
    use crate::entity::EntityRegistry;

    fn world_with_entities(names: &[&str]) -> (PhysicsWorld, EntityRegistry) {
        let mut entities = EntityRegistry::default();
        for name in names {
            entities.create(name).unwrap();
        }
        (PhysicsWorld::default(), entities)
    }

    #[test]
    fn zero_mass_body_is_static_without_inertia() {
        let (mut world, mut entities) = world_with_entities(&["ground"]);
        let ground = entities.id_of("ground").unwrap();
        let body = world
            .add_rigid_body(&mut entities[ground], Vec3::new(0.0, -2.0, 0.0), Vec3::new(15.0, 1.0, 25.0), 0.0)
            .unwrap();

        assert_eq!(entities[ground].body(), Some(body));
        assert!(world.is_static(body).unwrap());
        assert!(world.record(body).unwrap().is_static());
        assert_eq!(world.local_inertia(body).unwrap(), Vec3::zeros());
    }

    #[test]
    fn static_body_ignores_applied_force() {
        let (mut world, mut entities) = world_with_entities(&["wall"]);
        let wall = entities.id_of("wall").unwrap();
        let origin = Vec3::new(16.0, 3.0, 15.0);
        let body = world
            .add_rigid_body(&mut entities[wall], origin, Vec3::new(1.0, 5.0, 10.0), 0.0)
            .unwrap();

        for _ in 0..30 {
            world.apply_central_force(body, Vec3::new(1000.0, 0.0, 0.0)).unwrap();
            world.step_simulation(FIXED_DT);
        }
        assert_eq!(world.translation(body).unwrap(), origin);
    }

    #[test]
    fn dynamic_body_records_inertia_and_falls() {
        let (mut world, mut entities) = world_with_entities(&["crate"]);
        let id = entities.id_of("crate").unwrap();
        let body = world
            .add_rigid_body(&mut entities[id], Vec3::new(0.0, 10.0, 0.0), Vec3::new(1.0, 1.0, 1.0), 3.0)
            .unwrap();

        assert!(!world.is_static(body).unwrap());
        assert_eq!(world.local_inertia(body).unwrap(), Vec3::new(2.0, 2.0, 2.0));

        for _ in 0..10 {
            world.step_simulation(FIXED_DT);
        }
        assert!(world.translation(body).unwrap().y < 10.0);
    }

    #[test]
    fn sensor_body_owns_a_matching_sensor_collider() {
        let (mut world, mut entities) = world_with_entities(&["key", "crate"]);
        let key = entities.id_of("key").unwrap();
        let plain = entities.id_of("crate").unwrap();
        let key_body = world
            .add_sensor_body(&mut entities[key], Vec3::zeros(), Vec3::new(0.25, 1.0, 2.0), 1.0)
            .unwrap();
        let plain_body = world
            .add_rigid_body(&mut entities[plain], Vec3::new(5.0, 0.0, 0.0), Vec3::repeat(1.0), 1.0)
            .unwrap();

        assert!(world.record(key_body).unwrap().has_sensor());
        assert!(world.is_sensor_attached(key_body).unwrap());
        assert!(!world.is_sensor_attached(plain_body).unwrap());
        assert_eq!(world.collider_count(), 3);
        assert_eq!(world.body_count(), 2);
    }

    #[test]
    fn sphere_radius_ignores_requested_size() {
        let (mut world, mut entities) = world_with_entities(&["shot"]);
        let shot = entities.id_of("shot").unwrap();
        let body = world
            .add_sphere_body(&mut entities[shot], Vec3::zeros(), Vec3::repeat(0.25), 1.0)
            .unwrap();

        assert_eq!(world.ball_radius(body).unwrap(), Some(PROJECTILE_RADIUS));
        let expected = 0.4 * PROJECTILE_RADIUS * PROJECTILE_RADIUS;
        assert!((world.local_inertia(body).unwrap().x - expected).abs() < 1e-7);
    }

    #[test]
    fn applied_force_lasts_one_step() {
        let mut world = PhysicsWorld::new(PhysicsSettings {
            gravity: Vec3::zeros(),
            ..PhysicsSettings::default()
        });
        let mut entities = EntityRegistry::default();
        let id = entities.create("puck").unwrap();
        let body = world
            .add_rigid_body(&mut entities[id], Vec3::zeros(), Vec3::repeat(0.5), 1.0)
            .unwrap();

        world.apply_central_force(body, Vec3::new(60.0, 0.0, 0.0)).unwrap();
        world.step_simulation(FIXED_DT);
        let after_push = world.linear_velocity(body).unwrap().x;
        assert!(after_push > 0.5);

        world.step_simulation(FIXED_DT);
        let coasting = world.linear_velocity(body).unwrap().x;
        assert!((coasting - after_push).abs() < 1e-3);
    }

    #[test]
    fn teleport_discards_velocity() {
        let (mut world, mut entities) = world_with_entities(&["shot"]);
        let shot = entities.id_of("shot").unwrap();
        let body = world
            .add_sphere_body(&mut entities[shot], Vec3::new(0.0, 5.0, 0.0), Vec3::repeat(0.1), 1.0)
            .unwrap();
        for _ in 0..20 {
            world.step_simulation(FIXED_DT);
        }
        assert!(world.linear_velocity(body).unwrap().norm() > 0.0);

        let target = Iso::translation(3.0, 4.0, 5.0);
        world.teleport(body, target).unwrap();
        assert_eq!(world.translation(body).unwrap(), Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(world.linear_velocity(body).unwrap(), Vec3::zeros());
    }

    #[test]
    fn constraints_require_known_bodies() {
        let (mut world, mut entities) = world_with_entities(&["a", "b"]);
        let a = entities.id_of("a").unwrap();
        let b = entities.id_of("b").unwrap();
        let body_a = world
            .add_rigid_body(&mut entities[a], Vec3::zeros(), Vec3::repeat(1.0), 1.0)
            .unwrap();
        let body_b = world
            .add_rigid_body(&mut entities[b], Vec3::new(2.0, 0.0, 0.0), Vec3::repeat(1.0), 1.0)
            .unwrap();

        let hinge = world
            .add_hinge(body_a, body_b, Vec3::new(1.0, 0.0, 0.0), Vec3::zeros(), Vec3::y())
            .unwrap();
        let fixed = world
            .add_fixed(body_a, body_b, Iso::translation(0.0, 0.5, 0.0), Iso::identity())
            .unwrap();
        assert_eq!(hinge.index(), 0);
        assert_eq!(fixed.index(), 1);
        assert_eq!(world.constraint_count(), 2);
        assert!(matches!(world.constraints()[0].kind, ConstraintKind::Hinge { .. }));

        let stale = BodyId(99);
        assert_eq!(
            world.add_hinge(body_a, stale, Vec3::zeros(), Vec3::zeros(), Vec3::y()),
            Err(SimError::UnknownBody(stale))
        );
    }

    #[test]
    fn ignored_pair_lets_bodies_pass_through() {
        let run = |ignore: bool| {
            let (mut world, mut entities) = world_with_entities(&["floor", "box"]);
            let floor = entities.id_of("floor").unwrap();
            let falling = entities.id_of("box").unwrap();
            let floor_body = world
                .add_rigid_body(&mut entities[floor], Vec3::zeros(), Vec3::new(5.0, 0.5, 5.0), 0.0)
                .unwrap();
            let box_body = world
                .add_rigid_body(&mut entities[falling], Vec3::new(0.0, 2.0, 0.0), Vec3::repeat(0.5), 1.0)
                .unwrap();
            if ignore {
                world.ignore_collision(floor_body, box_body).unwrap();
                assert!(world.is_collision_ignored(box_body, floor_body));
            }
            for _ in 0..120 {
                world.step_simulation(FIXED_DT);
            }
            world.translation(box_body).unwrap().y
        };

        assert!(run(false) > 0.5);
        assert!(run(true) < -1.0);
    }

    #[test]
    fn teardown_empties_the_world_and_is_idempotent() {
        let (mut world, mut entities) = world_with_entities(&["a", "b"]);
        let a = entities.id_of("a").unwrap();
        let b = entities.id_of("b").unwrap();
        let body_a = world
            .add_sensor_body(&mut entities[a], Vec3::zeros(), Vec3::repeat(1.0), 1.0)
            .unwrap();
        let body_b = world
            .add_rigid_body(&mut entities[b], Vec3::new(3.0, 0.0, 0.0), Vec3::repeat(1.0), 1.0)
            .unwrap();
        world
            .add_fixed(body_a, body_b, Iso::identity(), Iso::identity())
            .unwrap();

        world.teardown();
        assert_eq!(world.body_count(), 0);
        assert_eq!(world.collider_count(), 0);
        assert_eq!(world.constraint_count(), 0);
        assert_eq!(world.record_count(), 0);
        assert_eq!(world.record(body_a).err(), Some(SimError::UnknownBody(body_a)));
        assert_eq!(world.transform(body_a), Err(SimError::UnknownBody(body_a)));

        world.teardown();
        world.step_simulation(FIXED_DT);
    }
}
