//! The player tank: two tracks hinged to a chassis, a turret and cannon welded
//! on top, and a fixed pool of projectiles fired round-robin from the cannon.

use crate::constants::{MUZZLE_OFFSET, PROJECTILE_PARK_HEIGHT, SHOOTING_FORCE, SPHERE_MODEL_PATH};
use crate::entity::{Entity, EntityId, EntityRegistry};
use crate::error::SimError;
use crate::graphics::SceneGraph;
use crate::level::{PartDef, TankLayout};
use crate::physics::{BodyId, JointId, PhysicsWorld};
use crate::types::{Iso, Quat, Vec3};

pub const LEFT_TRACK: &str = "leftTrack";
pub const RIGHT_TRACK: &str = "rightTrack";
pub const CHASSIS: &str = "chassis";
pub const TURRET: &str = "turret";
pub const CANNON: &str = "cannon";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TankJoints {
    pub left_hinge: JointId,
    pub right_hinge: JointId,
    pub turret_mount: JointId,
    pub cannon_mount: JointId,
}

#[derive(Debug)]
pub struct Tank {
    pub left_track: EntityId,
    pub right_track: EntityId,
    pub chassis: EntityId,
    pub turret: EntityId,
    pub cannon: EntityId,
    joints: Option<TankJoints>,
    projectiles: Vec<EntityId>,
    cursor: usize,
}

impl Tank {
    /// Allocate the five part entities and `capacity` projectile entities, all
    /// without components.
    pub fn new(entities: &mut EntityRegistry, capacity: usize) -> Result<Self, SimError> {
        if capacity == 0 {
            return Err(SimError::EmptyProjectilePool);
        }
        let projectiles = (0..capacity)
            .map(|i| entities.create(&format!("projectile{i}")))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            left_track: entities.create(LEFT_TRACK)?,
            right_track: entities.create(RIGHT_TRACK)?,
            chassis: entities.create(CHASSIS)?,
            turret: entities.create(TURRET)?,
            cannon: entities.create(CANNON)?,
            joints: None,
            projectiles,
            cursor: 0,
        })
    }

    /// Give every part and projectile its body and render node, then join the parts.
    pub fn assemble(
        &mut self,
        layout: &TankLayout,
        entities: &mut EntityRegistry,
        physics: &mut PhysicsWorld,
        graphics: &mut SceneGraph,
    ) -> Result<(), SimError> {
        let left = attach_part(self.left_track, &layout.left_track, true, entities, physics, graphics)?;
        let right = attach_part(self.right_track, &layout.right_track, true, entities, physics, graphics)?;
        let chassis = attach_part(self.chassis, &layout.chassis, true, entities, physics, graphics)?;
        let turret = attach_part(self.turret, &layout.turret, false, entities, physics, graphics)?;
        let cannon = attach_part(self.cannon, &layout.cannon, false, entities, physics, graphics)?;

        for body in [left, right, chassis] {
            physics.disable_sleeping(body)?;
        }

        let axis = Vec3::y();
        self.joints = Some(TankJoints {
            left_hinge: physics.add_hinge(chassis, left, layout.left_hinge_anchor, Vec3::zeros(), axis)?,
            right_hinge: physics.add_hinge(chassis, right, layout.right_hinge_anchor, Vec3::zeros(), axis)?,
            turret_mount: physics.add_fixed(
                chassis,
                turret,
                Iso::translation(layout.turret_frame.x, layout.turret_frame.y, layout.turret_frame.z),
                Iso::identity(),
            )?,
            cannon_mount: physics.add_fixed(
                turret,
                cannon,
                Iso::translation(layout.cannon_frame.x, layout.cannon_frame.y, layout.cannon_frame.z),
                Iso::identity(),
            )?,
        });

        let cannon_pose = entities[self.cannon].transform(physics);
        let park = cannon_pose.translation.vector
            + cannon_pose.rotation * Vec3::new(0.0, PROJECTILE_PARK_HEIGHT, -MUZZLE_OFFSET);
        let scale = Vec3::repeat(layout.projectile_scale);
        for &slot in &self.projectiles {
            let entity = &mut entities[slot];
            let node = graphics.add_model(entity.name(), SPHERE_MODEL_PATH, scale, layout.projectile_color);
            entity.attach_graphics(Some(node))?;
            entity.position = park;
            entity.scale = scale;
            physics.add_sphere_body(entity, park, scale, layout.projectile_mass)?;
            entity.set_active(false, graphics);
        }

        log::info!(
            "tank assembled with {} projectile slots",
            self.projectiles.len()
        );
        Ok(())
    }

    pub fn parts(&self) -> [EntityId; 5] {
        [self.left_track, self.right_track, self.chassis, self.turret, self.cannon]
    }

    /// Left track, right track and chassis: the parts that touch the ground.
    pub fn drive_parts(&self) -> [EntityId; 3] {
        [self.left_track, self.right_track, self.chassis]
    }

    pub fn joints(&self) -> Option<TankJoints> {
        self.joints
    }

    pub fn projectiles(&self) -> &[EntityId] {
        &self.projectiles
    }

    pub fn capacity(&self) -> usize {
        self.projectiles.len()
    }

    /// Index of the slot the next shot will use.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn chassis_rotation(&self, entities: &EntityRegistry, physics: &PhysicsWorld) -> Quat {
        entities[self.chassis].transform(physics).rotation
    }

    /// Push both tracks with the same chassis-local force.
    pub fn apply_drive_force(
        &self,
        force: Vec3,
        rotation: Quat,
        entities: &EntityRegistry,
        physics: &mut PhysicsWorld,
    ) {
        let world_force = rotation * force;
        for track in [self.left_track, self.right_track] {
            push(&entities[track], world_force, physics);
        }
    }

    /// Push each track with its own chassis-local force.
    pub fn apply_turn_force(
        &self,
        left: Vec3,
        right: Vec3,
        rotation: Quat,
        entities: &EntityRegistry,
        physics: &mut PhysicsWorld,
    ) {
        push(&entities[self.left_track], rotation * left, physics);
        push(&entities[self.right_track], rotation * right, physics);
    }

    /// Launch the projectile at the cursor from the cannon muzzle and advance the
    /// cursor. Returns the fired slot.
    pub fn fire_projectile(
        &mut self,
        entities: &mut EntityRegistry,
        physics: &mut PhysicsWorld,
        graphics: &mut SceneGraph,
    ) -> usize {
        let cannon = entities[self.cannon].transform(physics);
        let spawn = muzzle_point(&cannon);
        let direction = firing_direction(&cannon);

        let slot = self.cursor;
        let projectile = &mut entities[self.projectiles[slot]];
        projectile.set_active(true, graphics);
        match projectile.body() {
            Some(body) => launch(physics, body, spawn, direction),
            None => log::warn!("projectile slot {slot} has no body"),
        }

        self.cursor = (self.cursor + 1) % self.projectiles.len();
        slot
    }
}

fn attach_part(
    id: EntityId,
    part: &PartDef,
    sensor: bool,
    entities: &mut EntityRegistry,
    physics: &mut PhysicsWorld,
    graphics: &mut SceneGraph,
) -> Result<BodyId, SimError> {
    let entity = &mut entities[id];
    let node = graphics.add_cube(entity.name(), part.half_extents, part.color);
    entity.attach_graphics(Some(node))?;
    entity.position = part.position;
    entity.scale = part.half_extents;
    if sensor {
        physics.add_sensor_body(entity, part.position, part.half_extents, part.mass)
    } else {
        physics.add_rigid_body(entity, part.position, part.half_extents, part.mass)
    }
}

fn push(track: &Entity, force: Vec3, physics: &mut PhysicsWorld) {
    let Some(body) = track.body() else {
        return;
    };
    if let Err(err) = physics.apply_central_force(body, force) {
        log::debug!("track `{}`: {err}", track.name());
    }
}

fn launch(physics: &mut PhysicsWorld, body: BodyId, spawn: Vec3, direction: Vec3) {
    let result = physics
        .teleport(body, Iso::translation(spawn.x, spawn.y, spawn.z))
        .and_then(|()| physics.apply_central_force(body, direction * SHOOTING_FORCE));
    if let Err(err) = result {
        log::warn!("projectile launch failed: {err}");
    }
}

/// Point half a unit in front of the cannon origin, along its local -Z.
pub fn muzzle_point(cannon: &Iso) -> Vec3 {
    cannon.translation.vector + cannon.rotation * Vec3::new(0.0, 0.0, -MUZZLE_OFFSET)
}

/// Unit vector along the cannon's local -Z.
pub fn firing_direction(cannon: &Iso) -> Vec3 {
    cannon.rotation * Vec3::new(0.0, 0.0, -1.0)
}
