/*!
Scene orchestrator.

Owns the physics world, the scene graph, the entity registry, the contact
mediator, the tank and the platform, and advances all of them one frame at a
time in a fixed order:

1. discrete input events (close, resize, fire)
2. held drive controls
3. one fixed physics step
4. platform
5. contacts and door
6. physics → render node transform sync

Presentation of the synced scene graph is left to the caller.
*/

use crate::constants::{DRIVE_FORCE, FIXED_DT};
use crate::contact::ContactMediator;
use crate::entity::{EntityId, EntityRegistry};
use crate::error::SimError;
use crate::graphics::SceneGraph;
use crate::level::{EntityDef, LevelDef, TankLayout};
use crate::physics::{PhysicsSettings, PhysicsWorld};
use crate::platform::{LinearPath, Platform};
use crate::tank::Tank;
use crate::types::{Vec3, vec3};

/// Discrete events drained at the start of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Close,
    Resized { width: u32, height: u32 },
    /// One shot per event.
    FirePressed,
}

/// Drive controls sampled every frame while held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldControls {
    pub forward: bool,
    pub backward: bool,
    pub turn_left: bool,
    pub turn_right: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub held: HeldControls,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameOutcome {
    pub running: bool,
    pub door_open: bool,
    /// Frames completed so far, this one included.
    pub frame: u64,
}

pub struct Scene {
    physics: PhysicsWorld,
    graphics: SceneGraph,
    entities: EntityRegistry,
    contacts: ContactMediator,
    tank: Option<Tank>,
    platform: Option<Platform>,
    running: bool,
    frame: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(PhysicsSettings::default())
    }
}

impl Scene {
    pub fn new(settings: PhysicsSettings) -> Self {
        Self {
            physics: PhysicsWorld::new(settings),
            graphics: SceneGraph::default(),
            entities: EntityRegistry::default(),
            contacts: ContactMediator::default(),
            tank: None,
            platform: None,
            running: true,
            frame: 0,
        }
    }

    /// Build every object a level describes.
    pub fn from_level(level: &LevelDef) -> Result<Self, SimError> {
        let mut scene = Self::default();
        for def in &level.scenery {
            scene.add_entity(def)?;
        }
        if let Some(door) = &level.door {
            scene.add_door(&door.entity, door.path)?;
        }
        if let Some(platform) = &level.platform {
            scene.add_platform(&platform.entity, platform.path)?;
        }
        if let Some(key) = &level.key {
            scene.add_key(&key.entity, key.model)?;
        }
        if let Some(layout) = &level.tank {
            scene.add_tank(layout)?;
        }
        log::info!(
            "level ready: {} entities, {} bodies, {} constraints",
            scene.entities.len(),
            scene.physics.body_count(),
            scene.physics.constraint_count()
        );
        Ok(scene)
    }

    /// Cube node plus box body.
    pub fn add_entity(&mut self, def: &EntityDef) -> Result<EntityId, SimError> {
        let id = self.entities.create(def.name)?;
        let entity = &mut self.entities[id];
        let node = self.graphics.add_cube(def.name, def.scale, def.color);
        entity.attach_graphics(Some(node))?;
        self.physics
            .add_rigid_body(entity, def.origin, def.half_extents, def.mass)?;
        entity.position = def.origin;
        entity.scale = def.scale;
        Ok(id)
    }

    /// Scenery entity that opens along `path` once the key is collected.
    pub fn add_door(&mut self, def: &EntityDef, path: LinearPath) -> Result<EntityId, SimError> {
        let id = self.add_entity(def)?;
        self.contacts
            .register_door(id, path, &self.entities, &mut self.physics);
        Ok(id)
    }

    /// Model node plus sensor body.
    pub fn add_key(&mut self, def: &EntityDef, model: &str) -> Result<EntityId, SimError> {
        let id = self.entities.create(def.name)?;
        let entity = &mut self.entities[id];
        let node = self.graphics.add_model(def.name, model, def.scale, def.color);
        entity.attach_graphics(Some(node))?;
        self.physics
            .add_sensor_body(entity, def.origin, def.half_extents, def.mass)?;
        entity.position = def.origin;
        entity.scale = def.scale;
        self.contacts.register_key(id);
        Ok(id)
    }

    pub fn add_platform(&mut self, def: &EntityDef, path: LinearPath) -> Result<EntityId, SimError> {
        let id = self.add_entity(def)?;
        self.platform = Some(Platform::new(id, path));
        Ok(id)
    }

    pub fn add_tank(&mut self, layout: &TankLayout) -> Result<(), SimError> {
        let mut tank = Tank::new(&mut self.entities, layout.projectile_capacity)?;
        tank.assemble(layout, &mut self.entities, &mut self.physics, &mut self.graphics)?;
        self.contacts
            .register_tank(&tank, &self.entities, &mut self.physics);
        self.tank = Some(tank);
        Ok(())
    }

    /// Run one frame. A `Close` event clears the running flag but the rest of the
    /// frame still executes.
    pub fn frame(&mut self, input: &FrameInput) -> FrameOutcome {
        for event in &input.events {
            match *event {
                InputEvent::Close => {
                    log::info!("close requested");
                    self.running = false;
                }
                InputEvent::Resized { width, height } => self.graphics.reset_viewport(width, height),
                InputEvent::FirePressed => {
                    if let Some(tank) = self.tank.as_mut() {
                        tank.fire_projectile(&mut self.entities, &mut self.physics, &mut self.graphics);
                    }
                }
            }
        }

        self.apply_held_controls(input.held);
        self.physics.step_simulation(FIXED_DT);

        if let Some(platform) = self.platform.as_mut() {
            platform.advance(&self.entities, &mut self.physics);
        }

        self.contacts
            .scan_contacts(&self.physics, &mut self.entities, &mut self.graphics);
        if self.contacts.door_open() {
            self.contacts.advance_door(&self.entities, &mut self.physics);
        }

        self.sync_transforms();
        self.frame += 1;

        FrameOutcome {
            running: self.running,
            door_open: self.contacts.door_open(),
            frame: self.frame,
        }
    }

    fn apply_held_controls(&mut self, held: HeldControls) {
        let Some(tank) = self.tank.as_ref() else {
            return;
        };
        let rotation = tank.chassis_rotation(&self.entities, &self.physics);
        let ahead = vec3(0.0, 0.0, -DRIVE_FORCE);
        let back = vec3(0.0, 0.0, DRIVE_FORCE);

        if held.forward {
            tank.apply_drive_force(ahead, rotation, &self.entities, &mut self.physics);
        }
        if held.backward {
            tank.apply_drive_force(back, rotation, &self.entities, &mut self.physics);
        }
        if held.turn_left {
            tank.apply_turn_force(back, ahead, rotation, &self.entities, &mut self.physics);
        }
        if held.turn_right {
            tank.apply_turn_force(ahead, back, rotation, &self.entities, &mut self.physics);
        }
    }

    /// Copy each body's pose onto its render node and reassert the entity scale.
    pub fn sync_transforms(&mut self) {
        for (_, entity) in self.entities.iter() {
            let (Some(body), Some(node)) = (entity.body(), entity.graphic_model()) else {
                continue;
            };
            let Ok(pose) = self.physics.transform(body) else {
                continue;
            };
            self.graphics.set_pose(node, pose, entity.scale);
        }
    }

    /// Tear down physics before entities and render nodes go away. Idempotent.
    pub fn shutdown(&mut self) {
        self.running = false;
        self.physics.teardown();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.physics
    }

    pub fn physics_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.physics
    }

    pub fn graphics(&self) -> &SceneGraph {
        &self.graphics
    }

    pub fn entities(&self) -> &EntityRegistry {
        &self.entities
    }

    pub fn contacts(&self) -> &ContactMediator {
        &self.contacts
    }

    pub fn tank(&self) -> Option<&Tank> {
        self.tank.as_ref()
    }

    pub fn platform(&self) -> Option<&Platform> {
        self.platform.as_ref()
    }

    /// Current body translation of the named entity.
    pub fn position_of(&self, name: &str) -> Result<Vec3, SimError> {
        let id = self.entities.require(name)?;
        let body = self.entities[id].require_body()?;
        self.physics.translation(body)
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tank::muzzle_point;
    use crate::types::{Iso, Rgb};

    fn tank_scene() -> Scene {
        let mut scene = Scene::default();
        scene.add_tank(&TankLayout::default()).unwrap();
        scene
    }

    fn fire() -> FrameInput {
        FrameInput {
            events: vec![InputEvent::FirePressed],
            ..FrameInput::default()
        }
    }

    #[test]
    fn fire_event_launches_slot_zero_from_the_muzzle() {
        let mut scene = tank_scene();
        let tank = scene.tank().unwrap();
        let cannon = scene.entities()[tank.cannon].transform(scene.physics());
        let expected = muzzle_point(&cannon);

        let mut tank = scene.tank.take().unwrap();
        let slot = tank.fire_projectile(&mut scene.entities, &mut scene.physics, &mut scene.graphics);
        assert_eq!(slot, 0);
        assert_eq!(tank.cursor(), 1);

        let projectile = &scene.entities[tank.projectiles()[0]];
        assert!(projectile.is_active());
        let spawned = scene.physics.translation(projectile.body().unwrap()).unwrap();
        assert!((spawned - expected).norm() < 1e-5);
    }

    #[test]
    fn projectile_flies_along_the_cannon_after_a_frame() {
        let mut scene = tank_scene();
        let ground = EntityDef::cube("ground", vec3(0.0, -1.5, 0.0), vec3(20.0, 1.0, 20.0), 0.0, Rgb::WHITE);
        scene.add_entity(&ground).unwrap();
        // Let the joints pull the turret and cannon onto their mounts first.
        for _ in 0..120 {
            scene.frame(&FrameInput::default());
        }
        scene.frame(&fire());

        let tank = scene.tank().unwrap();
        let body = scene.entities()[tank.projectiles()[0]].body().unwrap();
        let velocity = scene.physics().linear_velocity(body).unwrap();
        assert!(velocity.z < -10.0);
        assert_eq!(tank.cursor(), 1);
    }

    #[test]
    fn close_event_still_completes_the_frame() {
        let mut scene = tank_scene();
        let outcome = scene.frame(&FrameInput {
            events: vec![InputEvent::Close, InputEvent::FirePressed],
            ..FrameInput::default()
        });

        assert!(!outcome.running);
        assert_eq!(outcome.frame, 1);
        assert_eq!(scene.tank().unwrap().cursor(), 1);
    }

    #[test]
    fn resize_event_updates_the_camera() {
        let mut scene = Scene::default();
        scene.frame(&FrameInput {
            events: vec![InputEvent::Resized { width: 1024, height: 512 }],
            ..FrameInput::default()
        });
        assert_eq!(scene.graphics().camera.aspect, 2.0);
    }

    #[test]
    fn sync_copies_pose_and_scale() {
        let mut scene = Scene::default();
        let def = EntityDef::cube("crate", vec3(0.0, 5.0, 0.0), vec3(1.0, 2.0, 3.0), 1.0, Rgb::WHITE);
        let id = scene.add_entity(&def).unwrap();

        for _ in 0..5 {
            scene.frame(&FrameInput::default());
        }

        let body = scene.entities()[id].body().unwrap();
        let node = scene.entities()[id].graphic_model().unwrap();
        let pose: Iso = scene.physics().transform(body).unwrap();
        let rendered = scene.graphics().node(node).unwrap();
        assert_eq!(rendered.transform, pose);
        assert_eq!(rendered.scale, vec3(1.0, 2.0, 3.0));
        assert!(pose.translation.vector.y < 5.0);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut scene = Scene::default();
        let def = EntityDef::cube("wall", Vec3::zeros(), Vec3::repeat(1.0), 0.0, Rgb::WHITE);
        scene.add_entity(&def).unwrap();
        assert_eq!(scene.add_entity(&def), Err(SimError::DuplicateName("wall".into())));
    }

    #[test]
    fn forward_input_moves_the_tank_ahead() {
        let run = |controls: HeldControls| {
            let mut scene = tank_scene();
            let ground = EntityDef::cube("ground", vec3(0.0, -1.5, 0.0), vec3(20.0, 1.0, 20.0), 0.0, Rgb::WHITE);
            scene.add_entity(&ground).unwrap();
            let input = FrameInput {
                held: controls,
                ..FrameInput::default()
            };
            for _ in 0..90 {
                scene.frame(&input);
            }
            scene.position_of("chassis").unwrap().z
        };

        let idle = run(HeldControls::default());
        let driven = run(HeldControls {
            forward: true,
            ..HeldControls::default()
        });
        assert!(driven < idle - 0.1);
    }

    #[test]
    fn shutdown_empties_physics() {
        let mut scene = tank_scene();
        scene.shutdown();
        assert!(!scene.is_running());
        assert_eq!(scene.physics().body_count(), 0);
        assert_eq!(scene.physics().constraint_count(), 0);
    }
}
