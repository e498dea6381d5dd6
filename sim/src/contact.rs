//! Contact-driven gameplay: the key unlocks the door.
//!
//! After every physics step the mediator walks the contact points reported by a
//! [`ContactSource`]. A penetrating contact between the active key and any of the
//! tank's drive parts consumes the key and starts the door's open animation,
//! which runs once per frame until the door is within one step of its end point.

use crate::entity::{EntityId, EntityRegistry};
use crate::graphics::SceneGraph;
use crate::physics::{BodyId, PhysicsWorld};
use crate::platform::LinearPath;
use crate::tank::Tank;
use crate::types::Vec3;

/// Anything that can enumerate contact points as `(body_a, body_b, depth)`.
/// Negative depth means the shapes interpenetrate.
pub trait ContactSource {
    fn for_each_contact(&self, visit: &mut dyn FnMut(BodyId, BodyId, f32));
}

#[derive(Clone, Debug)]
struct Door {
    entity: EntityId,
    path: LinearPath,
}

#[derive(Debug, Default)]
pub struct ContactMediator {
    key: Option<EntityId>,
    door: Option<Door>,
    tank_parts: Option<[EntityId; 3]>,
    door_open: bool,
}

impl ContactMediator {
    pub fn door_open(&self) -> bool {
        self.door_open
    }

    pub fn door(&self) -> Option<EntityId> {
        self.door.as_ref().map(|door| door.entity)
    }

    pub fn key(&self) -> Option<EntityId> {
        self.key
    }

    /// Current door velocity; zero once the door has finished opening.
    pub fn door_velocity(&self) -> Option<Vec3> {
        self.door.as_ref().map(|door| door.path.velocity)
    }

    pub fn register_key(&mut self, key: EntityId) {
        self.key = Some(key);
    }

    pub fn register_door(
        &mut self,
        door: EntityId,
        path: LinearPath,
        entities: &EntityRegistry,
        physics: &mut PhysicsWorld,
    ) {
        self.door = Some(Door { entity: door, path });
        self.ignore_door_contacts(entities, physics);
    }

    /// Remember the tank's drive parts (left track, right track, chassis).
    pub fn register_tank(&mut self, tank: &Tank, entities: &EntityRegistry, physics: &mut PhysicsWorld) {
        self.tank_parts = Some(tank.drive_parts());
        self.ignore_door_contacts(entities, physics);
    }

    /// The tank's drive parts pass through the door. Applied once both are known,
    /// whichever is registered first.
    fn ignore_door_contacts(&self, entities: &EntityRegistry, physics: &mut PhysicsWorld) {
        let (Some(door), Some(parts)) = (&self.door, self.tank_parts) else {
            return;
        };
        let Some(door_body) = entities[door.entity].body() else {
            return;
        };
        for part in parts {
            let Some(part_body) = entities[part].body() else {
                continue;
            };
            if let Err(err) = physics.ignore_collision(door_body, part_body) {
                log::warn!("door filter for `{}`: {err}", entities[part].name());
            }
        }
    }

    /// Consume the key on a penetrating contact with a tank drive part.
    pub fn scan_contacts<C: ContactSource + ?Sized>(
        &mut self,
        contacts: &C,
        entities: &mut EntityRegistry,
        graphics: &mut SceneGraph,
    ) {
        let (Some(key), Some(parts)) = (self.key, self.tank_parts) else {
            return;
        };
        if !entities[key].is_active() {
            return;
        }
        let Some(key_body) = entities[key].body() else {
            return;
        };
        let part_bodies: Vec<BodyId> = parts.iter().filter_map(|&p| entities[p].body()).collect();

        let mut touched = false;
        contacts.for_each_contact(&mut |a: BodyId, b: BodyId, depth: f32| {
            if depth >= 0.0 {
                return;
            }
            let other = if a == key_body {
                b
            } else if b == key_body {
                a
            } else {
                return;
            };
            touched |= part_bodies.contains(&other);
        });
        if !touched {
            return;
        }

        entities[key].set_active(false, graphics);
        let door_has_body = self
            .door
            .as_ref()
            .is_some_and(|door| entities[door.entity].body().is_some());
        if door_has_body {
            self.door_open = true;
            log::info!("key collected, opening door");
        } else {
            log::info!("key collected");
        }
    }

    /// One frame of the open animation. Stops (velocity zeroed, door closed for
    /// further updates) once the door is within one step of its end point.
    pub fn advance_door(&mut self, entities: &EntityRegistry, physics: &mut PhysicsWorld) {
        if !self.door_open {
            return;
        }
        let Some(door) = self.door.as_mut() else {
            return;
        };
        let Some(body) = entities[door.entity].body() else {
            return;
        };
        let Ok(position) = physics.translation(body) else {
            return;
        };

        let (next, finished) = door_step(&mut door.path, position);
        if finished {
            self.door_open = false;
            log::info!("door fully open");
        }
        if let Err(err) = physics.set_translation(body, next) {
            log::debug!("door: {err}");
        }
    }
}

/// Returns the next door position and whether the animation just finished.
fn door_step(path: &mut LinearPath, position: Vec3) -> (Vec3, bool) {
    let finished = path.reached_end(position);
    if finished {
        path.velocity = Vec3::zeros();
    }
    (position + path.velocity, finished)
}
