use std::collections::HashMap;
use std::ops::{Index, IndexMut};

use crate::error::{ComponentKind, SimError};
use crate::graphics::{NodeId, SceneGraph};
use crate::physics::{BodyId, PhysicsWorld};
use crate::types::{Iso, Vec3};

/// Dense index of an entity in an [`EntityRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named simulated object: at most one physics body and one render node,
/// plus cached placement and an active flag.
#[derive(Clone, Debug)]
pub struct Entity {
    name: String,
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    active: bool,
    body: Option<BodyId>,
    model: Option<NodeId>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: Vec3::zeros(),
            rotation: Vec3::zeros(),
            scale: Vec3::repeat(1.0),
            active: true,
            body: None,
            model: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attach (or replace) the physics body. `None` is rejected and leaves the
    /// previous attachment in place.
    pub fn attach_physics(&mut self, body: Option<BodyId>) -> Result<(), SimError> {
        match body {
            Some(body) => {
                self.body = Some(body);
                Ok(())
            }
            None => Err(self.null_attachment(ComponentKind::Physics)),
        }
    }

    /// Attach (or replace) the render node. `None` is rejected and leaves the
    /// previous attachment in place.
    pub fn attach_graphics(&mut self, node: Option<NodeId>) -> Result<(), SimError> {
        match node {
            Some(node) => {
                self.model = Some(node);
                Ok(())
            }
            None => Err(self.null_attachment(ComponentKind::Graphics)),
        }
    }

    fn null_attachment(&self, component: ComponentKind) -> SimError {
        log::warn!("entity `{}`: ignoring null {component} attachment", self.name);
        SimError::NullAttachment {
            entity: self.name.clone(),
            component,
        }
    }

    pub fn body(&self) -> Option<BodyId> {
        if self.body.is_none() {
            log::debug!("entity `{}` has no physics body", self.name);
        }
        self.body
    }

    pub fn graphic_model(&self) -> Option<NodeId> {
        if self.model.is_none() {
            log::debug!("entity `{}` has no render node", self.name);
        }
        self.model
    }

    /// Like [`Self::body`] but as an error, for setup paths that need the body.
    pub fn require_body(&self) -> Result<BodyId, SimError> {
        self.body.ok_or_else(|| SimError::MissingComponent {
            entity: self.name.clone(),
            component: ComponentKind::Physics,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Toggle the active flag and mirror it onto the render node's visibility.
    pub fn set_active(&mut self, state: bool, graphics: &mut SceneGraph) {
        self.active = state;
        if let Some(node) = self.model {
            graphics.set_visible(node, state);
        }
    }

    /// World placement of the attached body; identity when there is none.
    pub fn transform(&self, physics: &PhysicsWorld) -> Iso {
        let Some(body) = self.body() else {
            return Iso::identity();
        };
        physics.transform(body).unwrap_or_else(|err| {
            log::debug!("entity `{}`: {err}", self.name);
            Iso::identity()
        })
    }
}

/// Arena of entities with unique names.
///
/// Iteration order is creation order; the per-frame transform sync walks it densely.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    entities: Vec<Entity>,
    by_name: HashMap<String, EntityId>,
}

impl EntityRegistry {
    pub fn create(&mut self, name: &str) -> Result<EntityId, SimError> {
        if self.by_name.contains_key(name) {
            return Err(SimError::DuplicateName(name.to_owned()));
        }
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(Entity::new(name));
        self.by_name.insert(name.to_owned(), id);
        Ok(id)
    }

    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.by_name.get(name).copied()
    }

    pub fn require(&self, name: &str) -> Result<EntityId, SimError> {
        self.id_of(name)
            .ok_or_else(|| SimError::UnknownEntity(name.to_owned()))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i as u32), e))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Index<EntityId> for EntityRegistry {
    type Output = Entity;

    fn index(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }
}

impl IndexMut<EntityId> for EntityRegistry {
    fn index_mut(&mut self, id: EntityId) -> &mut Entity {
        &mut self.entities[id.index()]
    }
}
