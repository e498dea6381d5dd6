/*!
Physics binding layer.

Translates declarative body requests (origin, box half-extents, mass) into rapier
bodies and colliders, keeps every created record alive in an arena, and exposes
the few queries and mutations gameplay needs.

- settings: world-level tuning (gravity, restitution)
- shapes:   the shapes a body can be built from and their local inertia
- hooks:    pair filter that disables contact response between chosen bodies
- world:    `PhysicsWorld`, the owner of all rapier state and records
*/

pub mod hooks;
pub mod settings;
pub mod shapes;
pub mod world;

pub use settings::PhysicsSettings;
pub use shapes::BodyShape;
pub use world::{BodyRecord, ConstraintKind, ConstraintRecord, PhysicsWorld};

/// Stable identifier of a body record in a [`PhysicsWorld`].
///
/// Ids index the world's keep-alive arena; they are never reused while the world is alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub(crate) u32);

impl BodyId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Stable identifier of a constraint record in a [`PhysicsWorld`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointId(pub(crate) u32);

impl JointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
