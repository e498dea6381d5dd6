use std::fmt;

use thiserror::Error;

use crate::physics::BodyId;

/// Which component slot of an entity an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ComponentKind {
    Physics,
    Graphics,
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentKind::Physics => f.write_str("physics"),
            ComponentKind::Graphics => f.write_str("graphics"),
        }
    }
}

/// Errors raised by scene setup and entity wiring.
///
/// None of these are fatal at runtime: per-frame code falls back to neutral values
/// (no body, identity transform) and only setup paths propagate them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("entity `{entity}`: refusing to attach a null {component} component")]
    NullAttachment {
        entity: String,
        component: ComponentKind,
    },

    #[error("entity `{entity}` has no {component} component")]
    MissingComponent {
        entity: String,
        component: ComponentKind,
    },

    #[error("physics body {0:?} is not registered with the world")]
    UnknownBody(BodyId),

    #[error("no entity named `{0}`")]
    UnknownEntity(String),

    #[error("an entity named `{0}` is already registered")]
    DuplicateName(String),

    #[error("a projectile pool needs at least one slot")]
    EmptyProjectilePool,
}
