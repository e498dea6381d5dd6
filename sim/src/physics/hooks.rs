use std::collections::HashSet;

use rapier3d::prelude::{PairFilterContext, PhysicsHooks, RigidBodyHandle, SolverFlags};

/// Contact pair filter: bodies listed here never receive contact response against
/// each other. Contacts are still skipped entirely, so no manifolds are produced
/// for ignored pairs.
///
/// Only colliders flagged with `ActiveHooks::FILTER_CONTACT_PAIRS` consult this
/// filter; `PhysicsWorld::ignore_collision` sets the flag when it adds a pair.
#[derive(Debug, Default)]
pub struct IgnoredPairs {
    pairs: HashSet<(RigidBodyHandle, RigidBodyHandle)>,
}

impl IgnoredPairs {
    /// Records the pair in both orders.
    pub fn insert(&mut self, a: RigidBodyHandle, b: RigidBodyHandle) {
        self.pairs.insert((a, b));
        self.pairs.insert((b, a));
    }

    pub fn contains(&self, a: RigidBodyHandle, b: RigidBodyHandle) -> bool {
        self.pairs.contains(&(a, b))
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}

impl PhysicsHooks for IgnoredPairs {
    fn filter_contact_pair(&self, context: &PairFilterContext) -> Option<SolverFlags> {
        match (context.rigid_body1, context.rigid_body2) {
            (Some(a), Some(b)) if self.contains(a, b) => None,
            _ => Some(SolverFlags::COMPUTE_IMPULSES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapier3d::prelude::{RigidBodyBuilder, RigidBodySet};

    #[test]
    fn pairs_are_symmetric() {
        let mut bodies = RigidBodySet::new();
        let a = bodies.insert(RigidBodyBuilder::dynamic().build());
        let b = bodies.insert(RigidBodyBuilder::dynamic().build());
        let c = bodies.insert(RigidBodyBuilder::dynamic().build());

        let mut pairs = IgnoredPairs::default();
        assert!(!pairs.contains(a, b));
        pairs.insert(a, b);

        assert!(pairs.contains(a, b));
        assert!(pairs.contains(b, a));
        assert!(!pairs.contains(a, c));
        assert!(!pairs.contains(c, b));

        pairs.clear();
        assert!(!pairs.contains(a, b));
    }
}
