use crate::entity::{EntityId, EntityRegistry};
use crate::physics::PhysicsWorld;
use crate::types::Vec3;

/// Straight-line back-and-forth path advanced by a fixed per-frame velocity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearPath {
    pub start: Vec3,
    pub end: Vec3,
    pub velocity: Vec3,
}

impl LinearPath {
    pub fn new(start: Vec3, end: Vec3, velocity: Vec3) -> Self {
        Self { start, end, velocity }
    }

    /// Within one velocity step of `end`.
    pub fn reached_end(&self, position: Vec3) -> bool {
        (self.end - position).norm() < self.velocity.norm()
    }

    /// Swap the endpoints and flip the velocity.
    pub fn reverse(&mut self) {
        self.velocity = -self.velocity;
        std::mem::swap(&mut self.start, &mut self.end);
    }

    /// Next position from `position`, reversing first if the target is reached.
    pub fn step_from(&mut self, position: Vec3) -> Vec3 {
        if self.reached_end(position) {
            self.reverse();
        }
        position + self.velocity
    }
}

/// Entity moved along a [`LinearPath`] once per frame.
#[derive(Clone, Debug)]
pub struct Platform {
    pub entity: EntityId,
    pub path: LinearPath,
}

impl Platform {
    pub fn new(entity: EntityId, path: LinearPath) -> Self {
        Self { entity, path }
    }

    /// Move the platform body one step. Entities without a body are skipped.
    pub fn advance(&mut self, entities: &EntityRegistry, physics: &mut PhysicsWorld) {
        let Some(body) = entities[self.entity].body() else {
            return;
        };
        let Ok(position) = physics.translation(body) else {
            return;
        };
        let next = self.path.step_from(position);
        if let Err(err) = physics.set_translation(body, next) {
            log::debug!("platform: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_path() -> LinearPath {
        LinearPath::new(
            Vec3::new(10.0, -1.0, -20.0),
            Vec3::new(10.0, -1.0, 20.0),
            Vec3::new(0.0, 0.0, 0.025),
        )
    }

    #[test]
    fn reverses_only_within_one_step_of_target() {
        let mut path = reference_path();

        let far = path.step_from(Vec3::new(10.0, -1.0, 19.9));
        assert!((far.z - 19.925).abs() < 1e-5);
        assert!(path.velocity.z > 0.0);

        let near = path.step_from(Vec3::new(10.0, -1.0, 19.99));
        assert!(path.velocity.z < 0.0);
        assert_eq!(path.end, Vec3::new(10.0, -1.0, -20.0));
        assert!((near.z - 19.965).abs() < 1e-5);
    }

    #[test]
    fn full_cycle_returns_near_start() {
        let mut path = reference_path();
        let start = path.start;
        let mut position = start;
        let mut reversals = 0;
        let mut heading = path.velocity.z.signum();

        for _ in 0..10_000 {
            position = path.step_from(position);
            if path.velocity.z.signum() != heading {
                heading = path.velocity.z.signum();
                reversals += 1;
                if reversals == 2 {
                    break;
                }
            }
        }

        assert_eq!(reversals, 2);
        assert!((position - start).norm() <= path.velocity.norm() * 2.0);
    }
}
