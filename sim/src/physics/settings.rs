use crate::constants::GRAVITY_MPS2;
use crate::types::Vec3;

/// World-level physics tuning.
///
/// Defaults reproduce the reference level: 10 m/s² gravity and no bounce on
/// anything the binding layer creates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsSettings {
    /// Gravity acceleration vector (m/s²).
    pub gravity: Vec3,
    /// Restitution given to every collider created by the binding layer.
    pub restitution: f32,
    /// Friction coefficient given to every collider created by the binding layer.
    /// Pair friction is the product of both coefficients.
    pub friction: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -GRAVITY_MPS2, 0.0),
            restitution: 0.0,
            friction: 0.5,
        }
    }
}
