use rapier3d::prelude::ColliderBuilder;

use crate::types::Vec3;

/// Shapes the binding layer builds bodies from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyShape {
    /// Box with the given half-extents (meters).
    Cuboid { half_extents: Vec3 },
    /// Sphere (meters).
    Ball { radius: f32 },
}

impl BodyShape {
    /// Diagonal local inertia tensor of a solid shape with the given mass.
    ///
    /// Box: `m/3 * (hy²+hz², hx²+hz², hx²+hy²)`. Sphere: `2/5 * m * r²` on each axis.
    pub fn local_inertia(&self, mass: f32) -> Vec3 {
        match *self {
            BodyShape::Cuboid { half_extents: h } => {
                let (x2, y2, z2) = (h.x * h.x, h.y * h.y, h.z * h.z);
                Vec3::new(y2 + z2, x2 + z2, x2 + y2) * (mass / 3.0)
            }
            BodyShape::Ball { radius } => Vec3::repeat(0.4 * mass * radius * radius),
        }
    }

    /// A collider builder with identity local pose; the parent body carries the placement.
    pub(crate) fn collider_builder(&self) -> ColliderBuilder {
        match *self {
            BodyShape::Cuboid { half_extents: h } => ColliderBuilder::cuboid(h.x, h.y, h.z),
            BodyShape::Ball { radius } => ColliderBuilder::ball(radius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_inertia_matches_solid_box_formula() {
        // Unit half-extents, mass 3: each axis is 3/3 * (1 + 1) = 2.
        let shape = BodyShape::Cuboid {
            half_extents: Vec3::new(1.0, 1.0, 1.0),
        };
        assert_eq!(shape.local_inertia(3.0), Vec3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn box_inertia_is_largest_about_the_short_axis() {
        let shape = BodyShape::Cuboid {
            half_extents: Vec3::new(0.25, 0.25, 1.0),
        };
        let inertia = shape.local_inertia(1.0);
        assert!(inertia.x > inertia.z);
        assert!((inertia.x - inertia.y).abs() < 1e-6);
    }

    #[test]
    fn ball_inertia_is_isotropic() {
        let shape = BodyShape::Ball { radius: 0.5 };
        let inertia = shape.local_inertia(2.0);
        assert!((inertia.x - 0.2).abs() < 1e-6);
        assert_eq!(inertia.x, inertia.y);
        assert_eq!(inertia.y, inertia.z);
    }
}
